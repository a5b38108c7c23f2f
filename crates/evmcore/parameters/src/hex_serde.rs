// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use rustc_hex::{FromHex, FromHexError, ToHex};

pub fn to_hex_strings(hashes: &[Vec<u8>]) -> Vec<String> {
    hashes.iter().map(|hash| hash.to_hex::<String>()).collect()
}

/// Accepts both bare and `0x`-prefixed hex.
pub fn from_hex_strings(
    strings: &[String],
) -> Result<Vec<Vec<u8>>, FromHexError> {
    strings
        .iter()
        .map(|s| s.strip_prefix("0x").unwrap_or(s).from_hex::<Vec<u8>>())
        .collect()
}

/// Serde adapter rendering a list of raw hashes as hex strings.
pub mod byte_hash_list {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        hashes: &[Vec<u8>], serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::to_hex_strings(hashes).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<u8>>, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        super::from_hex_strings(&strings).map_err(de::Error::custom)
    }
}
