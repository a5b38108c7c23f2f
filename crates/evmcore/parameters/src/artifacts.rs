// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Build artifacts embedded into the binary.
//!
//! The code hash of the native token contract seeds the default bank-send
//! whitelist, so these bytes are consensus critical: every node must be
//! built from the identical artifact.

use keccak_hash::{keccak, H256};
use rustc_hex::{FromHex, FromHexError, ToHex};

const NATIVE_TOKENS_ERC20_BIN: &str =
    include_str!("../artifacts/native/native_tokens_erc20.bin");

/// Compiled bytecode of the native token ERC20 contract.
pub fn native_contract_bytecode() -> Result<Vec<u8>, FromHexError> {
    NATIVE_TOKENS_ERC20_BIN.trim().from_hex()
}

pub fn native_contract_code_hash() -> H256 {
    let bytecode = native_contract_bytecode()
        .expect("embedded native contract artifact is valid hex");
    keccak(bytecode)
}

/// `0x`-prefixed lowercase hex, the form code hashes take in the
/// bank-send whitelist.
pub fn code_hash_hex(hash: &H256) -> String {
    format!("0x{}", hash.as_bytes().to_hex::<String>())
}
