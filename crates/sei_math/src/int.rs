// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use std::{fmt, str::FromStr};

use num::{BigInt, Signed, Zero};

use crate::ParseNumberError;

/// Signed arbitrary-precision integer.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(BigInt);

impl Int {
    pub fn zero() -> Self {
        Int(BigInt::zero())
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Int(BigInt::from(value))
    }
}

impl From<u64> for Int {
    fn from(value: u64) -> Self {
        Int(BigInt::from(value))
    }
}

impl FromStr for Int {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseNumberError::Empty);
        }
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseNumberError::Malformed(s.into()));
        }
        BigInt::parse_bytes(s.as_bytes(), 10)
            .map(Int)
            .ok_or_else(|| ParseNumberError::Malformed(s.into()))
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_str_radix(10))
    }
}
