// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use std::{
    fmt,
    ops::{Add, Neg, Sub},
    str::FromStr,
};

use num::{BigInt, Integer, One, Signed, Zero};

use crate::ParseNumberError;

/// Number of fractional decimal digits carried by a [`Dec`].
pub const DEC_PRECISION: usize = 18;

fn precision_multiplier() -> BigInt {
    num::pow(BigInt::from(10u64), DEC_PRECISION)
}

/// Signed fixed-point decimal with [`DEC_PRECISION`] fractional digits.
///
/// The inner integer holds `value * 10^18`, so every value is exact and
/// ordering is plain integer ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(BigInt);

impl Dec {
    pub fn zero() -> Self {
        Dec(BigInt::zero())
    }

    pub fn one() -> Self {
        Dec(precision_multiplier())
    }

    pub fn from_int(value: i64) -> Self {
        Dec(BigInt::from(value) * precision_multiplier())
    }

    /// The smallest representable positive value, `10^-18`.
    pub fn smallest_positive() -> Self {
        Dec(BigInt::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl From<i64> for Dec {
    fn from(value: i64) -> Self {
        Dec::from_int(value)
    }
}

impl From<u64> for Dec {
    fn from(value: u64) -> Self {
        Dec(BigInt::from(value) * precision_multiplier())
    }
}

impl FromStr for Dec {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseNumberError::Empty);
        }
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => {
                if frac_part.is_empty() {
                    return Err(ParseNumberError::Malformed(s.into()));
                }
                (int_part, frac_part)
            }
            None => (unsigned, ""),
        };
        let all_digits =
            |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if int_part.is_empty()
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(ParseNumberError::Malformed(s.into()));
        }
        if frac_part.len() > DEC_PRECISION {
            return Err(ParseNumberError::TooPrecise {
                got: frac_part.len(),
                max: DEC_PRECISION,
            });
        }

        let scaled = format!(
            "{}{:0<width$}",
            int_part,
            frac_part,
            width = DEC_PRECISION
        );
        let atomics = BigInt::parse_bytes(scaled.as_bytes(), 10)
            .ok_or_else(|| ParseNumberError::Malformed(s.into()))?;
        Ok(Dec(if negative { -atomics } else { atomics }))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac_part) =
            self.0.abs().div_rem(&precision_multiplier());
        let sign = if self.0.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}.{:0>width$}",
            sign,
            int_part,
            frac_part.to_str_radix(10),
            width = DEC_PRECISION
        )
    }
}

impl Add for Dec {
    type Output = Dec;

    fn add(self, rhs: Dec) -> Dec {
        Dec(self.0 + rhs.0)
    }
}

impl Sub for Dec {
    type Output = Dec;

    fn sub(self, rhs: Dec) -> Dec {
        Dec(self.0 - rhs.0)
    }
}

impl Neg for Dec {
    type Output = Dec;

    fn neg(self) -> Dec {
        Dec(-self.0)
    }
}
