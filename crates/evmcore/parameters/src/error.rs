// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use thiserror::Error;

use crate::{ChainConfigError, ParamKind};

pub type Result<T> = std::result::Result<T, ParamError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error(
        "invalid parameter type for {key}: expected {expected}, got {actual}"
    )]
    InvalidType {
        key: String,
        expected: ParamKind,
        actual: ParamKind,
    },

    #[error("empty {param}")]
    EmptyValue { param: &'static str },

    #[error("nonpositive {param}: {value}")]
    NonPositiveValue { param: &'static str, value: String },

    #[error("negative {param}: {value}")]
    NegativeValue { param: &'static str, value: String },

    #[error(
        "minimum fee cannot be lower than base fee: minimum={minimum}, base={base}"
    )]
    InconsistentFees { minimum: String, base: String },

    #[error(transparent)]
    ChainConfig(#[from] ChainConfigError),

    #[error("parameter key not registered: {0}")]
    UnknownKey(String),

    #[error("parameter {0} has no stored value")]
    NotFound(String),

    #[error("failed to decode parameter {key}: {reason}")]
    Decode { key: String, reason: String },

    #[error("failed to encode parameter {key}: {reason}")]
    Encode { key: String, reason: String },
}

/// Renders a raw storage key for error messages and logs.
pub(crate) fn key_name(key: &[u8]) -> String {
    String::from_utf8_lossy(key).into_owned()
}
