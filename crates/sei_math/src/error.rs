// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    #[error("empty number string")]
    Empty,

    #[error("invalid number string: {0:?}")]
    Malformed(String),

    #[error("too many fractional digits: got {got}, max {max}")]
    TooPrecise { got: usize, max: usize },
}
