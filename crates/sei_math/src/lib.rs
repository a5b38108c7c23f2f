// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Arbitrary-precision numeric types used by governance parameters.

mod dec;
mod error;
mod int;
mod serde_impl;

pub use self::{
    dec::{Dec, DEC_PRECISION},
    error::ParseNumberError,
    int::Int,
};
