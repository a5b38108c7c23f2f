// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Governance-mutable parameters of the EVM module.
//!
//! Every validating node must agree byte for byte on the keys, defaults
//! and validation rules defined here. The host parameter store reads and
//! writes values through [`ParamSetPairs`] and checks each write against
//! the [`KeyTable`] returned by [`param_key_table`].

#[macro_use]
extern crate log;

pub mod artifacts;
mod chain_config;
mod error;
pub mod genesis;
mod hex_serde;
mod param_set;
pub mod params;
pub mod subspace;

pub use self::{
    chain_config::{ChainConfig, ChainConfigError},
    error::{ParamError, Result},
    genesis::{GenesisError, GenesisParams},
    param_set::{
        Attribute, KeyTable, ParamField, ParamKind, ParamSet, ParamSetPair,
        ParamSetPairs, ParamType, ParamValidator, ParamValue,
    },
    params::{default_params, param_key_table, Params},
    subspace::{KvStore, MemoryKvStore, Subspace},
};
pub use sei_math::{Dec, Int};
