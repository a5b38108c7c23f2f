// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Genesis-file overrides of the default parameter set.
//!
//! ```toml
//! base_denom = "usei"
//! minimum_fee_per_gas = "100000000"
//! chain_id = 1329
//! whitelisted_cw_code_hashes_for_delegate_call = ["0xa25d...", "94cd..."]
//!
//! [chain_config]
//! prague_time = 1735689600
//! ```

use std::{fs, path::Path};

use sei_math::{Dec, Int};
use serde::Deserialize;
use thiserror::Error;

use crate::{hex_serde, params::default_params, ChainConfig, ParamError, Params};

#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("failed to read genesis file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse genesis parameters: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid delegate call code hash: {0}")]
    Hex(String),

    #[error("invalid genesis parameters: {0}")]
    Params(#[from] ParamError),
}

/// Every field is optional; absent fields keep their default.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenesisParams {
    pub base_denom: Option<String>,
    pub priority_normalizer: Option<Dec>,
    pub base_fee_per_gas: Option<Dec>,
    pub minimum_fee_per_gas: Option<Dec>,
    pub chain_config: Option<ChainConfig>,
    pub chain_id: Option<Int>,
    pub whitelisted_codehashes_bank_send: Option<Vec<String>>,
    pub whitelisted_cw_code_hashes_for_delegate_call: Option<Vec<String>>,
}

impl GenesisParams {
    pub fn from_toml_str(content: &str) -> Result<Self, GenesisError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, GenesisError> {
        let content = fs::read_to_string(path)?;
        let genesis = Self::from_toml_str(&content)?;
        info!("Loaded genesis parameter overrides from {}", path.display());
        Ok(genesis)
    }

    /// Overlays the overrides on the defaults and validates the result.
    /// An invalid genesis is rejected as a whole.
    pub fn into_params(self) -> Result<Params, GenesisError> {
        let mut params = default_params();
        if let Some(v) = self.base_denom {
            params.base_denom = v;
        }
        if let Some(v) = self.priority_normalizer {
            params.priority_normalizer = v;
        }
        if let Some(v) = self.base_fee_per_gas {
            params.base_fee_per_gas = v;
        }
        if let Some(v) = self.minimum_fee_per_gas {
            params.minimum_fee_per_gas = v;
        }
        if let Some(v) = self.chain_config {
            params.chain_config = v;
        }
        if let Some(v) = self.chain_id {
            params.chain_id = v;
        }
        if let Some(v) = self.whitelisted_codehashes_bank_send {
            params.whitelisted_codehashes_bank_send = v;
        }
        if let Some(v) = self.whitelisted_cw_code_hashes_for_delegate_call {
            params.whitelisted_cw_code_hashes_for_delegate_call =
                hex_serde::from_hex_strings(&v)
                    .map_err(|e| GenesisError::Hex(e.to_string()))?;
        }

        if let Err(e) = params.validate() {
            warn!("Rejected genesis parameters: {}", e);
            return Err(e.into());
        }
        Ok(params)
    }
}
