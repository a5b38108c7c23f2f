// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! The EVM module parameter set: storage keys, genesis defaults and the
//! acceptance rules applied at genesis and to every governance update.

use std::fmt;

use hex_literal::hex;
use sei_math::{Dec, Int};
use serde::{Deserialize, Serialize};

use crate::{
    artifacts::{code_hash_hex, native_contract_code_hash},
    hex_serde,
    param_set::typed_validator,
    subspace::{KvStore, Subspace},
    ChainConfig, KeyTable, ParamError, ParamField, ParamSet, ParamSetPair,
    ParamSetPairs, Result,
};

pub const KEY_BASE_DENOM: &[u8] = b"KeyBaseDenom";
pub const KEY_PRIORITY_NORMALIZER: &[u8] = b"KeyPriorityNormalizer";
pub const KEY_BASE_FEE_PER_GAS: &[u8] = b"KeyBaseFeePerGas";
pub const KEY_MIN_FEE_PER_GAS: &[u8] = b"KeyMinFeePerGas";
pub const KEY_CHAIN_CONFIG: &[u8] = b"KeyChainConfig";
pub const KEY_CHAIN_ID: &[u8] = b"KeyChainID";
pub const KEY_WHITELISTED_CODE_HASHES_BANK_SEND: &[u8] =
    b"KeyWhitelistedCodeHashesBankSend";
pub const KEY_WHITELISTED_CW_CODE_HASHES_FOR_DELEGATE_CALL: &[u8] =
    b"KeyWhitelistedCwCodeHashesForDelegateCall";

/// Number of parameters in [`Params`].
pub const PARAMS_COUNT: usize = 8;

pub const DEFAULT_BASE_DENOM: &str = "usei";
pub const DEFAULT_CHAIN_ID: u64 = 713715;
/// Fee floor in usei per gas.
pub const DEFAULT_MIN_FEE_PER_GAS: u64 = 1_000_000_000;

/// Code hash of the CW20 token contract template.
pub const CW20_CODE_HASH: [u8; 32] =
    hex!("A25D78D7ACD2EE47CC39C224E162FE79B53E6BBE6ED2A56E8C0A86593EBE6102");
/// Code hash of the CW721 NFT contract template.
pub const CW721_CODE_HASH: [u8; 32] =
    hex!("94CDD9C3E85C26F7CEC43C23BFB4B3B2B2D71A0A8D85C58DF12FFEC0741FEBC8");

pub fn default_priority_normalizer() -> Dec {
    Dec::one()
}

/// How much usei per gas spent is burnt rather than paid to validators,
/// similar to the base fee on Ethereum.
pub fn default_base_fee_per_gas() -> Dec {
    Dec::zero()
}

pub fn default_min_fee_per_gas() -> Dec {
    Dec::from(DEFAULT_MIN_FEE_PER_GAS)
}

pub fn default_chain_id() -> Int {
    Int::from(DEFAULT_CHAIN_ID)
}

/// The native token contract is the only bytecode allowed to trigger
/// bank sends out of the box. Derived from the embedded artifact, so it
/// follows the artifact without a governance proposal.
pub fn default_whitelisted_code_hashes_bank_send() -> Vec<String> {
    vec![code_hash_hex(&native_contract_code_hash())]
}

pub fn default_whitelisted_cw_code_hashes_for_delegate_call() -> Vec<Vec<u8>> {
    vec![CW20_CODE_HASH.to_vec(), CW721_CODE_HASH.to_vec()]
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Params {
    pub base_denom: String,
    pub priority_normalizer: Dec,
    pub base_fee_per_gas: Dec,
    pub minimum_fee_per_gas: Dec,
    pub chain_config: ChainConfig,
    pub chain_id: Int,
    pub whitelisted_codehashes_bank_send: Vec<String>,
    #[serde(with = "hex_serde::byte_hash_list")]
    pub whitelisted_cw_code_hashes_for_delegate_call: Vec<Vec<u8>>,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            base_denom: DEFAULT_BASE_DENOM.into(),
            priority_normalizer: default_priority_normalizer(),
            base_fee_per_gas: default_base_fee_per_gas(),
            minimum_fee_per_gas: default_min_fee_per_gas(),
            chain_config: ChainConfig::default(),
            chain_id: default_chain_id(),
            whitelisted_codehashes_bank_send:
                default_whitelisted_code_hashes_bank_send(),
            whitelisted_cw_code_hashes_for_delegate_call:
                default_whitelisted_cw_code_hashes_for_delegate_call(),
        }
    }
}

/// Genesis parameter set.
pub fn default_params() -> Params {
    Params::default()
}

/// Key table to initialise the module's parameter subspace with.
pub fn param_key_table() -> KeyTable {
    KeyTable::new().register_param_set(&mut Params::default())
}

impl ParamSet for Params {
    fn param_set_pairs(&mut self) -> ParamSetPairs<'_> {
        vec![
            ParamSetPair::new(
                KEY_BASE_DENOM,
                ParamField::String(&mut self.base_denom),
                base_denom_validator,
            ),
            ParamSetPair::new(
                KEY_PRIORITY_NORMALIZER,
                ParamField::Dec(&mut self.priority_normalizer),
                priority_normalizer_validator,
            ),
            ParamSetPair::new(
                KEY_BASE_FEE_PER_GAS,
                ParamField::Dec(&mut self.base_fee_per_gas),
                base_fee_per_gas_validator,
            ),
            ParamSetPair::new(
                KEY_MIN_FEE_PER_GAS,
                ParamField::Dec(&mut self.minimum_fee_per_gas),
                min_fee_per_gas_validator,
            ),
            ParamSetPair::new(
                KEY_CHAIN_CONFIG,
                ParamField::ChainConfig(&mut self.chain_config),
                chain_config_validator,
            ),
            ParamSetPair::new(
                KEY_CHAIN_ID,
                ParamField::Int(&mut self.chain_id),
                chain_id_validator,
            ),
            ParamSetPair::new(
                KEY_WHITELISTED_CODE_HASHES_BANK_SEND,
                ParamField::HexHashList(
                    &mut self.whitelisted_codehashes_bank_send,
                ),
                whitelisted_code_hashes_bank_send_validator,
            ),
            ParamSetPair::new(
                KEY_WHITELISTED_CW_CODE_HASHES_FOR_DELEGATE_CALL,
                ParamField::ByteHashList(
                    &mut self.whitelisted_cw_code_hashes_for_delegate_call,
                ),
                whitelisted_cw_hashes_for_delegate_call_validator,
            ),
        ]
    }
}

impl Params {
    /// Acceptance gate for genesis and governance updates.
    ///
    /// Checks run in a fixed order and stop at the first failure, so every
    /// node reports the same error for the same input.
    pub fn validate(&self) -> Result<()> {
        validate_base_denom(&self.base_denom)?;
        validate_priority_normalizer(&self.priority_normalizer)?;
        validate_base_fee_per_gas(&self.base_fee_per_gas)?;
        validate_min_fee_per_gas(&self.minimum_fee_per_gas)?;
        if self.minimum_fee_per_gas < self.base_fee_per_gas {
            return Err(ParamError::InconsistentFees {
                minimum: self.minimum_fee_per_gas.to_string(),
                base: self.base_fee_per_gas.to_string(),
            });
        }
        validate_chain_id(&self.chain_id)?;
        validate_chain_config(&self.chain_config)?;
        validate_whitelisted_code_hashes_bank_send(
            &self.whitelisted_codehashes_bank_send,
        )?;
        validate_whitelisted_cw_hashes_for_delegate_call(
            &self.whitelisted_cw_code_hashes_for_delegate_call,
        )
    }

    /// Parses the text produced by the `Display` impl.
    pub fn from_text(text: &str) -> Result<Params> {
        serde_json::from_str(text).map_err(|e| ParamError::Decode {
            key: "params".into(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Reads the full parameter set out of the subspace.
pub fn get_params<S: KvStore>(subspace: &Subspace<S>) -> Result<Params> {
    let mut params = Params::default();
    subspace.get_param_set(&mut params)?;
    Ok(params)
}

/// Validates `params` as a whole and commits every field, or nothing.
pub fn set_params<S: KvStore>(
    subspace: &mut Subspace<S>, params: &mut Params,
) -> Result<()> {
    params.validate()?;
    subspace.set_param_set(params)
}

pub fn validate_base_denom(denom: &str) -> Result<()> {
    if denom.is_empty() {
        return Err(ParamError::EmptyValue { param: "base denom" });
    }
    Ok(())
}

pub fn validate_priority_normalizer(normalizer: &Dec) -> Result<()> {
    if !normalizer.is_positive() {
        return Err(ParamError::NonPositiveValue {
            param: "priority normalizer",
            value: normalizer.to_string(),
        });
    }
    Ok(())
}

pub fn validate_base_fee_per_gas(fee: &Dec) -> Result<()> {
    if fee.is_negative() {
        return Err(ParamError::NegativeValue {
            param: "base fee per gas",
            value: fee.to_string(),
        });
    }
    Ok(())
}

pub fn validate_min_fee_per_gas(fee: &Dec) -> Result<()> {
    if fee.is_negative() {
        return Err(ParamError::NegativeValue {
            param: "min fee per gas",
            value: fee.to_string(),
        });
    }
    Ok(())
}

pub fn validate_chain_config(config: &ChainConfig) -> Result<()> {
    Ok(config.validate()?)
}

pub fn validate_chain_id(chain_id: &Int) -> Result<()> {
    if chain_id.is_negative() {
        return Err(ParamError::NegativeValue {
            param: "chain id",
            value: chain_id.to_string(),
        });
    }
    Ok(())
}

/// Hash format is not checked here; only the container shape matters.
pub fn validate_whitelisted_code_hashes_bank_send(_: &[String]) -> Result<()> {
    Ok(())
}

pub fn validate_whitelisted_cw_hashes_for_delegate_call(
    _: &[Vec<u8>],
) -> Result<()> {
    Ok(())
}

typed_validator! {
    pub fn base_denom_validator: KEY_BASE_DENOM, String => validate_base_denom;
}
typed_validator! {
    pub fn priority_normalizer_validator: KEY_PRIORITY_NORMALIZER, Dec =>
        validate_priority_normalizer;
}
typed_validator! {
    pub fn base_fee_per_gas_validator: KEY_BASE_FEE_PER_GAS, Dec =>
        validate_base_fee_per_gas;
}
typed_validator! {
    pub fn min_fee_per_gas_validator: KEY_MIN_FEE_PER_GAS, Dec =>
        validate_min_fee_per_gas;
}
typed_validator! {
    pub fn chain_config_validator: KEY_CHAIN_CONFIG, ChainConfig =>
        validate_chain_config;
}
typed_validator! {
    pub fn chain_id_validator: KEY_CHAIN_ID, Int => validate_chain_id;
}
typed_validator! {
    pub fn whitelisted_code_hashes_bank_send_validator:
        KEY_WHITELISTED_CODE_HASHES_BANK_SEND, Vec<String> =>
        validate_whitelisted_code_hashes_bank_send;
}
typed_validator! {
    pub fn whitelisted_cw_hashes_for_delegate_call_validator:
        KEY_WHITELISTED_CW_CODE_HASHES_FOR_DELEGATE_CALL, Vec<Vec<u8>> =>
        validate_whitelisted_cw_hashes_for_delegate_call;
}

#[cfg(test)]
mod tests;
