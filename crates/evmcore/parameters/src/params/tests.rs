// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::*;
use crate::{ChainConfigError, ParamKind, ParamValue};
use std::str::FromStr;

fn dec(s: &str) -> Dec {
    Dec::from_str(s).unwrap()
}

#[test]
fn default_params_validate() {
    assert_eq!(default_params().validate(), Ok(()));
}

#[test]
fn default_values() {
    let params = default_params();
    assert_eq!(params.base_denom, "usei");
    assert_eq!(params.priority_normalizer, Dec::one());
    assert_eq!(params.base_fee_per_gas, Dec::zero());
    assert_eq!(params.minimum_fee_per_gas, Dec::from_int(1_000_000_000));
    assert_eq!(params.chain_id, Int::from(713715i64));
    assert_eq!(params.chain_config, ChainConfig::default());
    assert_eq!(
        params.whitelisted_codehashes_bank_send,
        vec![
            "0xb4de8dddee9172f60d67cc9b6dae84ad36f000c51bfbd5dcd30a04530fddc0d3"
                .to_string()
        ]
    );
    assert_eq!(
        params.whitelisted_cw_code_hashes_for_delegate_call,
        vec![CW20_CODE_HASH.to_vec(), CW721_CODE_HASH.to_vec()]
    );
    assert_eq!(CW20_CODE_HASH[0], 0xa2);
    assert_eq!(CW721_CODE_HASH[31], 0xc8);
}

#[test]
fn defaults_are_reproducible() {
    assert_eq!(default_params(), default_params());
}

#[test]
fn empty_base_denom_is_rejected() {
    let params = Params {
        base_denom: String::new(),
        ..default_params()
    };
    assert_eq!(
        params.validate(),
        Err(ParamError::EmptyValue { param: "base denom" })
    );
}

#[test]
fn priority_normalizer_must_be_positive() {
    let zero = Params {
        priority_normalizer: Dec::zero(),
        ..default_params()
    };
    assert_eq!(
        zero.validate(),
        Err(ParamError::NonPositiveValue {
            param: "priority normalizer",
            value: "0.000000000000000000".into(),
        })
    );

    let negative = Params {
        priority_normalizer: dec("-1"),
        ..default_params()
    };
    assert!(matches!(
        negative.validate(),
        Err(ParamError::NonPositiveValue { .. })
    ));

    let smallest = Params {
        priority_normalizer: Dec::smallest_positive(),
        ..default_params()
    };
    assert_eq!(smallest.validate(), Ok(()));
}

#[test]
fn negative_fees_are_rejected() {
    let base = Params {
        base_fee_per_gas: dec("-0.000000000000000001"),
        ..default_params()
    };
    assert_eq!(
        base.validate(),
        Err(ParamError::NegativeValue {
            param: "base fee per gas",
            value: "-0.000000000000000001".into(),
        })
    );

    let minimum = Params {
        minimum_fee_per_gas: dec("-3"),
        ..default_params()
    };
    assert!(matches!(
        minimum.validate(),
        Err(ParamError::NegativeValue {
            param: "min fee per gas",
            ..
        })
    ));
}

#[test]
fn equal_fees_pass_and_base_above_minimum_fails() {
    let equal = Params {
        base_fee_per_gas: dec("7.25"),
        minimum_fee_per_gas: dec("7.25"),
        ..default_params()
    };
    assert_eq!(equal.validate(), Ok(()));

    let above = Params {
        base_fee_per_gas: dec("7.25") + Dec::smallest_positive(),
        minimum_fee_per_gas: dec("7.25"),
        ..default_params()
    };
    assert_eq!(
        above.validate(),
        Err(ParamError::InconsistentFees {
            minimum: "7.250000000000000000".into(),
            base: "7.250000000000000001".into(),
        })
    );
}

#[test]
fn chain_id_must_not_be_negative() {
    let negative = Params {
        chain_id: Int::from(-1i64),
        ..default_params()
    };
    assert_eq!(
        negative.validate(),
        Err(ParamError::NegativeValue {
            param: "chain id",
            value: "-1".into(),
        })
    );

    let zero = Params {
        chain_id: Int::zero(),
        ..default_params()
    };
    assert_eq!(zero.validate(), Ok(()));
}

#[test]
fn chain_config_errors_propagate_unchanged() {
    let params = Params {
        chain_config: ChainConfig {
            cancun_time: -1,
            ..Default::default()
        },
        ..default_params()
    };
    assert_eq!(
        params.validate(),
        Err(ParamError::ChainConfig(ChainConfigError::NegativeForkTime {
            fork: "cancun",
            time: -1,
        }))
    );
}

#[test]
fn whitelist_contents_are_not_inspected() {
    let params = Params {
        whitelisted_codehashes_bank_send: vec![
            "not a hash".into(),
            "not a hash".into(),
        ],
        whitelisted_cw_code_hashes_for_delegate_call: vec![vec![], vec![1]],
        ..default_params()
    };
    assert_eq!(params.validate(), Ok(()));
}

#[test]
fn validation_order_is_fixed() {
    // Everything is wrong; the base denom is reported first.
    let mut params = Params {
        base_denom: String::new(),
        priority_normalizer: Dec::zero(),
        base_fee_per_gas: dec("10"),
        minimum_fee_per_gas: dec("1"),
        chain_config: ChainConfig {
            verkle_time: -1,
            ..Default::default()
        },
        chain_id: Int::from(-1i64),
        ..default_params()
    };
    assert!(matches!(
        params.validate(),
        Err(ParamError::EmptyValue { .. })
    ));

    params.base_denom = "usei".into();
    assert!(matches!(
        params.validate(),
        Err(ParamError::NonPositiveValue { .. })
    ));

    params.priority_normalizer = Dec::one();
    assert!(matches!(
        params.validate(),
        Err(ParamError::InconsistentFees { .. })
    ));

    // The fee invariant is checked before the chain id.
    params.minimum_fee_per_gas = dec("10");
    assert!(matches!(
        params.validate(),
        Err(ParamError::NegativeValue {
            param: "chain id",
            ..
        })
    ));

    params.chain_id = default_chain_id();
    assert!(matches!(
        params.validate(),
        Err(ParamError::ChainConfig(_))
    ));

    params.chain_config = ChainConfig::default();
    assert_eq!(params.validate(), Ok(()));
}

#[test]
fn validation_is_idempotent() {
    let params = Params {
        base_fee_per_gas: dec("2"),
        minimum_fee_per_gas: dec("1"),
        ..default_params()
    };
    assert_eq!(params.validate(), params.validate());
    assert_eq!(default_params().validate(), default_params().validate());
}

#[test]
fn param_set_pairs_follow_declared_order() {
    let mut params = default_params();
    let keys: Vec<&[u8]> =
        params.param_set_pairs().iter().map(|pair| pair.key).collect();
    assert_eq!(keys.len(), PARAMS_COUNT);
    assert_eq!(
        keys,
        vec![
            &b"KeyBaseDenom"[..],
            &b"KeyPriorityNormalizer"[..],
            &b"KeyBaseFeePerGas"[..],
            &b"KeyMinFeePerGas"[..],
            &b"KeyChainConfig"[..],
            &b"KeyChainID"[..],
            &b"KeyWhitelistedCodeHashesBankSend"[..],
            &b"KeyWhitelistedCwCodeHashesForDelegateCall"[..],
        ]
    );

    let table = param_key_table();
    assert_eq!(table.keys().collect::<Vec<_>>(), keys);
}

#[test]
fn param_set_pairs_bind_fields_and_validators() {
    let mut params = default_params();
    for pair in params.param_set_pairs() {
        assert_eq!(pair.validate(), Ok(()), "{:?}", pair);
    }

    {
        let mut pairs = params.param_set_pairs();
        pairs[3].set(ParamValue::Dec(dec("42"))).unwrap();
        pairs[5].set(ParamValue::Int(Int::from(1329i64))).unwrap();
        pairs[0].set(ParamValue::String(String::new())).unwrap();
        assert_eq!(
            pairs[4].set(ParamValue::Int(Int::zero())),
            Err(ParamError::InvalidType {
                key: "KeyChainConfig".into(),
                expected: ParamKind::ChainConfig,
                actual: ParamKind::Int,
            })
        );
        assert_eq!(
            pairs[0].validate(),
            Err(ParamError::EmptyValue { param: "base denom" })
        );
    }
    assert_eq!(params.minimum_fee_per_gas, dec("42"));
    assert_eq!(params.chain_id, Int::from(1329i64));
    assert_eq!(params.base_denom, "");
}

#[test]
fn key_table_kinds_match_fields() {
    let table = param_key_table();
    let expected = [
        (KEY_BASE_DENOM, ParamKind::String),
        (KEY_PRIORITY_NORMALIZER, ParamKind::Dec),
        (KEY_BASE_FEE_PER_GAS, ParamKind::Dec),
        (KEY_MIN_FEE_PER_GAS, ParamKind::Dec),
        (KEY_CHAIN_CONFIG, ParamKind::ChainConfig),
        (KEY_CHAIN_ID, ParamKind::Int),
        (KEY_WHITELISTED_CODE_HASHES_BANK_SEND, ParamKind::HexHashList),
        (
            KEY_WHITELISTED_CW_CODE_HASHES_FOR_DELEGATE_CALL,
            ParamKind::ByteHashList,
        ),
    ];
    for (key, kind) in expected.iter() {
        assert_eq!(table.attribute(key).map(|a| a.kind), Some(*kind));
    }
}

#[test]
fn erased_validators_type_check_first() {
    assert_eq!(
        chain_id_validator(&ParamValue::Dec(Dec::one())),
        Err(ParamError::InvalidType {
            key: "KeyChainID".into(),
            expected: ParamKind::Int,
            actual: ParamKind::Dec,
        })
    );
    assert_eq!(
        whitelisted_cw_hashes_for_delegate_call_validator(
            &ParamValue::HexHashList(vec![])
        ),
        Err(ParamError::InvalidType {
            key: "KeyWhitelistedCwCodeHashesForDelegateCall".into(),
            expected: ParamKind::ByteHashList,
            actual: ParamKind::HexHashList,
        })
    );
    assert_eq!(
        whitelisted_code_hashes_bank_send_validator(&ParamValue::HexHashList(
            vec![]
        )),
        Ok(())
    );
    assert_eq!(
        priority_normalizer_validator(&ParamValue::Dec(Dec::zero())),
        Err(ParamError::NonPositiveValue {
            param: "priority normalizer",
            value: "0.000000000000000000".into(),
        })
    );
}

#[test]
fn text_rendering_round_trips() {
    let params = Params {
        priority_normalizer: dec("0.000000000000000001"),
        base_fee_per_gas: dec("123456789.123456789123456789"),
        minimum_fee_per_gas: dec("123456789.123456789123456789"),
        chain_id: Int::from_str("340282366920938463463374607431768211457")
            .unwrap(),
        ..default_params()
    };
    let text = params.to_string();
    assert!(text.contains("\"base_denom\": \"usei\""));
    assert!(text.contains("\"base_fee_per_gas\": \"123456789.123456789123456789\""));
    assert!(text.contains(
        "a25d78d7acd2ee47cc39c224e162fe79b53e6bbe6ed2a56e8c0a86593ebe6102"
    ));

    let parsed = Params::from_text(&text).unwrap();
    assert_eq!(parsed, params);

    // Same values through the field accessors.
    let mut original = params.clone();
    let mut reparsed = parsed;
    let original_values: Vec<_> = original
        .param_set_pairs()
        .iter()
        .map(|pair| pair.field.get())
        .collect();
    let reparsed_values: Vec<_> = reparsed
        .param_set_pairs()
        .iter()
        .map(|pair| pair.field.get())
        .collect();
    assert_eq!(original_values, reparsed_values);
}

#[test]
fn text_rendering_keeps_field_order() {
    let text = default_params().to_string();
    let positions: Vec<usize> = [
        "base_denom",
        "priority_normalizer",
        "base_fee_per_gas",
        "minimum_fee_per_gas",
        "chain_config",
        "chain_id",
        "whitelisted_codehashes_bank_send",
        "whitelisted_cw_code_hashes_for_delegate_call",
    ]
    .iter()
    .map(|field| text.find(&format!("\"{}\"", field)).unwrap())
    .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn from_text_rejects_garbage() {
    assert!(matches!(
        Params::from_text("{\"base_denom\": 1}"),
        Err(ParamError::Decode { .. })
    ));
}
