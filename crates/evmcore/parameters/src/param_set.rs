// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Binding between a parameter struct and the host key/value store.
//!
//! Values cross the store boundary as [`ParamValue`], a tagged union whose
//! tag is checked once against the [`ParamKind`] a key was registered with.
//! Validators are written against the concrete field type and wrapped by
//! [`typed_validator!`] into the erased [`ParamValidator`] form.

use std::{collections::HashMap, fmt};

use sei_math::{Dec, Int};

use crate::{
    error::key_name, hex_serde, ChainConfig, ParamError, Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    String,
    Dec,
    Int,
    ChainConfig,
    HexHashList,
    ByteHashList,
}

impl ParamKind {
    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Dec => "dec",
            ParamKind::Int => "int",
            ParamKind::ChainConfig => "chain_config",
            ParamKind::HexHashList => "hex_hash_list",
            ParamKind::ByteHashList => "byte_hash_list",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An owned parameter value of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    String(String),
    Dec(Dec),
    Int(Int),
    ChainConfig(ChainConfig),
    HexHashList(Vec<String>),
    ByteHashList(Vec<Vec<u8>>),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::String(_) => ParamKind::String,
            ParamValue::Dec(_) => ParamKind::Dec,
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::ChainConfig(_) => ParamKind::ChainConfig,
            ParamValue::HexHashList(_) => ParamKind::HexHashList,
            ParamValue::ByteHashList(_) => ParamKind::ByteHashList,
        }
    }

    /// Store encoding: JSON of the inner value, raw hashes as hex strings.
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        match self {
            ParamValue::String(v) => serde_json::to_vec(v),
            ParamValue::Dec(v) => serde_json::to_vec(v),
            ParamValue::Int(v) => serde_json::to_vec(v),
            ParamValue::ChainConfig(v) => serde_json::to_vec(v),
            ParamValue::HexHashList(v) => serde_json::to_vec(v),
            ParamValue::ByteHashList(v) => {
                serde_json::to_vec(&hex_serde::to_hex_strings(v))
            }
        }
    }

    pub fn decode(kind: ParamKind, raw: &[u8]) -> serde_json::Result<Self> {
        Ok(match kind {
            ParamKind::String => {
                ParamValue::String(serde_json::from_slice(raw)?)
            }
            ParamKind::Dec => ParamValue::Dec(serde_json::from_slice(raw)?),
            ParamKind::Int => ParamValue::Int(serde_json::from_slice(raw)?),
            ParamKind::ChainConfig => {
                ParamValue::ChainConfig(serde_json::from_slice(raw)?)
            }
            ParamKind::HexHashList => {
                ParamValue::HexHashList(serde_json::from_slice(raw)?)
            }
            ParamKind::ByteHashList => {
                let strings: Vec<String> = serde_json::from_slice(raw)?;
                let hashes = hex_serde::from_hex_strings(&strings).map_err(
                    <serde_json::Error as serde::de::Error>::custom,
                )?;
                ParamValue::ByteHashList(hashes)
            }
        })
    }
}

/// A concrete field type that can be carried by a [`ParamValue`].
pub trait ParamType: Sized {
    const KIND: ParamKind;

    fn from_value(value: &ParamValue) -> Option<&Self>;

    /// Borrows the typed value, or reports the kind actually observed
    /// for the parameter stored under `key`.
    fn checked<'v>(key: &[u8], value: &'v ParamValue) -> Result<&'v Self> {
        Self::from_value(value).ok_or_else(|| ParamError::InvalidType {
            key: key_name(key),
            expected: Self::KIND,
            actual: value.kind(),
        })
    }
}

macro_rules! impl_param_type {
    ($ty:ty, $variant:ident) => {
        impl ParamType for $ty {
            const KIND: ParamKind = ParamKind::$variant;

            fn from_value(value: &ParamValue) -> Option<&Self> {
                match value {
                    ParamValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

impl_param_type!(String, String);
impl_param_type!(Dec, Dec);
impl_param_type!(Int, Int);
impl_param_type!(ChainConfig, ChainConfig);
impl_param_type!(Vec<String>, HexHashList);
impl_param_type!(Vec<Vec<u8>>, ByteHashList);

/// Type-erased validator entry kept by the [`KeyTable`].
pub type ParamValidator = fn(&ParamValue) -> Result<()>;

/// Declares an erased [`ParamValidator`] for the parameter stored under
/// `$key`. The input is type-checked as `$ty` and the borrowed value is
/// handed to the typed validator.
macro_rules! typed_validator {
    (
        $(#[$attr:meta])*
        $vis:vis fn $name:ident: $key:expr, $ty:ty => $typed:path;
    ) => {
        $(#[$attr])*
        $vis fn $name(value: &$crate::ParamValue) -> $crate::Result<()> {
            $typed(<$ty as $crate::ParamType>::checked($key, value)?)
        }
    };
}
pub(crate) use typed_validator;

/// Mutable reference to one field of a parameter struct.
#[derive(Debug)]
pub enum ParamField<'a> {
    String(&'a mut String),
    Dec(&'a mut Dec),
    Int(&'a mut Int),
    ChainConfig(&'a mut ChainConfig),
    HexHashList(&'a mut Vec<String>),
    ByteHashList(&'a mut Vec<Vec<u8>>),
}

impl<'a> ParamField<'a> {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamField::String(_) => ParamKind::String,
            ParamField::Dec(_) => ParamKind::Dec,
            ParamField::Int(_) => ParamKind::Int,
            ParamField::ChainConfig(_) => ParamKind::ChainConfig,
            ParamField::HexHashList(_) => ParamKind::HexHashList,
            ParamField::ByteHashList(_) => ParamKind::ByteHashList,
        }
    }

    pub fn get(&self) -> ParamValue {
        match self {
            ParamField::String(v) => ParamValue::String((**v).clone()),
            ParamField::Dec(v) => ParamValue::Dec((**v).clone()),
            ParamField::Int(v) => ParamValue::Int((**v).clone()),
            ParamField::ChainConfig(v) => {
                ParamValue::ChainConfig((**v).clone())
            }
            ParamField::HexHashList(v) => {
                ParamValue::HexHashList((**v).clone())
            }
            ParamField::ByteHashList(v) => {
                ParamValue::ByteHashList((**v).clone())
            }
        }
    }

    /// Overwrites the field. When the kinds differ the field is left
    /// untouched and the rejected value is handed back.
    pub fn set(
        &mut self, value: ParamValue,
    ) -> std::result::Result<(), ParamValue> {
        match (self, value) {
            (ParamField::String(field), ParamValue::String(v)) => **field = v,
            (ParamField::Dec(field), ParamValue::Dec(v)) => **field = v,
            (ParamField::Int(field), ParamValue::Int(v)) => **field = v,
            (ParamField::ChainConfig(field), ParamValue::ChainConfig(v)) => {
                **field = v
            }
            (ParamField::HexHashList(field), ParamValue::HexHashList(v)) => {
                **field = v
            }
            (ParamField::ByteHashList(field), ParamValue::ByteHashList(v)) => {
                **field = v
            }
            (_, value) => return Err(value),
        }
        Ok(())
    }
}

pub struct ParamSetPair<'a> {
    pub key: &'static [u8],
    pub field: ParamField<'a>,
    pub validator: ParamValidator,
}

impl<'a> ParamSetPair<'a> {
    pub fn new(
        key: &'static [u8], field: ParamField<'a>, validator: ParamValidator,
    ) -> Self {
        ParamSetPair {
            key,
            field,
            validator,
        }
    }

    /// Overwrites the bound field, failing with `InvalidType` for a value
    /// of another kind.
    pub fn set(&mut self, value: ParamValue) -> Result<()> {
        let expected = self.field.kind();
        self.field.set(value).map_err(|rejected| ParamError::InvalidType {
            key: key_name(self.key),
            expected,
            actual: rejected.kind(),
        })
    }

    /// Runs the bound validator against the current field value.
    pub fn validate(&self) -> Result<()> {
        (self.validator)(&self.field.get())
    }
}

impl fmt::Debug for ParamSetPair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamSetPair")
            .field("key", &key_name(self.key))
            .field("field", &self.field)
            .finish()
    }
}

/// Ordered bindings; the order is part of the storage contract.
pub type ParamSetPairs<'a> = Vec<ParamSetPair<'a>>;

pub trait ParamSet {
    fn param_set_pairs(&mut self) -> ParamSetPairs<'_>;
}

#[derive(Clone, Copy, Debug)]
pub struct Attribute {
    pub kind: ParamKind,
    pub validator: ParamValidator,
}

/// Registry of the keys a subspace accepts, in registration order.
#[derive(Clone, Debug, Default)]
pub struct KeyTable {
    keys: Vec<&'static [u8]>,
    attributes: HashMap<&'static [u8], Attribute>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panics on an empty, non-ASCII or already registered key. Those
    /// are programming errors in the module declaring the keys.
    pub fn register_attribute(
        mut self, key: &'static [u8], kind: ParamKind,
        validator: ParamValidator,
    ) -> Self {
        if !is_valid_key(key) {
            panic!("invalid parameter key: {:?}", key_name(key));
        }
        if self.attributes.contains_key(key) {
            panic!("duplicate parameter key: {}", key_name(key));
        }
        self.keys.push(key);
        self.attributes.insert(key, Attribute { kind, validator });
        self
    }

    pub fn register_param_set<P: ParamSet>(mut self, set: &mut P) -> Self {
        for pair in set.param_set_pairs() {
            self = self.register_attribute(
                pair.key,
                pair.field.kind(),
                pair.validator,
            );
        }
        self
    }

    pub fn attribute(&self, key: &[u8]) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static [u8]> + '_ {
        self.keys.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Checks `value` against the kind and validator registered for `key`.
    pub fn validate(&self, key: &[u8], value: &ParamValue) -> Result<()> {
        let attribute = self
            .attribute(key)
            .ok_or_else(|| ParamError::UnknownKey(key_name(key)))?;
        if value.kind() != attribute.kind {
            return Err(ParamError::InvalidType {
                key: key_name(key),
                expected: attribute.kind,
                actual: value.kind(),
            });
        }
        (attribute.validator)(value)
    }
}

fn is_valid_key(key: &[u8]) -> bool {
    !key.is_empty() && key.iter().all(|b| b.is_ascii_alphanumeric())
}
