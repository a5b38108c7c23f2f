// Copyright 2024 Sei Labs. All rights reserved.
// Sei is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! A module's namespaced view over the host parameter store.

use std::collections::BTreeMap;

use crate::{
    error::key_name, KeyTable, ParamError, ParamSet, ParamValue, Result,
};

/// Minimal key/value backend the parameter subspace is written against.
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn set(&mut self, key: &[u8], value: Vec<u8>);

    /// All keys currently stored, in ascending byte order.
    fn keys(&self) -> Vec<Vec<u8>>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryKvStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) {
        self.entries.insert(key.to_vec(), value);
    }

    fn keys(&self) -> Vec<Vec<u8>> {
        self.entries.keys().cloned().collect()
    }
}

pub struct Subspace<S> {
    name: String,
    store: S,
    table: Option<KeyTable>,
}

impl<S: KvStore> Subspace<S> {
    pub fn new(name: impl Into<String>, store: S) -> Self {
        Subspace {
            name: name.into(),
            store,
            table: None,
        }
    }

    /// Panics if a key table was already attached.
    pub fn with_key_table(mut self, table: KeyTable) -> Self {
        if self.table.is_some() {
            panic!("key table already set for subspace {}", self.name);
        }
        self.table = Some(table);
        self
    }

    pub fn has_key_table(&self) -> bool {
        self.table.is_some()
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn prefixed(&self, key: &[u8]) -> Vec<u8> {
        let mut prefixed = Vec::with_capacity(self.name.len() + 1 + key.len());
        prefixed.extend_from_slice(self.name.as_bytes());
        prefixed.push(b'/');
        prefixed.extend_from_slice(key);
        prefixed
    }

    fn key_table(&self, key: &[u8]) -> Result<&KeyTable> {
        self.table
            .as_ref()
            .ok_or_else(|| ParamError::UnknownKey(key_name(key)))
    }

    pub fn get_raw(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.store.get(&self.prefixed(key))
    }

    pub fn get(&self, key: &[u8]) -> Result<ParamValue> {
        let attribute = self
            .key_table(key)?
            .attribute(key)
            .ok_or_else(|| ParamError::UnknownKey(key_name(key)))?;
        let raw = self
            .get_raw(key)
            .ok_or_else(|| ParamError::NotFound(key_name(key)))?;
        ParamValue::decode(attribute.kind, &raw).map_err(|e| {
            ParamError::Decode {
                key: key_name(key),
                reason: e.to_string(),
            }
        })
    }

    /// Type-checks and validates `value` before writing it.
    pub fn set(&mut self, key: &[u8], value: &ParamValue) -> Result<()> {
        if let Err(e) = self.key_table(key)?.validate(key, value) {
            debug!("rejected parameter {}/{}: {}", self.name, key_name(key), e);
            return Err(e);
        }
        let raw = encode(key, value)?;
        let store_key = self.prefixed(key);
        self.store.set(&store_key, raw);
        debug!("set parameter {}/{}", self.name, key_name(key));
        Ok(())
    }

    /// Populates every field of `set` from the store.
    pub fn get_param_set<P: ParamSet>(&self, set: &mut P) -> Result<()> {
        for mut pair in set.param_set_pairs() {
            let value = self.get(pair.key)?;
            pair.set(value)?;
        }
        Ok(())
    }

    /// Writes every field of `set`. All fields are checked first, so a
    /// failure leaves the store untouched.
    pub fn set_param_set<P: ParamSet>(&mut self, set: &mut P) -> Result<()> {
        let mut staged = Vec::new();
        for pair in set.param_set_pairs() {
            let value = pair.field.get();
            (pair.validator)(&value)?;
            self.key_table(pair.key)?.validate(pair.key, &value)?;
            staged.push((pair.key, encode(pair.key, &value)?));
        }
        for (key, raw) in staged {
            let store_key = self.prefixed(key);
            self.store.set(&store_key, raw);
        }
        debug!("committed parameter set for subspace {}", self.name);
        Ok(())
    }

    /// Keys with a stored value in this subspace.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        let prefix = self.prefixed(b"");
        self.store
            .keys()
            .into_iter()
            .filter_map(|key| {
                key.strip_prefix(prefix.as_slice()).map(<[u8]>::to_vec)
            })
            .collect()
    }
}

fn encode(key: &[u8], value: &ParamValue) -> Result<Vec<u8>> {
    value.encode().map_err(|e| ParamError::Encode {
        key: key_name(key),
        reason: e.to_string(),
    })
}
