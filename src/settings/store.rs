//! Settings store trait definition
//!
//! The host platform's key-value option storage. Each key is read and
//! written independently (last write wins per key, no cross-key
//! transaction), so a reader may observe a partially updated configuration.

use parking_lot::RwLock;
use std::collections::HashMap;

use super::SettingKey;
use crate::error::BannerError;

/// Key-value settings repository injected into the validator and resolver
pub trait SettingsStore: Send + Sync {
    /// Get the stored value for a key, `None` if it was never written
    fn get(&self, key: SettingKey) -> Result<Option<String>, BannerError>;

    /// Store a value, replacing any previous value for the key
    fn set(&self, key: SettingKey, value: &str) -> Result<(), BannerError>;

    /// Stored value, with absent keys read as the empty string
    fn get_or_empty(&self, key: SettingKey) -> Result<String, BannerError> {
        Ok(self.get(key)?.unwrap_or_default())
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn get(&self, key: SettingKey) -> Result<Option<String>, BannerError> {
        (**self).get(key)
    }

    fn set(&self, key: SettingKey, value: &str) -> Result<(), BannerError> {
        (**self).set(key, value)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<S> {
    fn get(&self, key: SettingKey) -> Result<Option<String>, BannerError> {
        (**self).get(key)
    }

    fn set(&self, key: SettingKey, value: &str) -> Result<(), BannerError> {
        (**self).set(key, value)
    }
}

/// In-memory settings store
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<SettingKey, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given values
    pub fn with_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (SettingKey, V)>,
        V: Into<String>,
    {
        let map = values.into_iter().map(|(k, v)| (k, v.into())).collect();
        Self {
            values: RwLock::new(map),
        }
    }

    /// Number of keys that have been written
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: SettingKey) -> Result<Option<String>, BannerError> {
        Ok(self.values.read().get(&key).cloned())
    }

    fn set(&self, key: SettingKey, value: &str) -> Result<(), BannerError> {
        self.values.write().insert(key, value.to_string());
        Ok(())
    }
}
