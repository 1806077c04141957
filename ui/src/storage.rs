//! This module defines the `SessionStorage` trait for persisting the wallet session.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::Error;

pub trait SessionStorage: Send + Sync {
    fn save(&self, key: &str, value: &str) -> Result<(), Error>;
    fn load(&self, key: &str) -> Result<Option<String>, Error>;
    fn delete(&self, key: &str) -> Result<(), Error>;
    fn exists(&self, key: &str) -> bool;
}

// A storage provider context that wraps any storage implementation
#[derive(Clone)]
pub struct StorageProvider {
    inner: Arc<dyn SessionStorage>,
}

impl StorageProvider {
    pub fn new<S: SessionStorage + 'static>(storage: S) -> Self {
        Self {
            inner: Arc::new(storage),
        }
    }

    pub fn save(&self, key: &str, value: &str) -> Result<(), Error> {
        self.inner.save(key, value)
    }

    pub fn load(&self, key: &str) -> Result<Option<String>, Error> {
        self.inner.load(key)
    }

    pub fn delete(&self, key: &str) -> Result<(), Error> {
        self.inner.delete(key)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.inner.exists(key)
    }
}

/// Process local storage. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, Error> {
        self.entries
            .lock()
            .map_err(|_| Error::Storage("memory storage lock poisoned".to_string()))
    }
}

impl SessionStorage for MemoryStorage {
    fn save(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<(), Error> {
        self.entries()?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.entries()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }
}
