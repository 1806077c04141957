//! Browser `localStorage` backed session storage.
use dioxus::logger::tracing;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use ui::{Error, SessionStorage};

#[derive(Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }
}

/// What a `localStorage` read turned up.
#[derive(Debug, PartialEq)]
enum Stored {
    Value(String),
    Missing,
    /// Present but not the JSON string `save` writes
    Corrupt(String),
}

fn classify(read: Result<String, StorageError>) -> Result<Stored, Error> {
    match read {
        Ok(value) => Ok(Stored::Value(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(Stored::Missing),
        Err(StorageError::SerdeError(err)) => Ok(Stored::Corrupt(err.to_string())),
        Err(err) => Err(Error::Storage(format!("Failed to load data: {err}"))),
    }
}

impl SessionStorage for WebStorage {
    fn save(&self, key: &str, value: &str) -> Result<(), Error> {
        LocalStorage::set(key, value)
            .map_err(|err| Error::Storage(format!("Failed to save data: {err}")))
    }

    fn load(&self, key: &str) -> Result<Option<String>, Error> {
        match classify(LocalStorage::get::<String>(key))? {
            Stored::Value(value) => Ok(Some(value)),
            Stored::Missing => Ok(None),
            Stored::Corrupt(reason) => {
                tracing::warn!("Dropping unreadable {} entry: {}", key, reason);
                self.delete(key)?;
                Ok(None)
            }
        }
    }

    fn delete(&self, key: &str) -> Result<(), Error> {
        LocalStorage::delete(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        LocalStorage::raw().get_item(key).ok().flatten().is_some()
    }
}
