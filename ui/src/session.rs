//! The wallet session owned above the page layout.
//!
//! Platforms build a [WalletSession] from their storage and connector and put it
//! in context. `SpotnetRoot` reads it from there.
use dioxus::logger::tracing;

use crate::wallet::{ConnectorProvider, WalletId};
use crate::{Error, StorageProvider};

/// Storage key holding the connected wallet id.
pub const SESSION_KEY: &str = "spotnet_wallet_id";

#[derive(Clone)]
pub struct WalletSession {
    storage: StorageProvider,
    connector: ConnectorProvider,
}

impl WalletSession {
    pub fn new(storage: StorageProvider, connector: ConnectorProvider) -> Self {
        Self { storage, connector }
    }

    /// Loads the wallet id persisted by a previous [connect](Self::connect).
    ///
    /// A stored value that no longer parses is discarded.
    pub fn restore(&self) -> Option<WalletId> {
        let raw = match self.storage.load(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!("Failed to load wallet session: {}", e);
                return None;
            }
        };

        match WalletId::parse(&raw) {
            Ok(id) => {
                tracing::info!("Restored wallet session for {}", id.short());
                Some(id)
            }
            Err(e) => {
                tracing::warn!("Discarding stored wallet session: {}", e);
                if let Err(e) = self.storage.delete(SESSION_KEY) {
                    tracing::error!("Failed to clear wallet session: {}", e);
                }
                None
            }
        }
    }

    pub fn connect(&self) -> Result<WalletId, Error> {
        let id = self.connector.connect()?;
        self.storage.save(SESSION_KEY, id.as_str())?;
        tracing::info!("Connected wallet {}", id.short());
        Ok(id)
    }

    pub fn logout(&self) -> Result<(), Error> {
        if self.storage.exists(SESSION_KEY) {
            self.storage.delete(SESSION_KEY)?;
        }
        tracing::info!("Wallet session closed");
        Ok(())
    }
}
