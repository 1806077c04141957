//! This crate contains all shared UI for the workspace.

mod error;
pub use error::Error;

pub mod storage;
pub use storage::{MemoryStorage, SessionStorage, StorageProvider};

pub mod wallet;
pub use wallet::{ConnectorProvider, EnvConnector, WalletConnector, WalletId};

mod session;
pub use session::{WalletSession, SESSION_KEY};

mod home;
pub use home::Home;

pub mod sections;
pub use sections::{About, DontMiss, Information, Partnership};

mod app;
pub use app::SpotnetApp;

mod root;
pub use root::SpotnetRoot;

#[cfg(test)]
mod test_page;
