//! DESKTOP
mod error;
mod storage;

use error::Error;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::{ConnectorProvider, EnvConnector, MemoryStorage, SpotnetRoot, StorageProvider, WalletSession};

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");

    dioxus::LaunchBuilder::new()
        .with_cfg(desktop! {
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title("Spotnet")
                    .with_inner_size(LogicalSize::new(1200.0, 900.0)),
            )
        })
        .launch(App)
}

fn session_storage() -> StorageProvider {
    match storage::DesktopStorage::new() {
        Ok(storage) => {
            tracing::info!("Storing wallet session in {}", storage.dir().display());
            StorageProvider::new(storage)
        }
        Err(e) => {
            tracing::error!("{}; the wallet session will not survive a restart", e);
            StorageProvider::new(MemoryStorage::new())
        }
    }
}

#[component]
fn App() -> Element {
    // provide the wallet session in context for all child elements
    use_context_provider(|| {
        WalletSession::new(session_storage(), ConnectorProvider::new(EnvConnector))
    });

    rsx! {
        SpotnetRoot {}
    }
}
