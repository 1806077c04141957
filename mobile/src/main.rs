//! MOBILE
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{ConnectorProvider, EnvConnector, MemoryStorage, SpotnetRoot, StorageProvider, WalletSession};

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // sessions live in memory on mobile
    use_context_provider(|| {
        WalletSession::new(
            StorageProvider::new(MemoryStorage::new()),
            ConnectorProvider::new(EnvConnector),
        )
    });

    rsx! {
        SpotnetRoot {}
    }
}
