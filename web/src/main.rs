mod connector;
mod storage;

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{ConnectorProvider, SpotnetRoot, StorageProvider, WalletSession};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let storage = StorageProvider::new(storage::WebStorage::new());
    let connector = ConnectorProvider::new(connector::PromptConnector);

    // provide the wallet session in context for all child elements
    use_context_provider(|| WalletSession::new(storage, connector));

    rsx! {
        // Global app resources
        document::Title { "Spotnet" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SpotnetRoot {}
    }
}
