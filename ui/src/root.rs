use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::{SpotnetApp, WalletSession};

const SPOTNET_CSS: Asset = asset!("/assets/spotnet.css");

/// Owns the wallet session and feeds it into [SpotnetApp].
///
/// Expects a [WalletSession] in context.
#[component]
pub fn SpotnetRoot() -> Element {
    let session = use_context::<WalletSession>();

    let mut wallet_id = use_signal({
        let session = session.clone();
        move || session.restore()
    });
    let mut error_message = use_signal(|| None::<String>);

    let on_connect_wallet = use_callback({
        let session = session.clone();
        move |_: ()| match session.connect() {
            Ok(id) => {
                error_message.set(None);
                wallet_id.set(Some(id));
            }
            Err(e) => {
                tracing::error!("Failed to connect wallet: {}", e);
                error_message.set(Some(e.to_string()));
            }
        }
    });

    let on_logout = use_callback(move |_: ()| {
        // the page shows a disconnected state even if storage could not be cleared
        wallet_id.set(None);
        match session.logout() {
            Ok(()) => error_message.set(None),
            Err(e) => {
                tracing::error!("Failed to clear wallet session: {}", e);
                error_message.set(Some(e.to_string()));
            }
        }
    });

    let error_ui = error_message().map(|message| {
        rsx! {
            div { id: "session-error", class: "session-error", role: "alert", "{message}" }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SPOTNET_CSS }

        {error_ui}

        SpotnetApp {
            wallet_id: wallet_id().map(String::from),
            on_connect_wallet,
            on_logout,
        }
    }
}


#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::test_page::TestPage;
    use crate::wallet::{WalletConnector, WalletId};
    use crate::{
        ConnectorProvider, Error, MemoryStorage, SessionStorage, StorageProvider, SESSION_KEY,
    };

    /// Answers each connect with the next scripted result.
    struct Scripted(Mutex<VecDeque<Result<&'static str, Error>>>);

    impl Scripted {
        fn new(results: impl IntoIterator<Item = Result<&'static str, Error>>) -> Self {
            Self(Mutex::new(results.into_iter().collect()))
        }
    }

    impl WalletConnector for Scripted {
        fn connect(&self) -> Result<WalletId, Error> {
            self.0
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected connect")
                .and_then(WalletId::parse)
        }
    }

    /// Memory storage whose deletes always fail.
    struct StuckStorage(MemoryStorage);

    impl SessionStorage for StuckStorage {
        fn save(&self, key: &str, value: &str) -> Result<(), Error> {
            self.0.save(key, value)
        }

        fn load(&self, key: &str) -> Result<Option<String>, Error> {
            self.0.load(key)
        }

        fn delete(&self, _key: &str) -> Result<(), Error> {
            Err(Error::Storage("read-only".to_string()))
        }

        fn exists(&self, key: &str) -> bool {
            self.0.exists(key)
        }
    }

    fn mount(storage: StorageProvider, connector: Scripted) -> TestPage {
        let session = WalletSession::new(storage, ConnectorProvider::new(connector));
        TestPage::mount(VirtualDom::new(SpotnetRoot).with_root_context(session))
    }

    fn banner_before_layout(html: &str) -> bool {
        match (html.find(r#"id="session-error""#), html.find(r#"id="spotnet-app""#)) {
            (Some(banner), Some(layout)) => banner < layout,
            _ => false,
        }
    }

    #[test]
    fn first_render_restores_stored_wallet() {
        let storage = MemoryStorage::new();
        storage.save(SESSION_KEY, "0xABCDEF0123").unwrap();

        let page = mount(StorageProvider::new(storage), Scripted::new([]));
        let html = page.html();

        assert!(html.contains(r#"data-wallet-id="0xabcdef0123""#), "{html}");
        assert!(html.contains(">0xab...0123<"));
        assert!(!html.contains("session-error"));
    }

    #[test]
    fn failed_connect_shows_banner_outside_layout() {
        let storage = MemoryStorage::new();
        let mut page = mount(
            StorageProvider::new(storage.clone()),
            Scripted::new([Err(Error::ConnectionCancelled)]),
        );

        page.click();

        let html = page.html();
        assert!(banner_before_layout(&html), "{html}");
        assert!(html.contains("Wallet connection cancelled"));
        assert!(html.contains("Connect Wallet"));
        assert!(!storage.exists(SESSION_KEY));
    }

    #[test]
    fn successful_connect_clears_banner() {
        let storage = MemoryStorage::new();
        let mut page = mount(
            StorageProvider::new(storage.clone()),
            Scripted::new([Err(Error::ConnectionCancelled), Ok("0xFEED")]),
        );

        page.click();
        assert!(banner_before_layout(&page.html()));

        page.click();
        let html = page.html();
        assert!(!html.contains("session-error"), "{html}");
        assert!(html.contains(r#"data-wallet-id="0xfeed""#));
        assert_eq!(storage.load(SESSION_KEY), Ok(Some("0xfeed".to_string())));
    }

    #[test]
    fn logout_disconnects_even_when_storage_fails() {
        let inner = MemoryStorage::new();
        inner.save(SESSION_KEY, "0xabc").unwrap();
        let mut page = mount(
            StorageProvider::new(StuckStorage(inner.clone())),
            Scripted::new([]),
        );
        assert!(page.html().contains("Log out"));

        page.click();

        let html = page.html();
        assert!(!html.contains("data-wallet-id"), "{html}");
        assert!(html.contains("Connect Wallet"));
        assert!(banner_before_layout(&html));
        assert!(html.contains("read-only"));
        assert!(inner.exists(SESSION_KEY));
    }
}
