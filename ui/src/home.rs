//! Hero section with the wallet controls.
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::wallet::shorten;

#[component]
pub fn Home(
    wallet_id: Option<String>,
    on_connect_wallet: Option<EventHandler>,
    on_logout: Option<EventHandler>,
) -> Element {
    let connect = move |_| match on_connect_wallet {
        Some(handler) => handler.call(()),
        None => tracing::debug!("Connect wallet clicked without a handler"),
    };

    let logout = move |_| match on_logout {
        Some(handler) => handler.call(()),
        None => tracing::debug!("Log out clicked without a handler"),
    };

    let wallet_ui = match wallet_id {
        Some(id) => {
            let short = shorten(&id);
            rsx! {
                div {
                    class: "wallet-connected",
                    "data-wallet-id": "{id}",
                    title: "{id}",
                    span { class: "wallet-address", "{short}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: logout,
                        "Log out"
                    }
                }
            }
        }
        None => rsx! {
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: connect,
                "Connect Wallet"
            }
        },
    };

    rsx! {
        section {
            id: "home",
            class: "home",
            div { class: "home-content",
                h1 { class: "home-title",
                    "Earn by leveraging your assets with "
                    span { class: "gradient", "Spotnet" }
                }
                p { class: "home-description",
                    "Spotnet is a DeFi leverage protocol on Starknet. Supply collateral, borrow against it and loop into a larger position in a single transaction."
                }
                div { id: "wallet", class: "home-wallet", {wallet_ui} }
            }
        }
    }
}
