use dioxus::prelude::*;

use crate::sections::{About, DontMiss, Information, Partnership};
use crate::Home;

/// The landing page layout.
///
/// Holds no state of its own. The wallet values are handed to [Home] exactly as
/// received; the other sections take nothing.
#[component]
pub fn SpotnetApp(
    wallet_id: Option<String>,
    on_connect_wallet: Option<EventHandler>,
    on_logout: Option<EventHandler>,
) -> Element {
    rsx! {
        div { id: "spotnet-app", class: "spotnet-app",
            Home { wallet_id, on_connect_wallet, on_logout }
            About {}
            Partnership {}
            Information {}
            DontMiss {}
        }
    }
}
