use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: "about",
            class: "about",
            h2 { class: "section-title", "About Spotnet" }
            p {
                "Spotnet lets you open a leveraged position on Starknet from a single screen. Your collateral is supplied to a lending market, the borrowed amount is swapped back into your asset and supplied again until the target multiplier is reached."
            }
            p {
                "Positions are held by a contract deployed for your wallet. Only you can close them."
            }
        }
    }
}
