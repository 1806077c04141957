use dioxus::prelude::*;

struct Card {
    title: &'static str,
    body: &'static str,
}

static CARDS: [Card; 4] = [
    Card {
        title: "Leverage",
        body: "Multiply exposure to your asset up to the limit set by the lending market.",
    },
    Card {
        title: "Health factor",
        body: "Track how far your position is from liquidation on the dashboard.",
    },
    Card {
        title: "One transaction",
        body: "Supply, borrow, swap and resupply are bundled so the position opens or fails as a whole.",
    },
    Card {
        title: "Close anytime",
        body: "Unwind the loop and receive your remaining collateral back in your wallet.",
    },
];

#[component]
pub fn Information() -> Element {
    rsx! {
        section {
            id: "information",
            class: "information",
            h2 { class: "section-title", "How it works" }
            div { class: "info-cards",
                for Card { title, body } in CARDS.iter() {
                    div { key: "{title}", class: "info-card",
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}
