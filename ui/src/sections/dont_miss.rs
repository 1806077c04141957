use dioxus::prelude::*;

const TELEGRAM_URL: &str = "https://t.me/spotnet_dev";

#[component]
pub fn DontMiss() -> Element {
    rsx! {
        section {
            id: "dont-miss",
            class: "dont-miss",
            h2 { class: "section-title", "Don't miss out" }
            p { "Follow the launch and get notified when new markets go live." }
            a {
                class: "btn btn-primary",
                href: TELEGRAM_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                "Join the community"
            }
        }
    }
}
