use dioxus::prelude::*;

// display order
const PARTNERS: [(&str, &str); 3] = [
    ("Starknet", "https://www.starknet.io"),
    ("zkLend", "https://zklend.com"),
    ("Ekubo", "https://ekubo.org"),
];

#[component]
pub fn Partnership() -> Element {
    rsx! {
        section {
            id: "partnership",
            class: "partnership",
            h2 { class: "section-title", "Partnership" }
            ul { class: "partner-list",
                for (name, href) in PARTNERS {
                    li { key: "{name}", class: "partner",
                        a { href, target: "_blank", rel: "noopener noreferrer", "{name}" }
                    }
                }
            }
        }
    }
}
