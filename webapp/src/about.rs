use dioxus::prelude::*;

use crate::components::section::PageHeader;

const FACTS: [(&str, &str); 4] = [
    ("2023", "Founded"),
    ("500+", "Clients"),
    ("12", "Team Members"),
    ("24/7", "AI Operation"),
];

#[component]
pub fn About() -> Element {
    rsx! {
        PageHeader {
            title: "We are Drova Labs".to_owned(),
            subtitle: "Pioneering the future of generative advertising.".to_owned(),
        }
        div { class: "container",
            div { class: "about-copy",
                p {
                    "Founded by a team of creative technologists and marketers, Drova Labs was born from a simple observation: "
                    strong {
                        "Traditional video production is too slow and expensive for the modern speed of business."
                    }
                }
                p {
                    "We leverage cutting-edge AI models to generate studio-quality content in hours, not months. Our mission is to democratize high-end advertising for businesses of all sizes."
                }
            }
            div { class: "fact-grid",
                for (value , label) in FACTS {
                    div { key: "{label}", class: "card fact-tile",
                        h3 { "{value}" }
                        p { "{label}" }
                    }
                }
            }
        }
    }
}
