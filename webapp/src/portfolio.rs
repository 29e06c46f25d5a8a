use dioxus::prelude::*;
use tracing::debug;

use common::{
    content::PortfolioEntry,
    pages::{ALL_FILTER, filter_chips, filter_portfolio},
};

use crate::{components::section::PageHeader, site::Site};

#[component]
pub fn Portfolio() -> Element {
    let site = use_context::<Site>();

    // the selected chip is page-local and resets whenever the page remounts
    let mut selected = use_signal(|| ALL_FILTER.to_owned());

    let chips = filter_chips(&selected());
    let shown = filter_portfolio(site.content.portfolio(), &selected());

    rsx! {
        PageHeader {
            title: "Our Work Speaks Louder".to_owned(),
            subtitle: "Explore our recent AI-generated campaigns delivering massive ROI.".to_owned(),
        }
        div { class: "container",
            div { class: "filter-bar",
                for chip in chips {
                    button {
                        key: "{chip.label}",
                        class: if chip.selected { "filter-chip selected" } else { "filter-chip" },
                        onclick: move |_| {
                            debug!(filter = chip.label, "portfolio filter selected");
                            selected.set(chip.label.to_owned());
                        },
                        "{chip.label}"
                    }
                }
            }

            if shown.is_empty() {
                div { class: "empty-state", "No campaigns in this category yet." }
            } else {
                div { class: "portfolio-grid",
                    for entry in shown {
                        PortfolioCard { key: "{entry.id}", entry: entry.clone() }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct PortfolioCardProps {
    entry: PortfolioEntry,
}

#[component]
fn PortfolioCard(props: PortfolioCardProps) -> Element {
    let entry = props.entry;

    rsx! {
        div { class: "portfolio-card",
            div { class: "portfolio-thumb",
                img { src: "{entry.image}", alt: "{entry.title}" }
            }
            div { class: "portfolio-body",
                div { class: "portfolio-meta",
                    span { class: "portfolio-category", "{entry.category}" }
                    span { class: "portfolio-result", "↗ {entry.result}" }
                }
                h3 { "{entry.title}" }
                p { "{entry.summary}" }
            }
        }
    }
}
