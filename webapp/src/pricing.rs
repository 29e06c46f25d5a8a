use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::pages::{FAQ, pricing_tiers};

use crate::{
    Route,
    components::section::{CheckList, PageHeader},
    site::Site,
};

#[component]
pub fn Pricing() -> Element {
    let site = use_context::<Site>();

    rsx! {
        PageHeader {
            title: "Invest in Growth".to_owned(),
            subtitle: "Simple pricing. No hidden fees. Just results.".to_owned(),
        }
        div { class: "container",
            div { class: "pricing-grid",
                for tier in pricing_tiers(&site.content) {
                    div {
                        key: "{tier.service.id}",
                        class: if tier.service.popular { "pricing-card popular" } else { "pricing-card" },
                        if tier.service.popular {
                            div { class: "popular-badge", "Most Popular" }
                        }
                        h3 { "{tier.service.title}" }
                        div { class: "price",
                            strong { "{tier.service.price}" }
                            span { class: "price-unit", "{tier.service.unit}" }
                        }
                        p { class: "pricing-tagline", "{tier.service.tagline}" }
                        CheckList { items: tier.service.features.clone() }
                        Link {
                            to: Route::from(tier.cta),
                            class: if tier.service.popular { "btn btn-primary btn-block" } else { "btn btn-secondary btn-block" },
                            "Get Started"
                        }
                    }
                }
            }

            div { class: "faq",
                h3 { "Frequently Asked Questions" }
                for (question , answer) in FAQ {
                    div { key: "{question}", class: "card faq-item",
                        h4 { "{question}" }
                        p { "{answer}" }
                    }
                }
            }
        }
    }
}
