use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::{Page, content::ServiceOffering};

use crate::{
    Route,
    components::section::{CheckList, PageHeader},
    site::Site,
};

#[component]
pub fn Services() -> Element {
    let site = use_context::<Site>();

    rsx! {
        PageHeader {
            title: "Services Designed to Scale".to_owned(),
            subtitle: "Comprehensive AI marketing solutions.".to_owned(),
        }
        div { class: "container",
            for (i , service) in site.content.services().iter().enumerate() {
                ServiceBlock {
                    key: "{service.id}",
                    service: service.clone(),
                    reverse: i % 2 == 1,
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ServiceBlockProps {
    service: ServiceOffering,
    reverse: bool,
}

#[component]
fn ServiceBlock(props: ServiceBlockProps) -> Element {
    let service = props.service;

    rsx! {
        div { class: if props.reverse { "service-block reverse" } else { "service-block" },
            div { class: "service-copy",
                h2 { "{service.title}" }
                p { "{service.description}" }
                CheckList { items: service.features.clone() }
                div { class: "service-starts", "Starts at {service.price}" }
                Link { to: Route::from(Page::Contact), class: "btn btn-light", "Order Now" }
            }
            div { class: "service-media",
                img { src: "{service.image}", alt: "{service.title}" }
            }
        }
    }
}
