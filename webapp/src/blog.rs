use dioxus::prelude::*;

use crate::{components::section::PageHeader, site::Site};

#[component]
pub fn Blog() -> Element {
    let site = use_context::<Site>();

    rsx! {
        PageHeader {
            title: "Insights".to_owned(),
            subtitle: "Trends in AI, Marketing, and Growth.".to_owned(),
        }
        div { class: "container",
            div { class: "blog-grid",
                for post in site.content.blog() {
                    article { key: "{post.id}", class: "blog-card",
                        div { class: "blog-thumb",
                            img { src: "{post.image}", alt: "{post.title}" }
                        }
                        div { class: "blog-body",
                            div { class: "blog-meta", "{post.category} · {post.display_date()}" }
                            h3 { "{post.title}" }
                            p { "{post.excerpt}" }
                            a { class: "read-more", href: "#", "Read Article" }
                        }
                    }
                }
            }
        }
    }
}
