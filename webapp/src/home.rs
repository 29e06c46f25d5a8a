use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::{
    Page,
    pages::{HOME_SECTIONS, HomeSection, showcase},
};

use crate::{
    Route,
    components::section::{CheckList, SectionHeading},
    site::Site,
};

const STATS: [(&str, &str); 4] = [
    ("10X", "Average ROI"),
    ("500+", "Campaigns Delivered"),
    ("2M+", "Views Generated"),
    ("98%", "Client Satisfaction"),
];

// (label, in-page anchor); Pricing has its own page
const QUICK_NAV: [(&str, Option<&str>); 5] = [
    ("Services", Some("#services")),
    ("Showcase", Some("#showcase")),
    ("Process", Some("#process")),
    ("Pricing", None),
    ("Testimonials", Some("#testimonials")),
];

const PROBLEMS: [(&str, &str); 6] = [
    ("High Production Costs", "AI-Powered Efficiency"),
    ("Slow Turnaround Times", "24-48 Hour Delivery"),
    ("Low Ad Performance", "Data-Driven Creative"),
    ("Generic Content", "Hyper-Personalized"),
    ("Limited Scalability", "Unlimited Variations"),
    ("Poor ROI", "Proven 10X Framework"),
];

const PROCESS: [(&str, &str, &str); 3] = [
    ("01", "Brief & Strategy", "Share your goals and target audience."),
    ("02", "AI Creation", "Our AI generates multiple variations."),
    ("03", "Optimize & Launch", "Refine, test, and scale winning ads."),
];

const METRICS: [(&str, &str); 2] = [("200%", "Engagement Increase"), ("3x", "Faster Delivery")];

const PERKS: [&str; 3] = ["No contracts", "Money-back guarantee", "Fast delivery"];

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-container",
            for section in HOME_SECTIONS {
                HomeBlock { key: "{section:?}", section }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct HomeBlockProps {
    section: HomeSection,
}

#[component]
fn HomeBlock(props: HomeBlockProps) -> Element {
    match props.section {
        HomeSection::Hero => rsx! { Hero {} },
        HomeSection::QuickNav => rsx! { QuickNav {} },
        HomeSection::Showcase => rsx! { Showcase {} },
        HomeSection::Problems => rsx! { Problems {} },
        HomeSection::Services => rsx! { HomeServices {} },
        HomeSection::Process => rsx! { Process {} },
        HomeSection::Testimonials => rsx! { Testimonials {} },
        HomeSection::CallToAction => rsx! { FinalCallToAction {} },
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "container",
                div { class: "hero-badge", "⚡ AI-Powered Advertising Revolution" }
                h1 { class: "hero-title",
                    "Transform Your Business"
                    br {}
                    "with "
                    span { class: "gradient-text", "AI-Powered Ads" }
                }
                p { class: "hero-subtitle",
                    "Get 10x Sales & ROI with next-gen video content. We build high-converting UGC, Cinematic Commercials, and AI Avatars tailored to scale your brand."
                }
                div { class: "hero-actions",
                    Link {
                        to: Route::from(Page::Contact),
                        class: "btn btn-primary btn-lg",
                        "Start Your Campaign →"
                    }
                    Link {
                        to: Route::from(Page::Portfolio),
                        class: "btn btn-secondary btn-lg",
                        "View Portfolio"
                    }
                }
                div { class: "stats-grid",
                    for (value , label) in STATS {
                        div { key: "{label}", class: "stat-card",
                            div { class: "stat-value", "{value}" }
                            div { class: "stat-label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuickNav() -> Element {
    rsx! {
        div { class: "quick-nav",
            div { class: "quick-nav-inner",
                for (label , anchor) in QUICK_NAV {
                    {
                        match anchor {
                            Some(anchor) => rsx! {
                                a { key: "{label}", href: anchor, "{label}" }
                            },
                            None => rsx! {
                                Link { key: "{label}", to: Route::from(Page::Pricing), "{label}" }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Showcase() -> Element {
    let site = use_context::<Site>();

    rsx! {
        section { id: "showcase",
            div { class: "container",
                SectionHeading { subtitle: "Portfolio Preview".to_owned(), "See the Magic in Action" }
                div { class: "showcase-grid",
                    for entry in showcase(&site.content) {
                        div { key: "{entry.id}", class: "showcase-card",
                            img { src: "{entry.image}", alt: "{entry.title}" }
                            span { class: "showcase-tag", "{entry.category}" }
                            div { class: "showcase-meta",
                                div {
                                    h3 { "{entry.title}" }
                                    p { "{entry.summary}" }
                                }
                                div { class: "showcase-result", "{entry.result}" }
                            }
                        }
                    }
                }
                div { class: "more-link",
                    Link { to: Route::from(Page::Portfolio), "View Full Portfolio →" }
                }
            }
        }
    }
}

#[component]
fn Problems() -> Element {
    rsx! {
        section { class: "problems",
            div { class: "container",
                SectionHeading { subtitle: "The Problem".to_owned(), "Your Challenges, Solved" }
                div { class: "problems-grid",
                    for (problem , solution) in PROBLEMS {
                        div { key: "{problem}", class: "card problem-card",
                            p { class: "problem-old", "{problem}" }
                            h4 { class: "problem-new", "{solution}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HomeServices() -> Element {
    let site = use_context::<Site>();

    rsx! {
        section { id: "services",
            div { class: "container",
                SectionHeading { subtitle: "What We Do".to_owned(), "Our AI-Powered Arsenal" }
                div { class: "service-cards",
                    for service in site.content.services() {
                        div { key: "{service.id}", class: "card service-card",
                            h3 { "{service.title}" }
                            div { class: "service-price",
                                "Starting at"
                                strong { "{service.price}" }
                            }
                            CheckList { items: service.features.clone() }
                            Link {
                                to: Route::from(Page::Contact),
                                class: "btn btn-secondary btn-block",
                                "Learn More"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Process() -> Element {
    rsx! {
        section { id: "process", class: "process",
            div { class: "container",
                SectionHeading { subtitle: "How It Works".to_owned(), "From Concept to Conversion" }
                div { class: "process-grid",
                    for (step , title , desc) in PROCESS {
                        div { key: "{step}", class: "process-step",
                            div { class: "step-number", "{step}" }
                            h3 { "{title}" }
                            p { "{desc}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Testimonials() -> Element {
    rsx! {
        section { id: "testimonials",
            div { class: "container testimonials-layout",
                div {
                    SectionHeading {
                        subtitle: "Success Stories".to_owned(),
                        centered: false,
                        "Trusted by Growing Brands"
                    }
                    p { class: "testimonials-intro",
                        "Don't just take our word for it. See what founders and marketing directors have to say about our AI-driven approach."
                    }
                    div { class: "card",
                        div { class: "stars", "★★★★★" }
                        p { class: "quote",
                            "\"Drova Labs cut our ad production costs by 70% while doubling our CTR. The AI avatars are indistinguishable from real actors.\""
                        }
                        div { class: "author",
                            h4 { "Sarah Jenkins" }
                            p { "CMO, TechFlow" }
                        }
                    }
                }
                div { class: "metric-grid",
                    for (value , label) in METRICS {
                        div { key: "{label}", class: "metric-card",
                            h4 { "{value}" }
                            p { "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FinalCallToAction() -> Element {
    rsx! {
        section {
            div { class: "container",
                div { class: "cta-box",
                    h2 { "Ready to 10X Your Sales?" }
                    p {
                        "Join 500+ businesses scaling with AI-powered ads. No contracts, fast delivery."
                    }
                    Link {
                        to: Route::from(Page::Contact),
                        class: "btn btn-light btn-lg",
                        "Get Your First Ad →"
                    }
                    div { class: "cta-perks",
                        for perk in PERKS {
                            span { key: "{perk}", "{perk}" }
                        }
                    }
                }
            }
        }
    }
}
