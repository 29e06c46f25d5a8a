use std::rc::Rc;

use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use common::{
    Navigator,
    shell::{CALL_TO_ACTION, FOOTER_GROUPS, NAV_LINKS, NavLink, ShellState, is_active},
};

use crate::{
    Route,
    site::Site,
    web::window::ScrollListener,
};

const SOCIALS: [(&str, &str); 3] = [("Twitter", "X"), ("Instagram", "IG"), ("LinkedIn", "in")];

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    link: NavLink,
    current_path: String,
    class: String,
    shell: Signal<ShellState>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let link = props.link;
    let mut shell = props.shell;

    let class = if is_active(link.path(), &props.current_path) {
        format!("{} active", props.class)
    } else {
        props.class
    };

    rsx! {
        Link {
            class,
            to: Route::from(link.page),
            onclick: move |_| {
                shell.write().activate_link(&link);
            },
            "{link.name}"
        }
    }
}

#[component]
fn BrandMark() -> Element {
    let site = use_context::<Site>();

    // the last word of the brand gets the accent treatment
    let (head, tail) = match site.config.brand.rsplit_once(' ') {
        Some((head, tail)) => (head.to_owned(), tail.to_owned()),
        None => (site.config.brand.clone(), String::new()),
    };

    rsx! {
        span { class: "logo-mark", "✦" }
        span {
            "{head}"
            span { class: "gradient-text", "{tail}" }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let navigator = use_context::<Signal<Navigator>>();
    let route = use_route::<Route>();

    // the navigator only learns the path on the first transition
    let current_path = navigator
        .read()
        .current_path()
        .map(str::to_owned)
        .unwrap_or_else(|| route.to_string());

    let mut shell = use_context::<Signal<ShellState>>();

    // held for the lifetime of the header; only writes the signal when the style flips
    use_hook(move || {
        Rc::new(ScrollListener::register(move |offset| {
            let mut next = *shell.peek();
            next.on_scroll(offset);

            if next != *shell.peek() {
                debug!(offset, elevated = next.elevated(), "header style changed");
                shell.set(next);
            }
        }))
    });

    let state = shell();

    rsx! {
        header { class: if state.elevated() { "site-header elevated" } else { "site-header" },
            div { class: "nav-container",
                div { class: "logo",
                    Link {
                        to: Route::Home {},
                        onclick: move |_| {
                            shell.write().activate_link(&NAV_LINKS[0]);
                        },
                        BrandMark {}
                    }
                }

                nav { class: "nav-links",
                    for link in NAV_LINKS {
                        NavBarButton {
                            key: "{link.name}",
                            link,
                            current_path: current_path.clone(),
                            class: "nav-link".to_owned(),
                            shell,
                        }
                    }
                    Link {
                        class: "btn btn-primary nav-cta",
                        to: Route::from(CALL_TO_ACTION.page),
                        "{CALL_TO_ACTION.name}"
                    }
                }

                button {
                    class: "menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| {
                        let open = shell.write().toggle_menu();
                        debug!(open, "toggled mobile menu");
                    },
                    if state.menu_open() {
                        "✕"
                    } else {
                        "☰"
                    }
                }
            }

            if state.menu_open() {
                div { class: "mobile-menu",
                    for link in NAV_LINKS {
                        NavBarButton {
                            key: "{link.name}",
                            link,
                            current_path: current_path.clone(),
                            class: "mobile-link".to_owned(),
                            shell,
                        }
                    }
                    Link {
                        class: "mobile-link mobile-cta",
                        to: Route::from(CALL_TO_ACTION.page),
                        onclick: move |_| {
                            shell.write().activate_link(&CALL_TO_ACTION);
                        },
                        "{CALL_TO_ACTION.name}"
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let site = use_context::<Site>();
    let contact = &site.config.contact;
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        div { class: "logo", BrandMark {} }
                        p { class: "footer-tagline", "{site.config.tagline}" }
                        div { class: "socials",
                            for (name , short) in SOCIALS {
                                a {
                                    key: "{name}",
                                    class: "social-link",
                                    href: "#",
                                    title: name,
                                    "{short}"
                                }
                            }
                        }
                    }

                    for group in FOOTER_GROUPS {
                        div { key: "{group.title}", class: "footer-group",
                            h4 { "{group.title}" }
                            ul { class: "footer-links",
                                for link in group.links {
                                    li { key: "{link.name}",
                                        Link { to: Route::from(link.page), "{link.name}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "footer-group",
                        h4 { "Contact" }
                        ul { class: "footer-links",
                            li { "✉ {contact.email}" }
                            li { "☏ {contact.phone}" }
                            li { "⌖ {contact.location}" }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { "© {year} {site.config.brand}. All rights reserved." }
                    div { class: "footer-legal",
                        a { href: "#", "Privacy Policy" }
                        a { href: "#", "Terms of Service" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        main { class: "page-body", Outlet::<Route> {} }
        Footer {}
    }
}
