#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error, info};

use common::{Navigator, Page, router::Navigation, shell::ShellState};

mod web;

mod site;
use site::Site;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod services;
use services::Services;

mod portfolio;
use portfolio::Portfolio;

mod pricing;
use pricing::Pricing;

mod about;
use about::About;

mod blog;
use blog::Blog;

mod contact;
use contact::Contact;

mod admin;
use admin::Admin;

mod not_found;
use not_found::PageNotFound;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// every registered path maps to one variant, and anything else lands on the
// catch-all, which applies the configured not-found policy
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/services")]
        Services {},
        #[route("/portfolio")]
        Portfolio {},
        #[route("/pricing")]
        Pricing {},
        #[route("/about")]
        About {},
        #[route("/blog")]
        Blog {},
        #[route("/contact")]
        Contact {},
        #[route("/admin")]
        Admin {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Services => Route::Services {},
            Page::Portfolio => Route::Portfolio {},
            Page::Pricing => Route::Pricing {},
            Page::About => Route::About {},
            Page::Blog => Route::Blog {},
            Page::Contact => Route::Contact {},
            Page::Admin => Route::Admin {},
        }
    }
}

#[component]
pub fn App() -> Element {
    // config and content are compiled in, so a failure here is a build problem; show it
    // instead of a blank page
    let site = use_hook(|| {
        Site::load().map_err(|err| {
            error!("failed to load site: {err}");
            err.to_string()
        })
    });

    rsx! {
        style { "{web::style::SITE_STYLES}" }
        style { "{web::style::HOME_STYLES}" }
        {
            match site {
                Ok(site) => rsx! {
                    SiteRoot { site }
                },
                Err(err) => rsx! {
                    div { class: "site-error",
                        h1 { "This site failed to start" }
                        pre { "{err}" }
                    }
                },
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SiteRootProps {
    site: Site,
}

#[component]
fn SiteRoot(props: SiteRootProps) -> Element {
    let site = use_context_provider(|| props.site.clone());

    // must run before the router first reads the location
    use_hook(|| {
        if let Some(path) = web::window::adopt_fragment_route() {
            info!(path = %path, "rewrote hash link to a route path");
        }
    });

    // the header state outlives any one page so that only a remount resets it
    let shell = use_context_provider(|| {
        let mut shell = ShellState::new(site.config.shell.scroll_threshold_px);
        shell.on_scroll(web::window::scroll_offset());

        Signal::new(shell)
    });

    // the navigator is the single owner of the current path; the shell reads it and
    // the router feeds it on every transition
    let navigator = use_context_provider(|| {
        let mut navigator = Navigator::new(site.config.routing.not_found);

        navigator.on_navigate(|nav: &Navigation| {
            info!(from = ?nav.from, to = %nav.to, "route changed");
            web::window::scroll_to_top();
        });

        // back/forward and in-page links close the menu too, not just menu links
        navigator.subscribe(move |_| {
            let mut shell = shell;
            if shell.peek().menu_open() {
                shell.write().on_navigate();
            }
        });

        Signal::new(navigator)
    });

    rsx! {
        Router::<Route> {
            config: move || {
                RouterConfig::<Route>::default()
                    .on_update(move |state| {
                        let path = state.current().to_string();
                        let mut navigator = navigator;

                        navigator.write().navigate(&path);
                        None
                    })
            },
        }
    }
}
