use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::{
    Page, View,
    router::resolve_view,
};

use crate::{
    Route, about::About, admin::Admin, blog::Blog, contact::Contact, home::Home,
    portfolio::Portfolio, pricing::Pricing, services::Services, site::Site,
};

#[derive(Clone, PartialEq, Props)]
pub struct PageNotFoundProps {
    segments: Vec<String>,
}

// catch-all for unregistered paths; what renders depends on the configured policy
#[component]
pub fn PageNotFound(props: PageNotFoundProps) -> Element {
    let site = use_context::<Site>();
    let path = format!("/{}", props.segments.join("/"));

    match resolve_view(&path, site.config.routing.not_found) {
        View::Page(page) => page_view(page),
        View::NotFound { path } => rsx! {
            div { class: "not-found",
                h1 { "Page not found" }
                p {
                    "Nothing lives at "
                    code { "{path}" }
                }
                Link { to: Route::from(Page::Home), class: "btn btn-primary", "Back to Home" }
            }
        },
    }
}

// a path the router did not match can still resolve to a page, e.g. "/blog/" or under
// the home policy
fn page_view(page: Page) -> Element {
    match page {
        Page::Home => rsx! { Home {} },
        Page::Services => rsx! { Services {} },
        Page::Portfolio => rsx! { Portfolio {} },
        Page::Pricing => rsx! { Pricing {} },
        Page::About => rsx! { About {} },
        Page::Blog => rsx! { Blog {} },
        Page::Contact => rsx! { Contact {} },
        Page::Admin => rsx! { Admin {} },
    }
}
