use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

// Page
//
// one variant per registered route; the set is fixed at build time and every
// other path is handled by the NotFoundPolicy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Services,
    Portfolio,
    Pricing,
    About,
    Blog,
    Contact,
    Admin,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Services,
        Page::Portfolio,
        Page::Pricing,
        Page::About,
        Page::Blog,
        Page::Contact,
        Page::Admin,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Services => "/services",
            Page::Portfolio => "/portfolio",
            Page::Pricing => "/pricing",
            Page::About => "/about",
            Page::Blog => "/blog",
            Page::Contact => "/contact",
            Page::Admin => "/admin",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Services => "Services",
            Page::Portfolio => "Portfolio",
            Page::Pricing => "Pricing",
            Page::About => "About",
            Page::Blog => "Blog",
            Page::Contact => "Contact",
            Page::Admin => "Admin",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page is registered at {path}")]
    NotFound { path: String },
}

// reduce a location to the part that is matched against the route table
//
// the query string and fragment never select a page, an empty path is the root, and a
// trailing slash is dropped so that /pricing/ and /pricing are the same route
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_end_matches('/');

    if path.is_empty() { "/" } else { path }
}

// links shared from the old hash-routed site look like /#/pricing
//
// returns the route path a location fragment carries; plain in-page anchors such as
// #services carry none
pub fn fragment_path(fragment: &str) -> Option<&str> {
    let path = fragment.strip_prefix('#')?;

    path.starts_with('/').then(|| normalize(path))
}

pub fn resolve(path: &str) -> Result<Page, RouteError> {
    let key = normalize(path);

    Page::ALL
        .into_iter()
        .find(|page| page.path() == key)
        .ok_or_else(|| RouteError::NotFound {
            path: key.to_owned(),
        })
}

// what to show for a path that is not in the route table
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub enum NotFoundPolicy {
    // render the dedicated not-found view
    #[default]
    FallbackView,
    // render the home page in place, without rewriting the location
    Home,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Page(Page),
    NotFound { path: String },
}

impl View {
    pub fn page(&self) -> Option<Page> {
        match self {
            View::Page(page) => Some(*page),
            View::NotFound { .. } => None,
        }
    }
}

pub fn resolve_view(path: &str, policy: NotFoundPolicy) -> View {
    match resolve(path) {
        Ok(page) => View::Page(page),
        Err(RouteError::NotFound { path }) => {
            warn!(path = %path, "unregistered route");
            match policy {
                NotFoundPolicy::FallbackView => View::NotFound { path },
                NotFoundPolicy::Home => View::Page(Page::Home),
            }
        }
    }
}

// a completed route transition, as seen by post-navigation hooks
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub from: Option<String>,
    pub to: String,
    pub view: View,
}

type Hook = Box<dyn Fn(&Navigation)>;
type Subscriber = Box<dyn Fn(&str)>;

// Navigator
//
// owns the current path and is the only thing that changes it; subscribers are told
// about every change, and post-navigation hooks (scroll reset, logging) run once per
// transition after the new view has been resolved
pub struct Navigator {
    current: Option<String>,
    view: Option<View>,
    policy: NotFoundPolicy,
    hooks: Vec<Hook>,
    subscribers: Vec<Subscriber>,
}

impl Navigator {
    pub fn new(policy: NotFoundPolicy) -> Self {
        Navigator {
            current: None,
            view: None,
            policy,
            hooks: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn on_navigate(&mut self, hook: impl Fn(&Navigation) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&str) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    // move to a new location
    //
    // navigating to the current path again resolves the same view and fires nothing
    pub fn navigate(&mut self, path: &str) -> View {
        let to = normalize(path).to_owned();

        if self.current.as_deref() == Some(to.as_str()) {
            if let Some(view) = &self.view {
                return view.clone();
            }
        }

        let view = resolve_view(&to, self.policy);
        let from = self.current.replace(to.clone());
        self.view = Some(view.clone());

        debug!(from = ?from, to = %to, "navigated");

        for subscriber in &self.subscribers {
            subscriber(&to);
        }

        let navigation = Navigation {
            from,
            to,
            view: view.clone(),
        };
        for hook in &self.hooks {
            hook(&navigation);
        }

        view
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new(NotFoundPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn every_registered_route_resolves_to_its_page() {
        for page in Page::ALL {
            assert_eq!(resolve(page.path()), Ok(page));
        }
    }

    #[test]
    fn route_paths_are_unique() {
        for a in Page::ALL {
            for b in Page::ALL {
                if a != b {
                    assert_ne!(a.path(), b.path());
                }
            }
        }
    }

    #[test]
    fn matching_is_exact_not_prefix() {
        assert_eq!(
            resolve("/pricing/enterprise"),
            Err(RouteError::NotFound {
                path: "/pricing/enterprise".to_owned()
            })
        );
        assert!(resolve("/pric").is_err());
        assert!(resolve("/Pricing").is_err());
    }

    #[test]
    fn query_fragment_and_trailing_slash_are_ignored() {
        assert_eq!(resolve("/pricing/"), Ok(Page::Pricing));
        assert_eq!(resolve("/blog?page=2"), Ok(Page::Blog));
        assert_eq!(resolve("/services#ugc"), Ok(Page::Services));
        assert_eq!(resolve(""), Ok(Page::Home));
        assert_eq!(resolve("/?ref=ad"), Ok(Page::Home));
    }

    #[test]
    fn hash_links_carry_their_route() {
        assert_eq!(fragment_path("#/pricing"), Some("/pricing"));
        assert_eq!(fragment_path("#/contact/?ref=ad"), Some("/contact"));
        assert_eq!(fragment_path("#/"), Some("/"));
        assert_eq!(fragment_path("#services"), None);
        assert_eq!(fragment_path(""), None);

        for page in Page::ALL {
            let fragment = format!("#{}", page.path());
            assert_eq!(fragment_path(&fragment).map(resolve), Some(Ok(page)));
        }
    }

    #[test]
    fn unregistered_route_follows_policy() {
        assert_eq!(
            resolve_view("/careers", NotFoundPolicy::FallbackView),
            View::NotFound {
                path: "/careers".to_owned()
            }
        );
        assert_eq!(
            resolve_view("/careers", NotFoundPolicy::Home),
            View::Page(Page::Home)
        );
    }

    #[test]
    fn admin_route_resolves_without_any_access_check() {
        assert_eq!(resolve_view("/admin", NotFoundPolicy::default()), View::Page(Page::Admin));
    }

    #[test]
    fn navigating_between_routes_resets_scroll() {
        let scroll = Rc::new(Cell::new(0.0_f64));

        let mut navigator = Navigator::default();
        let hook_scroll = scroll.clone();
        navigator.on_navigate(move |_| hook_scroll.set(0.0));

        for from in Page::ALL {
            for to in Page::ALL {
                if from == to {
                    continue;
                }
                navigator.navigate(from.path());
                scroll.set(480.0);

                navigator.navigate(to.path());
                assert_eq!(scroll.get(), 0.0, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn hooks_see_the_transition() {
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut navigator = Navigator::default();
        let hook_seen = seen.clone();
        navigator.on_navigate(move |nav| hook_seen.borrow_mut().push(nav.clone()));

        navigator.navigate("/");
        navigator.navigate("/pricing");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].from, None);
        assert_eq!(seen[1].from.as_deref(), Some("/"));
        assert_eq!(seen[1].to, "/pricing");
        assert_eq!(seen[1].view, View::Page(Page::Pricing));
    }

    #[test]
    fn same_path_does_not_fire_again() {
        let count = Rc::new(Cell::new(0));

        let mut navigator = Navigator::default();
        let hook_count = count.clone();
        navigator.on_navigate(move |_| hook_count.set(hook_count.get() + 1));

        navigator.navigate("/blog");
        navigator.navigate("/blog");
        navigator.navigate("/blog/");

        assert_eq!(count.get(), 1);
        assert_eq!(navigator.current_view(), Some(&View::Page(Page::Blog)));
    }

    #[test]
    fn subscribers_observe_current_path() {
        let latest = Rc::new(RefCell::new(String::new()));

        let mut navigator = Navigator::default();
        let sub_latest = latest.clone();
        navigator.subscribe(move |path| *sub_latest.borrow_mut() = path.to_owned());

        navigator.navigate("/about");
        assert_eq!(*latest.borrow(), "/about");
        assert_eq!(navigator.current_path(), Some("/about"));

        navigator.navigate("/nope");
        assert_eq!(*latest.borrow(), "/nope");
        assert_eq!(navigator.current_view().and_then(View::page), None);
    }
}
