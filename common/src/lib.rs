// target-independent pieces of the site
//
// nothing in here touches the dom, so the routing rules, the shell state machine and
// the page view models can be exercised with plain cargo test on the host
pub mod config;
pub mod contact;
pub mod content;
pub mod pages;
pub mod router;
pub mod shell;

pub use config::SiteConfig;
pub use content::ContentRegistry;
pub use router::{Navigator, Page, RouteError, View};
