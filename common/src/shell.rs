use tracing::debug;

use crate::router::{Page, normalize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub page: Page,
}

impl NavLink {
    pub fn path(&self) -> &'static str {
        self.page.path()
    }
}

// header links, in display order
pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { name: "Home", page: Page::Home },
    NavLink { name: "Services", page: Page::Services },
    NavLink { name: "Portfolio", page: Page::Portfolio },
    NavLink { name: "Pricing", page: Page::Pricing },
    NavLink { name: "About", page: Page::About },
    NavLink { name: "Blog", page: Page::Blog },
];

// the header button; styled as a call to action and never highlighted
pub const CALL_TO_ACTION: NavLink = NavLink {
    name: "Get Started",
    page: Page::Contact,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_GROUPS: [FooterGroup; 2] = [
    FooterGroup {
        title: "Services",
        links: &[
            NavLink { name: "UGC Ads", page: Page::Services },
            NavLink { name: "Brand Commercials", page: Page::Services },
            NavLink { name: "Personal Branding", page: Page::Services },
            NavLink { name: "Custom AI Solutions", page: Page::Services },
        ],
    },
    FooterGroup {
        title: "Company",
        links: &[
            NavLink { name: "About Us", page: Page::About },
            NavLink { name: "Portfolio", page: Page::Portfolio },
            NavLink { name: "Blog", page: Page::Blog },
            NavLink { name: "Pricing", page: Page::Pricing },
        ],
    },
];

// a link is active iff its path is the current path; /blog does not light up Home
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    normalize(link_path) == normalize(current_path)
}

pub fn is_elevated(offset_px: f64, threshold_px: f64) -> bool {
    offset_px >= threshold_px
}

// ShellState
//
// the header's two independent toggles: the mobile menu and the elevated style. both
// live as long as the shell does and only a remount resets them
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellState {
    menu_open: bool,
    elevated: bool,
    threshold_px: f64,
}

impl ShellState {
    pub fn new(threshold_px: f64) -> Self {
        ShellState {
            menu_open: false,
            elevated: false,
            threshold_px,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn elevated(&self) -> bool {
        self.elevated
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    // any link followed from inside the open menu closes it
    pub fn activate_link(&mut self, link: &NavLink) -> Page {
        if self.menu_open {
            debug!(target_page = link.path(), "closing menu on navigation");
        }
        self.menu_open = false;
        link.page
    }

    // any completed navigation closes the menu, whatever triggered it
    pub fn on_navigate(&mut self) {
        self.menu_open = false;
    }

    // recomputed on every scroll event, so this must stay cheap
    pub fn on_scroll(&mut self, offset_px: f64) -> bool {
        self.elevated = is_elevated(offset_px, self.threshold_px);
        self.elevated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_the_current_link_is_active() {
        for link in NAV_LINKS {
            let active: Vec<&str> = NAV_LINKS
                .iter()
                .filter(|l| is_active(l.path(), link.path()))
                .map(|l| l.name)
                .collect();

            assert_eq!(active, [link.name]);
        }
    }

    #[test]
    fn no_header_link_is_active_off_menu() {
        for current in ["/contact", "/admin", "/careers"] {
            assert!(NAV_LINKS.iter().all(|l| !is_active(l.path(), current)));
        }
    }

    #[test]
    fn home_is_not_a_prefix_match() {
        assert!(!is_active("/", "/blog"));
        assert!(is_active("/", "/"));
    }

    #[test]
    fn nav_links_point_at_registered_routes() {
        for link in NAV_LINKS.iter().chain([&CALL_TO_ACTION]) {
            assert_eq!(crate::router::resolve(link.path()), Ok(link.page));
        }
    }

    #[test]
    fn toggling_twice_restores_the_menu() {
        let mut shell = ShellState::new(20.0);

        assert!(shell.toggle_menu());
        assert!(!shell.toggle_menu());
        assert!(!shell.menu_open());

        shell.toggle_menu();
        let before = shell.menu_open();
        shell.toggle_menu();
        shell.toggle_menu();
        assert_eq!(shell.menu_open(), before);
    }

    #[test]
    fn following_a_link_closes_the_menu() {
        let mut shell = ShellState::new(20.0);
        shell.toggle_menu();

        let page = shell.activate_link(&NAV_LINKS[3]);

        assert_eq!(page, Page::Pricing);
        assert!(!shell.menu_open());
    }

    #[test]
    fn navigation_from_outside_the_menu_closes_it() {
        let mut shell = ShellState::new(20.0);
        shell.toggle_menu();
        shell.on_scroll(50.0);

        shell.on_navigate();

        assert!(!shell.menu_open());
        assert!(shell.elevated());

        shell.on_navigate();
        assert!(!shell.menu_open());
    }

    #[test]
    fn scroll_threshold_is_inclusive() {
        let mut shell = ShellState::new(20.0);

        assert!(!shell.on_scroll(0.0));
        assert!(!shell.on_scroll(19.9));
        assert!(shell.on_scroll(20.0));
        assert!(shell.on_scroll(640.0));
        assert!(!shell.on_scroll(3.0));
        assert!(!shell.elevated());
    }

    #[test]
    fn menu_and_elevation_are_independent() {
        let mut shell = ShellState::new(20.0);

        shell.toggle_menu();
        shell.on_scroll(100.0);
        shell.toggle_menu();

        assert!(shell.elevated());
        assert!(!shell.menu_open());
    }
}
