use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use common::{
    ContentRegistry, Navigator, Page, View,
    contact::ContactForm,
    pages::{filter_portfolio, pricing_tiers, service_options},
    router::NotFoundPolicy,
    shell::{NAV_LINKS, ShellState, is_active},
};

fn site() -> (ContentRegistry, Navigator, Rc<Cell<f64>>) {
    let registry = ContentRegistry::builtin().unwrap();
    let scroll = Rc::new(Cell::new(0.0));

    let mut navigator = Navigator::new(NotFoundPolicy::FallbackView);
    let hook_scroll = scroll.clone();
    navigator.on_navigate(move |_| hook_scroll.set(0.0));

    (registry, navigator, scroll)
}

#[test]
fn pricing_get_started_leads_to_contact() {
    let (registry, mut navigator, scroll) = site();

    assert_eq!(navigator.navigate("/pricing"), View::Page(Page::Pricing));

    let tiers = pricing_tiers(&registry);
    let prices: Vec<&str> = tiers.iter().map(|t| t.service.price.as_str()).collect();
    assert_eq!(prices, ["₹1,999", "₹4,599", "₹30,000"]);

    scroll.set(900.0);
    let target = tiers[1].cta.path();
    assert_eq!(navigator.navigate(target), View::Page(Page::Contact));
    assert_eq!(scroll.get(), 0.0);
    assert_eq!(navigator.current_path(), Some("/contact"));
}

#[test]
fn shell_tracks_the_navigator() {
    let (_, mut navigator, _) = site();
    let mut shell = ShellState::new(20.0);

    shell.toggle_menu();
    let page = shell.activate_link(&NAV_LINKS[2]);
    navigator.navigate(page.path());

    let current = navigator.current_path().unwrap();
    let active: Vec<&str> = NAV_LINKS
        .iter()
        .filter(|l| is_active(l.path(), current))
        .map(|l| l.name)
        .collect();

    assert_eq!(active, ["Portfolio"]);
    assert!(!shell.menu_open());
}

#[test]
fn unknown_route_renders_the_fallback_view() {
    let (_, mut navigator, _) = site();

    assert_eq!(
        navigator.navigate("/case-studies/alpha"),
        View::NotFound {
            path: "/case-studies/alpha".to_owned()
        }
    );
    assert!(NAV_LINKS.iter().all(|l| !is_active(l.path(), "/case-studies/alpha")));
}

#[test]
fn portfolio_then_contact_round_trip() {
    let (registry, mut navigator, _) = site();

    navigator.navigate("/portfolio");
    assert_eq!(filter_portfolio(registry.portfolio(), "All").len(), 6);

    navigator.navigate("/contact");
    let options = service_options(&registry);
    let mut form = ContactForm::new(options[0].clone());
    form.name = "John Doe".to_owned();
    form.email = "john@company.com".to_owned();
    form.message = "Tell us about your project goals".to_owned();

    let req = form.submit().unwrap();
    assert_eq!(req.service, "UGC Ads (₹1,999)");
    assert_eq!(req.name, "John Doe");
}

#[test]
fn any_navigation_closes_the_mobile_menu() {
    let (registry, mut navigator, _) = site();
    let shell = Rc::new(RefCell::new(ShellState::new(20.0)));

    let sub_shell = shell.clone();
    navigator.subscribe(move |_| sub_shell.borrow_mut().on_navigate());

    navigator.navigate("/pricing");
    shell.borrow_mut().toggle_menu();
    assert!(shell.borrow().menu_open());

    // an in-page call to action, not a menu link
    let cta = pricing_tiers(&registry)[0].cta;
    navigator.navigate(cta.path());
    assert!(!shell.borrow().menu_open());

    // history back to the previous page
    shell.borrow_mut().toggle_menu();
    navigator.navigate("/pricing");
    assert!(!shell.borrow().menu_open());
}
