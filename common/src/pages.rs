use crate::{
    content::{ContentRegistry, PortfolioCategory, PortfolioEntry, ServiceOffering},
    router::Page,
};

// Home
//
// the home page is a fixed sequence of sections; the webapp renders them in
// exactly this order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeSection {
    Hero,
    QuickNav,
    Showcase,
    Problems,
    Services,
    Process,
    Testimonials,
    CallToAction,
}

pub const HOME_SECTIONS: [HomeSection; 8] = [
    HomeSection::Hero,
    HomeSection::QuickNav,
    HomeSection::Showcase,
    HomeSection::Problems,
    HomeSection::Services,
    HomeSection::Process,
    HomeSection::Testimonials,
    HomeSection::CallToAction,
];

// number of portfolio entries previewed on the home page
pub const SHOWCASE_LEN: usize = 3;

pub fn showcase(registry: &ContentRegistry) -> &[PortfolioEntry] {
    let entries = registry.portfolio();
    &entries[..entries.len().min(SHOWCASE_LEN)]
}

// Portfolio
//
// the selected filter is a label from FILTER_LABELS held in page-local state
pub const ALL_FILTER: &str = "All";
pub const FILTER_LABELS: [&str; 4] = [ALL_FILTER, "UGC Ads", "Commercials", "Branding"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortfolioFilter {
    All,
    Only(PortfolioCategory),
    // a label that is not offered by the page; matches nothing
    Unmatched,
}

impl PortfolioFilter {
    pub fn from_label(label: &str) -> Self {
        match label {
            ALL_FILTER => PortfolioFilter::All,
            "UGC Ads" => PortfolioFilter::Only(PortfolioCategory::UgcAd),
            "Commercials" => PortfolioFilter::Only(PortfolioCategory::Commercial),
            "Branding" => PortfolioFilter::Only(PortfolioCategory::Branding),
            _ => PortfolioFilter::Unmatched,
        }
    }

    pub fn matches(self, category: PortfolioCategory) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Only(wanted) => wanted == category,
            PortfolioFilter::Unmatched => false,
        }
    }
}

pub fn filter_portfolio<'a>(entries: &'a [PortfolioEntry], label: &str) -> Vec<&'a PortfolioEntry> {
    let filter = PortfolioFilter::from_label(label);

    entries.iter().filter(|e| filter.matches(e.category)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterChip {
    pub label: &'static str,
    pub selected: bool,
}

pub fn filter_chips(selected: &str) -> [FilterChip; 4] {
    FILTER_LABELS.map(|label| FilterChip {
        label,
        selected: label == selected,
    })
}

// Pricing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingTier<'a> {
    pub service: &'a ServiceOffering,
    // where "Get Started" leads
    pub cta: Page,
}

pub fn pricing_tiers(registry: &ContentRegistry) -> Vec<PricingTier<'_>> {
    registry
        .services()
        .iter()
        .map(|service| PricingTier {
            service,
            cta: Page::Contact,
        })
        .collect()
}

pub const FAQ: [(&str, &str); 2] = [
    (
        "Do you offer refunds?",
        "Yes, we have a satisfaction guarantee. If the initial draft doesn't match the agreed concept, we revise it until it does.",
    ),
    (
        "How long does delivery take?",
        "Standard delivery is 48-72 hours. Rush delivery (24 hours) is available for an additional fee.",
    ),
];

// Contact
pub const OTHER_SERVICE: &str = "Other / Custom";

// the options of the service dropdown; the first is preselected
pub fn service_options(registry: &ContentRegistry) -> Vec<String> {
    registry
        .services()
        .iter()
        .map(|s| format!("{} ({})", s.title, s.price))
        .chain(std::iter::once(OTHER_SERVICE.to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ContentRegistry {
        ContentRegistry::builtin().unwrap()
    }

    #[test]
    fn all_filter_returns_every_entry() {
        let registry = registry();
        let shown = filter_portfolio(registry.portfolio(), "All");

        assert_eq!(shown.len(), 6);
        assert!(shown.iter().zip(registry.portfolio()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    // the grid applies the selected filter rather than always listing every entry
    #[test]
    fn category_filter_narrows_the_grid() {
        let registry = registry();
        let shown = filter_portfolio(registry.portfolio(), "UGC Ads");

        let expected: Vec<&PortfolioEntry> = registry
            .portfolio()
            .iter()
            .filter(|e| e.category.label() == "UGC Ad")
            .collect();

        assert!(!shown.is_empty());
        assert_eq!(shown, expected);
    }

    #[test]
    fn each_offered_filter_is_consistent() {
        let registry = registry();
        let total: usize = FILTER_LABELS[1..]
            .iter()
            .map(|label| filter_portfolio(registry.portfolio(), label).len())
            .sum();

        assert_eq!(total, registry.portfolio().len());
    }

    #[test]
    fn unknown_filter_matches_nothing() {
        let registry = registry();

        assert!(filter_portfolio(registry.portfolio(), "Podcasts").is_empty());
        assert!(filter_portfolio(registry.portfolio(), "UGC Ad").is_empty());
        assert!(filter_portfolio(registry.portfolio(), "").is_empty());
    }

    #[test]
    fn exactly_one_chip_is_selected() {
        let chips = filter_chips("Commercials");

        assert_eq!(chips.iter().filter(|c| c.selected).count(), 1);
        assert_eq!(chips[2], FilterChip { label: "Commercials", selected: true });
        assert_eq!(chips[0].label, ALL_FILTER);
    }

    #[test]
    fn pricing_lists_literal_prices_in_order() {
        let registry = registry();
        let tiers = pricing_tiers(&registry);

        let prices: Vec<&str> = tiers.iter().map(|t| t.service.price.as_str()).collect();
        assert_eq!(prices, ["₹1,999", "₹4,599", "₹30,000"]);
        assert!(tiers.iter().all(|t| t.cta == Page::Contact));
    }

    #[test]
    fn service_options_end_with_custom() {
        let options = service_options(&registry());

        assert_eq!(
            options,
            [
                "UGC Ads (₹1,999)",
                "Brand Commercials (₹4,599)",
                "Personal Branding (₹30,000)",
                "Other / Custom",
            ]
        );
    }

    #[test]
    fn home_sections_run_hero_to_call_to_action() {
        assert_eq!(HOME_SECTIONS.first(), Some(&HomeSection::Hero));
        assert_eq!(HOME_SECTIONS.last(), Some(&HomeSection::CallToAction));
        assert_eq!(showcase(&registry()).len(), SHOWCASE_LEN);
    }
}
