use std::{collections::HashSet, fmt};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, debug, instrument};

// the registry shipped with the site
pub const BUILTIN_CONTENT: &str = include_str!("../content.toml");

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortfolioCategory {
    #[serde(rename = "UGC Ad")]
    UgcAd,
    Commercial,
    Branding,
}

impl PortfolioCategory {
    pub const ALL: [PortfolioCategory; 3] = [
        PortfolioCategory::UgcAd,
        PortfolioCategory::Commercial,
        PortfolioCategory::Branding,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PortfolioCategory::UgcAd => "UGC Ad",
            PortfolioCategory::Commercial => "Commercial",
            PortfolioCategory::Branding => "Branding",
        }
    }
}

impl fmt::Display for PortfolioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ServiceOffering {
    pub id: String,
    pub title: String,
    // prices are display strings, never computed
    pub price: String,
    pub unit: String,
    pub duration: String,
    pub tagline: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PortfolioEntry {
    pub id: String,
    pub title: String,
    pub category: PortfolioCategory,
    pub result: String,
    pub summary: String,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub excerpt: String,
    pub image: String,
}

impl BlogPost {
    // e.g. "Nov 04, 2024"; a registry that passed validation always has parseable dates
    pub fn display_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, DATE_FORMAT) {
            Ok(date) => date.format("%b %d, %Y").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("service {id} has no features")]
    NoFeatures { id: String },
    #[error("more than one service is marked popular")]
    MultiplePopular,
    #[error("{kind} {id} has no image reference")]
    MissingImage { kind: &'static str, id: String },
    #[error("blog post {id} has an invalid date {date}")]
    InvalidDate { id: String, date: String },
}

// ContentRegistry
//
// the fixed, ordered content the pages render; built once at startup and never
// mutated afterwards
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ContentRegistry {
    #[serde(default)]
    services: Vec<ServiceOffering>,
    #[serde(default)]
    portfolio: Vec<PortfolioEntry>,
    #[serde(default)]
    blog: Vec<BlogPost>,
}

impl ContentRegistry {
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_toml(BUILTIN_CONTENT)
    }

    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let registry: ContentRegistry = toml::from_str(doc)
            .map_err(|err| anyhow::Error::msg(format!("failed to parse content: {err}")))?;

        registry.validate()?;

        debug!(
            services = registry.services.len(),
            portfolio = registry.portfolio.len(),
            blog = registry.blog.len(),
            "loaded content registry"
        );
        Ok(registry)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        unique_ids("service", self.services.iter().map(|s| s.id.as_str()))?;
        unique_ids("portfolio", self.portfolio.iter().map(|p| p.id.as_str()))?;
        unique_ids("blog", self.blog.iter().map(|b| b.id.as_str()))?;

        for service in &self.services {
            if service.features.is_empty() {
                return Err(ContentError::NoFeatures {
                    id: service.id.clone(),
                });
            }
            require_image("service", &service.id, &service.image)?;
        }

        if self.services.iter().filter(|s| s.popular).count() > 1 {
            return Err(ContentError::MultiplePopular);
        }

        for entry in &self.portfolio {
            require_image("portfolio", &entry.id, &entry.image)?;
        }

        for post in &self.blog {
            require_image("blog", &post.id, &post.image)?;
            if NaiveDate::parse_from_str(&post.date, DATE_FORMAT).is_err() {
                return Err(ContentError::InvalidDate {
                    id: post.id.clone(),
                    date: post.date.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }

    pub fn portfolio(&self) -> &[PortfolioEntry] {
        &self.portfolio
    }

    pub fn blog(&self) -> &[BlogPost] {
        &self.blog
    }

    pub fn service(&self, id: &str) -> Option<&ServiceOffering> {
        self.services.iter().find(|s| s.id == id)
    }
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();

    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_owned(),
            });
        }
    }

    Ok(())
}

fn require_image(kind: &'static str, id: &str, image: &str) -> Result<(), ContentError> {
    if image.trim().is_empty() {
        return Err(ContentError::MissingImage {
            kind,
            id: id.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str) -> String {
        format!(
            r#"
            [[services]]
            id = "{id}"
            title = "t"
            price = "₹1"
            unit = "/video"
            duration = "d"
            tagline = "t"
            description = "d"
            features = ["f"]
            image = "https://img/{id}"
            "#
        )
    }

    #[test]
    fn builtin_registry_is_valid() {
        let registry = ContentRegistry::builtin().unwrap();

        assert_eq!(registry.services().len(), 3);
        assert_eq!(registry.portfolio().len(), 6);
        assert_eq!(registry.blog().len(), 6);
    }

    #[test]
    fn builtin_services_keep_document_order() {
        let registry = ContentRegistry::builtin().unwrap();
        let titles: Vec<&str> = registry.services().iter().map(|s| s.title.as_str()).collect();

        assert_eq!(titles, ["UGC Ads", "Brand Commercials", "Personal Branding"]);
        assert_eq!(registry.service("commercials").map(|s| s.popular), Some(true));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doc = format!("{}{}", service("ugc"), service("ugc"));
        let err = ContentRegistry::from_toml(&doc).unwrap_err();

        assert_eq!(err.to_string(), "duplicate service id ugc");
    }

    #[test]
    fn services_need_features() {
        let doc = service("ugc").replace(r#"features = ["f"]"#, "features = []");
        let registry: ContentRegistry = toml::from_str(&doc).unwrap();

        assert_eq!(
            registry.validate(),
            Err(ContentError::NoFeatures {
                id: "ugc".to_owned()
            })
        );
    }

    #[test]
    fn only_one_popular_service() {
        let doc = format!(
            "{}popular = true\n{}popular = true\n",
            service("a"),
            service("b")
        );
        let registry: ContentRegistry = toml::from_str(&doc).unwrap();

        assert_eq!(registry.validate(), Err(ContentError::MultiplePopular));
    }

    #[test]
    fn unknown_portfolio_category_fails_to_parse() {
        let doc = r#"
            [[portfolio]]
            id = "x"
            title = "x"
            category = "Podcast"
            result = "x"
            summary = "x"
            image = "https://img/x"
        "#;

        assert!(ContentRegistry::from_toml(doc).is_err());
    }

    #[test]
    fn blog_dates_are_checked_and_formatted() {
        let post = BlogPost {
            id: "p".to_owned(),
            title: "p".to_owned(),
            category: "c".to_owned(),
            date: "2024-11-04".to_owned(),
            excerpt: "e".to_owned(),
            image: "https://img/p".to_owned(),
        };
        assert_eq!(post.display_date(), "Nov 04, 2024");

        let registry = ContentRegistry {
            blog: vec![BlogPost {
                date: "yesterday".to_owned(),
                ..post
            }],
            ..Default::default()
        };
        assert_eq!(
            registry.validate(),
            Err(ContentError::InvalidDate {
                id: "p".to_owned(),
                date: "yesterday".to_owned()
            })
        );
    }
}
