use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::router::NotFoundPolicy;

pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 20.0;

// site configuration
//
// this struct holds the handful of deployment knobs that are not marketing copy: the
// contact details shown in the shell, where contact requests are handed off, and the
// policies the shell and router need
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,

    pub contact: ContactConfig,

    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub location: String,

    // root url of the form backend
    //
    // when unset, submissions stay in the browser outbox
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ShellConfig {
    // vertical scroll offset at which the header switches to the elevated style
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD_PX
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RoutingConfig {
    #[serde(default)]
    pub not_found: NotFoundPolicy,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse site config: {err}")))?;

    let config = data.config;

    let threshold = config.shell.scroll_threshold_px;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(anyhow::Error::msg(format!(
            "scroll_threshold_px must be a non-negative number, got {threshold}"
        )));
    }

    debug!("successfully parsed site config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [config]
        brand = "Drova Labs"
        tagline = "AI-Powered Advertising Excellence."

        [config.contact]
        email = "hello@drovalabs.com"
        phone = "+91 98765 43210"
        location = "Mumbai, India"
    "#;

    #[test]
    fn omitted_tables_fall_back_to_defaults() {
        let config = parse_config(MINIMAL).unwrap();

        assert_eq!(config.shell.scroll_threshold_px, 20.0);
        assert_eq!(config.routing.not_found, NotFoundPolicy::FallbackView);
        assert_eq!(config.contact.endpoint, None);
    }

    #[test]
    fn overrides_are_read() {
        let doc = format!(
            "{MINIMAL}\n[config.shell]\nscroll_threshold_px = 64.0\n\n[config.routing]\nnot_found = \"Home\"\n"
        );
        let config = parse_config(&doc).unwrap();

        assert_eq!(config.shell.scroll_threshold_px, 64.0);
        assert_eq!(config.routing.not_found, NotFoundPolicy::Home);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let doc = format!("{MINIMAL}\n[config.shell]\nscroll_threshold_px = -1.0\n");
        assert!(parse_config(&doc).is_err());
    }

    #[test]
    fn missing_config_table_is_an_error() {
        let err = parse_config("brand = \"x\"").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse site config"));
    }
}
