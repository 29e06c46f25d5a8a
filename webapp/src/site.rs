use std::rc::Rc;

use common::{ContentRegistry, SiteConfig, config::parse_config};

const SITE_CONFIG: &str = include_str!("../site.toml");

// everything the pages render from, shared through context
#[derive(Clone)]
pub struct Site {
    pub config: Rc<SiteConfig>,
    pub content: Rc<ContentRegistry>,
}

impl Site {
    pub fn load() -> anyhow::Result<Self> {
        let config = parse_config(SITE_CONFIG)?;
        let content = ContentRegistry::builtin()?;

        Ok(Site {
            config: Rc::new(config),
            content: Rc::new(content),
        })
    }
}

// both halves are immutable once loaded, so identity is equality
impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.content, &other.content)
    }
}
