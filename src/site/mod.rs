//! The content side of the server: which paths exist, where their files live,
//! and which one is rendered as a template.

pub mod allowlist;
pub mod resolver;
pub mod template;

pub use allowlist::{AllowList, Authorization};
pub use resolver::{Resolver, Resource};

use crate::config::Config;

/// Read-only state shared by every worker.
#[derive(Debug, Clone)]
pub struct Site {
    pub allow_list: AllowList,
    pub resolver: Resolver,
    /// The one path whose `{time}` placeholders are filled in per request.
    pub template_path: Option<String>,
}

impl Site {
    pub fn new(allow_list: AllowList, resolver: Resolver, template_path: Option<String>) -> Self {
        Self {
            allow_list,
            resolver,
            template_path,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            AllowList::new(cfg.allowed_paths.iter().cloned()),
            Resolver::new(&cfg.public_dir),
            cfg.template_path.clone(),
        )
    }

    pub fn is_template(&self, path: &str) -> bool {
        self.template_path.as_deref() == Some(path)
    }
}
