//! `[blog]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [blog]
//! prefix = "blog"              # URL prefix for articles
//! layout = "article"           # Layout used for every article
//! tag_template = "tag.html"    # Template rendering one tag listing
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Blog plugin options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Register the blog plugin.
    pub enable: bool,

    /// URL prefix for articles, without slashes.
    pub prefix: String,

    /// Layout name applied to articles.
    pub layout: String,

    /// Template path for tag listing pages.
    pub tag_template: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            enable: true,
            prefix: "blog".into(),
            layout: "article".into(),
            tag_template: "tag.html".into(),
        }
    }
}

crate::config_fields!(BlogConfig => BlogFields, "blog" { enable, prefix, layout, tag_template });

impl BlogConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.prefix.trim().is_empty() {
            diag.error(Self::FIELDS.prefix, "must not be empty");
        } else if self.prefix.starts_with('/') || self.prefix.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.prefix,
                format!("'{}' has a leading or trailing slash", self.prefix),
                format!("use \"{}\"", self.prefix.trim_matches('/')),
            );
        }

        if self.layout.trim().is_empty() {
            diag.error(Self::FIELDS.layout, "must not be empty");
        }

        if self.tag_template.trim().is_empty() {
            diag.error(Self::FIELDS.tag_template, "must not be empty");
        }
    }
}
