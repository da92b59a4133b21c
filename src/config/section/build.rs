//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "build"               # Output directory (relative to site root)
//! directory_indexes = true       # Pretty URLs: about.html -> about/index.html
//! plugins = ["analytics", "syntax", "blog", "directory_indexes"]
//! ```

use crate::config::ConfigDiagnostics;
use crate::plugin::PluginKind;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Build output directory.
    pub output: PathBuf,

    /// Register the directory-indexes plugin.
    pub directory_indexes: bool,

    /// Plugin registration order.
    pub plugins: Vec<PluginKind>,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "build".into(),
            directory_indexes: true,
            plugins: PluginKind::DEFAULT_ORDER.to_vec(),
        }
    }
}

crate::config_fields!(BuildSectionConfig => BuildFields, "build" { output, directory_indexes, plugins });

impl BuildSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error(Self::FIELDS.output, "must not be empty");
        }

        let mut seen = FxHashSet::default();
        for kind in &self.plugins {
            if !seen.insert(*kind) {
                diag.error(
                    Self::FIELDS.plugins,
                    format!("'{kind}' is registered more than once"),
                );
            }
        }
    }
}
