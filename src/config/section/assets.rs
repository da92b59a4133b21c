//! `[assets]` section configuration.
//!
//! Output directory names for compiled stylesheets, scripts and images,
//! relative to the build output.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! css_dir = "stylesheets"
//! js_dir = "javascripts"
//! images_dir = "images"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub css_dir: PathBuf,
    pub js_dir: PathBuf,
    pub images_dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            css_dir: "stylesheets".into(),
            js_dir: "javascripts".into(),
            images_dir: "images".into(),
        }
    }
}

crate::config_fields!(AssetsConfig => AssetsFields, "assets" { css_dir, js_dir, images_dir });

impl AssetsConfig {
    fn entries(&self) -> [(FieldPath, &Path); 3] {
        [
            (Self::FIELDS.css_dir, &self.css_dir),
            (Self::FIELDS.js_dir, &self.js_dir),
            (Self::FIELDS.images_dir, &self.images_dir),
        ]
    }

    /// Each directory must be a non-empty relative path that stays inside
    /// the output, and no two kinds may share a directory.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let entries = self.entries();

        for (field, dir) in entries {
            if dir.as_os_str().is_empty() {
                diag.error(field, "must not be empty");
            } else if dir.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("'{}' is absolute", dir.display()),
                    "asset directories are relative to the build output",
                );
            } else if dir.components().any(|c| matches!(c, Component::ParentDir)) {
                diag.error(
                    field,
                    format!("'{}' escapes the build output", dir.display()),
                );
            }
        }

        for (i, (field, dir)) in entries.iter().enumerate() {
            if dir.as_os_str().is_empty() {
                continue;
            }
            if let Some((other, _)) = entries[..i].iter().find(|(_, prev)| prev == dir) {
                diag.error(
                    *field,
                    format!("'{}' is already used by {}", dir.display(), other),
                );
            }
        }
    }
}
