//! `[highlight]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [highlight]
//! pattern = "language-(\\w+)"   # Captures the language from a class name
//! target = "pre code"           # Elements the highlighter runs on
//! ```

use crate::config::ConfigDiagnostics;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Syntax highlighter plugin options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Register the syntax plugin.
    pub enable: bool,

    /// Regex extracting the language name (first capture group) from a class.
    pub pattern: String,

    /// CSS selector for the code blocks to highlight.
    pub target: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            pattern: r"language-(\w+)".into(),
            target: "pre code".into(),
        }
    }
}

crate::config_fields!(HighlightConfig => HighlightFields, "highlight" { enable, pattern, target });

impl HighlightConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        match Regex::new(&self.pattern) {
            Ok(re) if re.captures_len() < 2 => diag.error_with_hint(
                Self::FIELDS.pattern,
                "pattern has no capture group for the language",
                r#"wrap the language part in parentheses, e.g. "language-(\\w+)""#,
            ),
            Ok(_) => {}
            Err(e) => diag.error(Self::FIELDS.pattern, format!("invalid regex: {e}")),
        }

        if self.target.trim().is_empty() {
            diag.error(Self::FIELDS.target, "must not be empty");
        }
    }
}
