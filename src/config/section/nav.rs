//! `[nav]` section configuration for the scroll-spy navigation bar.
//!
//! # Example
//!
//! ```toml
//! [nav]
//! element = "nav"                  # id of the navigation bar
//! sections = ["about", "posts"]    # ids shifted while the bar is pinned
//! fixed_class = "fixed"
//! margin_class = "nav-offset"
//! active_class = "active"
//! link_selector = "a"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Plain CSS identifier, usable both as an element id and a class name.
static CSS_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[_a-zA-Z][_a-zA-Z0-9-]*$").expect("valid ident regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Id of the navigation element.
    pub element: String,

    /// Ids of the content sections that receive `margin_class` while pinned.
    pub sections: Vec<String>,

    /// Class pinning the navigation bar to the viewport.
    pub fixed_class: String,

    /// Class compensating for the bar leaving the document flow.
    pub margin_class: String,

    /// Class marking the selected navigation link.
    pub active_class: String,

    /// Selector for links inside the navigation element.
    pub link_selector: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            element: "nav".into(),
            sections: vec!["content".into()],
            fixed_class: "fixed".into(),
            margin_class: "nav-offset".into(),
            active_class: "active".into(),
            link_selector: "a".into(),
        }
    }
}

crate::config_fields!(NavConfig => NavFields, "nav" {
    element,
    sections,
    fixed_class,
    margin_class,
    active_class,
    link_selector,
});

impl NavConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        Self::check_ident(Self::FIELDS.element, &self.element, diag);
        Self::check_ident(Self::FIELDS.fixed_class, &self.fixed_class, diag);
        Self::check_ident(Self::FIELDS.margin_class, &self.margin_class, diag);
        Self::check_ident(Self::FIELDS.active_class, &self.active_class, diag);

        let mut seen = FxHashSet::default();
        for section in &self.sections {
            Self::check_ident(Self::FIELDS.sections, section, diag);
            if !seen.insert(section.as_str()) {
                diag.error(
                    Self::FIELDS.sections,
                    format!("'{section}' is listed more than once"),
                );
            }
        }

        if seen.contains(self.element.as_str()) {
            diag.error_with_hint(
                Self::FIELDS.sections,
                format!("'{}' is the navigation element itself", self.element),
                format!("remove it from {}", Self::FIELDS.sections),
            );
        }

        if self.link_selector.trim().is_empty() {
            diag.error(Self::FIELDS.link_selector, "must not be empty");
        }
    }

    fn check_ident(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
        if !CSS_IDENT.is_match(value) {
            diag.error_with_hint(
                field,
                format!("'{value}' is not a valid CSS identifier"),
                "use letters, digits, '-' and '_', not starting with a digit",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn errors(extra: &str) -> ConfigDiagnostics {
        let config = test_parse_config(extra);
        let mut diag = ConfigDiagnostics::new();
        config.nav.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(errors("").is_empty());
    }

    #[test]
    fn test_custom_sections() {
        let config = test_parse_config("[nav]\nelement = \"menu\"\nsections = [\"about\", \"posts\"]");
        assert_eq!(config.nav.element, "menu");
        assert_eq!(config.nav.sections, vec!["about", "posts"]);
        assert_eq!(config.nav.fixed_class, "fixed");
    }

    #[test]
    fn test_invalid_identifiers() {
        let diag = errors("[nav]\nelement = \"1nav\"\nfixed_class = \"has space\"");
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_duplicate_and_self_sections() {
        let diag = errors("[nav]\nsections = [\"a\", \"a\", \"nav\"]");
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![NavConfig::FIELDS.sections; 2]);
    }

    #[test]
    fn test_empty_sections_allowed() {
        assert!(errors("[nav]\nsections = []").is_empty());
    }
}
