//! Embedded static resources.
//!
//! - `template` - Template types for typed variable injection
//! - [`SCROLLSPY_JS`] - browser scroll-spy, minified by `build.rs`
//!
//! # Usage
//!
//! ```ignore
//! use embed::{SCROLLSPY_JS, ScrollSpyVars};
//!
//! let js = SCROLLSPY_JS.render(&ScrollSpyVars::from_config(&config));
//! ```

mod template;

pub use template::{Template, TemplateVars};

use crate::{config::SiteConfig, spy::SpyOptions};
use std::path::PathBuf;

/// File name of the rendered script inside `[assets] js_dir`.
pub const SCROLLSPY_FILE: &str = "stickynav.js";

/// Variables for scrollspy.js.
pub struct ScrollSpyVars {
    pub options: SpyOptions,
}

impl ScrollSpyVars {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            options: SpyOptions::from(&config.nav),
        }
    }
}

impl TemplateVars for ScrollSpyVars {
    fn apply(&self, content: &str) -> String {
        let json = serde_json::to_string(&self.options).unwrap_or_else(|_| "{}".into());
        content.replace("__STICKYNAV_CONFIG__", &json)
    }
}

/// Scroll-spy JavaScript with nav configuration injection.
pub const SCROLLSPY_JS: Template<ScrollSpyVars> =
    Template::new(include_str!(concat!(env!("OUT_DIR"), "/scrollspy.min.js")));

/// Where `stickynav script --write` puts the rendered script.
pub fn script_path(config: &SiteConfig) -> PathBuf {
    config
        .output_dir()
        .join(&config.assets.js_dir)
        .join(SCROLLSPY_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_placeholder_replaced() {
        let config = test_parse_config("[nav]\nelement = \"menu\"\nsections = [\"a\", \"b\"]");
        let js = SCROLLSPY_JS.render(&ScrollSpyVars::from_config(&config));

        assert!(SCROLLSPY_JS.content().contains("__STICKYNAV_CONFIG__"));
        assert!(!js.contains("__STICKYNAV_CONFIG__"));
        assert!(js.contains(r#""element":"menu""#));
        assert!(js.contains(r#""sections":["a","b"]"#));
        assert!(js.contains(r#""marginClass":"nav-offset""#));
        assert!(js.contains(r#""linkSelector":"a""#));
    }

    #[test]
    fn test_minified_script_keeps_handlers() {
        use regex::Regex;

        let js = SCROLLSPY_JS.content();
        for event in ["load", "scroll", "click"] {
            let registration =
                Regex::new(&format!(r#"addEventListener\(["'`]{event}["'`]"#)).unwrap();
            assert!(registration.is_match(js), "no {event} listener in {js}");
        }

        // Strict threshold; the minifier may negate it and swap the branches.
        let threshold =
            Regex::new(r"scrollY\s*(?:>|<=)|(?:<|>=)\s*(?:\w+\.)?scrollY").unwrap();
        assert!(threshold.is_match(js), "no scrollY comparison in {js}");
        assert!(!Regex::new(r"scrollY\s*>=|<=\s*(?:\w+\.)?scrollY").unwrap().is_match(js));

        assert_eq!(js.matches("getBoundingClientRect").count(), 1);
        assert!(js.contains("console.error"));
        assert!(js.contains("readyState"));
    }

    #[test]
    fn test_plain_template_vars() {
        let vars = ScrollSpyVars {
            options: SpyOptions::default(),
        };
        let rendered = vars.apply("const c = __STICKYNAV_CONFIG__;");
        assert!(rendered.starts_with("const c = {\"element\":\"nav\""));
    }

    #[test]
    fn test_script_path() {
        let mut config = test_parse_config("[assets]\njs_dir = \"js\"");
        config.set_root(Path::new("/site"));
        assert_eq!(
            script_path(&config),
            PathBuf::from("/site/build/js/stickynav.js")
        );
    }
}
