//! `stickynav check`: report on a loaded, validated config.

use crate::{
    config::SiteConfig,
    log,
    plugin::{Plugin, PluginKind, PluginRegistry},
};
use anyhow::Result;

pub fn check_site(config: &SiteConfig) -> Result<()> {
    let warnings = config.diagnose().warnings().len();
    let plural = if warnings == 1 { "" } else { "s" };
    log!("check"; "{} is valid ({} warning{})", config.config_path.display(), warnings, plural);
    for line in summary(config) {
        log!("check"; "{}", line);
    }
    Ok(())
}

fn summary(config: &SiteConfig) -> Vec<String> {
    let registry = PluginRegistry::from_config(config);
    let nav = &config.nav;

    let plugins = if registry.is_empty() {
        "none".to_string()
    } else {
        let names: Vec<_> = registry.kinds().iter().map(|k| k.name()).collect();
        names.join(", ")
    };
    let tracker = match registry.get(PluginKind::Analytics) {
        Some(Plugin::Analytics { tracker }) => tracker.as_str(),
        _ => "off",
    };

    vec![
        format!("plugins: {plugins}"),
        format!("analytics: {tracker}"),
        format!(
            "nav: #{} with {} section{}",
            nav.element,
            nav.sections.len(),
            if nav.sections.len() == 1 { "" } else { "s" }
        ),
        format!("output: {}", config.output_dir().display()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_summary_lists_plugins_and_nav() {
        let config = test_parse_config("[nav]\nsections = [\"a\", \"b\"]");
        let lines = summary(&config);
        assert_eq!(lines[0], "plugins: syntax, blog, directory_indexes");
        assert_eq!(lines[1], "analytics: off");
        assert_eq!(lines[2], "nav: #nav with 2 sections");
    }

    #[test]
    fn test_summary_shows_tracker() {
        let config = test_parse_config("[analytics]\ntracker = \"G-ABC123\"");
        let lines = summary(&config);
        assert_eq!(lines[0], "plugins: analytics, syntax, blog, directory_indexes");
        assert_eq!(lines[1], "analytics: G-ABC123");
    }

    #[test]
    fn test_summary_without_plugins() {
        let config = test_parse_config("[build]\nplugins = []");
        assert_eq!(summary(&config)[0], "plugins: none");
    }
}
