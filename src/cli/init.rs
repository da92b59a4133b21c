//! `stickynav init`: write a commented default config.

use crate::{
    config::{ConfigError, SiteConfig},
    debug, log,
};
use anyhow::{Context, Result, bail};

/// Create `stickynav.toml` at the config's root.
///
/// If `dry_run` is true, only prints the template to stdout.
pub fn new_site(config: &SiteConfig, dry_run: bool) -> Result<()> {
    check_template()?;

    if dry_run {
        print!("{}", config_template());
        return Ok(());
    }

    let path = &config.config_path;
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    super::write_output(path, config_template())?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// The template must load as a valid config before anything is written.
fn check_template() -> Result<()> {
    let parsed = SiteConfig::from_str(config_template()).context("default config template")?;
    parsed
        .diagnose()
        .into_result()
        .map_err(ConfigError::Diagnostics)
        .context("default config template")?;
    debug!("init"; "template ok, {} plugin(s) listed", parsed.build.plugins.len());
    Ok(())
}

/// Default `stickynav.toml` with every option spelled out.
pub fn config_template() -> &'static str {
    r#"[site]
title = "My Site"
# url = "https://example.com"

[blog]
enable = true
prefix = "blog"            # articles live under /blog/
layout = "article"
tag_template = "tag.html"

[assets]
css_dir = "stylesheets"
js_dir = "javascripts"
images_dir = "images"

[build]
output = "build"
directory_indexes = true
plugins = ["analytics", "syntax", "blog", "directory_indexes"]

[highlight]
enable = true
pattern = "language-(\\w+)"
target = "pre code"

[analytics]
# tracker = "UA-XXXXX-Y"

[nav]
element = "nav"
sections = ["content"]
fixed_class = "fixed"
margin_class = "nav-offset"
active_class = "active"
link_selector = "a"
"#
}
