//! Plugin registration for the external site builder.
//!
//! The builder consumes a [`Manifest`]: the ordered list of plugins to
//! activate with their options, the asset directory names, and the
//! per-request helpers it should expose to templates.
//!
//! ```json
//! {
//!   "site": { "title": "My Blog", "url": "https://example.com" },
//!   "plugins": [
//!     { "name": "syntax", "options": { "pattern": "language-(\\w+)", "target": "pre code" } },
//!     { "name": "blog", "options": { "prefix": "blog", "layout": "article", "tag_template": "tag.html" } },
//!     { "name": "directory_indexes" }
//!   ],
//!   "directories": { "output": "build", "css": "stylesheets", "js": "javascripts", "images": "images" },
//!   "helpers": ["menu_item"],
//!   "nav": { "element": "nav", "sections": ["content"], ... }
//! }
//! ```

mod kind;

pub use kind::PluginKind;

use crate::{
    config::{NavConfig, SiteConfig, SiteInfoConfig},
    debug,
    helper::HELPERS,
};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// One activated plugin with its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "options", rename_all = "snake_case")]
pub enum Plugin {
    Analytics {
        tracker: String,
    },
    Syntax {
        pattern: String,
        target: String,
    },
    Blog {
        prefix: String,
        layout: String,
        tag_template: String,
    },
    DirectoryIndexes,
}

impl Plugin {
    pub const fn kind(&self) -> PluginKind {
        match self {
            Self::Analytics { .. } => PluginKind::Analytics,
            Self::Syntax { .. } => PluginKind::Syntax,
            Self::Blog { .. } => PluginKind::Blog,
            Self::DirectoryIndexes => PluginKind::DirectoryIndexes,
        }
    }

    /// Build the plugin for `kind` from its config section.
    ///
    /// Returns `None` when the section disables it.
    pub fn from_config(kind: PluginKind, config: &SiteConfig) -> Option<Self> {
        match kind {
            PluginKind::Analytics => config
                .analytics
                .tracker
                .clone()
                .map(|tracker| Self::Analytics { tracker }),
            PluginKind::Syntax => config.highlight.enable.then(|| Self::Syntax {
                pattern: config.highlight.pattern.clone(),
                target: config.highlight.target.clone(),
            }),
            PluginKind::Blog => config.blog.enable.then(|| Self::Blog {
                prefix: config.blog.prefix.clone(),
                layout: config.blog.layout.clone(),
                tag_template: config.blog.tag_template.clone(),
            }),
            PluginKind::DirectoryIndexes => config
                .build
                .directory_indexes
                .then_some(Self::DirectoryIndexes),
        }
    }
}

/// Plugins in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginRegistry {
    plugins: Vec<Plugin>,
}

impl PluginRegistry {
    /// Register every enabled plugin, following `build.plugins` order.
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut registry = Self::default();
        for &kind in &config.build.plugins {
            match Plugin::from_config(kind, config) {
                Some(plugin) => registry.register(plugin),
                None => debug!("plugin"; "skipping {}: disabled in config", kind),
            }
        }
        registry
    }

    /// Append a plugin. A plugin of the same kind replaces the earlier one
    /// in place, keeping its original position.
    pub fn register(&mut self, plugin: Plugin) {
        match self.plugins.iter_mut().find(|p| p.kind() == plugin.kind()) {
            Some(existing) => *existing = plugin,
            None => self.plugins.push(plugin),
        }
    }

    pub fn kinds(&self) -> Vec<PluginKind> {
        self.plugins.iter().map(Plugin::kind).collect()
    }

    pub fn get(&self, kind: PluginKind) -> Option<&Plugin> {
        self.plugins.iter().find(|p| p.kind() == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Output directory names handed to the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directories {
    pub output: PathBuf,
    pub css: PathBuf,
    pub js: PathBuf,
    pub images: PathBuf,
}

/// Everything the builder needs, in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest<'a> {
    pub site: &'a SiteInfoConfig,
    pub plugins: PluginRegistry,
    pub directories: Directories,
    pub helpers: &'static [&'static str],
    pub nav: &'a NavConfig,
}

impl<'a> Manifest<'a> {
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            site: &config.site,
            plugins: PluginRegistry::from_config(config),
            directories: Directories {
                output: config.build.output.clone(),
                css: config.assets.css_dir.clone(),
                js: config.assets.js_dir.clone(),
                images: config.assets.images_dir.clone(),
            },
            helpers: HELPERS,
            nav: &config.nav,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
