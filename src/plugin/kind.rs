//! Plugin identifiers as they appear in `build.plugins`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A plugin the external builder knows how to activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginKind {
    /// Analytics tracker injection.
    Analytics,
    /// Code syntax highlighting.
    Syntax,
    /// Blog engine (articles, tags).
    Blog,
    /// `page.html` → `page/index.html`.
    DirectoryIndexes,
}

impl PluginKind {
    /// Default registration order.
    pub const DEFAULT_ORDER: [Self; 4] = [
        Self::Analytics,
        Self::Syntax,
        Self::Blog,
        Self::DirectoryIndexes,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Analytics => "analytics",
            Self::Syntax => "syntax",
            Self::Blog => "blog",
            Self::DirectoryIndexes => "directory_indexes",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
