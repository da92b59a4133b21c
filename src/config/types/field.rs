//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Generated per section with [`config_fields!`](crate::config_fields), so
/// diagnostics never spell TOML paths by hand.
///
/// # Example
///
/// ```ignore
/// config_fields!(NavConfig => NavFields, "nav" { element, sections });
///
/// diag.error(NavConfig::FIELDS.element, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Declare the `FIELDS` accessor for a config section.
///
/// ```ignore
/// config_fields!(BlogConfig => BlogFields, "blog" { prefix, layout });
/// assert_eq!(BlogConfig::FIELDS.prefix.as_str(), "blog.prefix");
/// ```
#[macro_export]
macro_rules! config_fields {
    ($config:ident => $fields:ident, $section:literal { $($field:ident),* $(,)? }) => {
        // Not every path ends up in a diagnostic.
        #[allow(dead_code)]
        #[derive(Debug, Clone, Copy)]
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)*
        }

        impl $config {
            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::FieldPath::new(concat!($section, ".", stringify!($field))),)*
            };
        }
    };
}
