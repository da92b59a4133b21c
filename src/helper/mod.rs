//! Per-request helpers exposed to page templates.
//!
//! The builder calls these once per rendered page with the page's
//! [`PageRequest`]; each helper is a pure function of its arguments.

mod menu;

pub use menu::{MenuItemAttrs, menu_item};

use serde::{Deserialize, Serialize};

/// Names of the helpers registered with the builder.
pub const HELPERS: &[&str] = &["menu_item"];

/// The page currently being rendered, as supplied by the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page path without a leading slash (e.g., "blog").
    pub path: String,
}

impl PageRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Helpers bound to one page request.
#[derive(Debug, Clone, Copy)]
pub struct Helpers<'a> {
    page: &'a PageRequest,
}

impl<'a> Helpers<'a> {
    pub const fn new(page: &'a PageRequest) -> Self {
        Self { page }
    }

    pub fn menu_item(&self, target: &str) -> MenuItemAttrs {
        menu_item(target, self.page)
    }
}
