//! `menu_item` helper: link attributes for one navigation entry.

use super::PageRequest;
use crate::utils::html::escape_attr;
use serde::{Deserialize, Serialize};
use std::fmt;

const ITEM_CLASS: &str = "item";
const ACTIVE_ITEM_CLASS: &str = "active item";

/// Attributes for a menu link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemAttrs {
    pub href: String,
    pub class: String,
}

impl MenuItemAttrs {
    /// Whether the entry points at the page being rendered.
    pub fn is_active(&self) -> bool {
        self.class == ACTIVE_ITEM_CLASS
    }

    /// Render as HTML attributes: `href="/blog" class="item"`.
    pub fn to_html(&self) -> String {
        format!(
            "href=\"{}\" class=\"{}\"",
            escape_attr(&self.href),
            escape_attr(&self.class)
        )
    }
}

impl fmt::Display for MenuItemAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Link attributes for `target` as seen from `page`.
///
/// `href` is always `"/" + target`. The class is `"active item"` exactly when
/// the page path equals `target`. An empty target never matches.
pub fn menu_item(target: &str, page: &PageRequest) -> MenuItemAttrs {
    let class = if !target.is_empty() && page.path == target {
        ACTIVE_ITEM_CLASS
    } else {
        ITEM_CLASS
    };

    MenuItemAttrs {
        href: format!("/{target}"),
        class: class.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::Helpers;

    #[test]
    fn test_active_on_current_page() {
        let attrs = menu_item("blog", &PageRequest::new("blog"));
        assert_eq!(attrs.href, "/blog");
        assert_eq!(attrs.class, "active item");
        assert!(attrs.is_active());
    }

    #[test]
    fn test_inactive_elsewhere() {
        let attrs = menu_item("blog", &PageRequest::new("home"));
        assert_eq!(attrs.href, "/blog");
        assert_eq!(attrs.class, "item");
        assert!(!attrs.is_active());
    }

    #[test]
    fn test_href_ignores_current_page() {
        for current in ["", "blog", "about", "blog/2024"] {
            let page = PageRequest::new(current);
            for target in ["", "blog", "about", "blog/2024"] {
                let attrs = menu_item(target, &page);
                assert_eq!(attrs.href, format!("/{target}"));
                let expected = !target.is_empty() && current == target;
                assert_eq!(attrs.is_active(), expected, "{current} vs {target}");
            }
        }
    }

    #[test]
    fn test_empty_target() {
        assert_eq!(menu_item("", &PageRequest::new("home")).class, "item");
        let root = menu_item("", &PageRequest::default());
        assert_eq!(root.href, "/");
        assert_eq!(root.class, "item");
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        assert!(!menu_item("blog", &PageRequest::new("blog/")).is_active());
        assert!(!menu_item("blog", &PageRequest::new("Blog")).is_active());
    }

    #[test]
    fn test_to_html_escapes() {
        let attrs = menu_item("a\"b", &PageRequest::new("home"));
        assert_eq!(attrs.to_html(), "href=\"/a&quot;b\" class=\"item\"");
        assert_eq!(attrs.to_string(), attrs.to_html());
    }

    #[test]
    fn test_bound_helpers() {
        let page = PageRequest::new("about");
        let helpers = Helpers::new(&page);
        assert!(helpers.menu_item("about").is_active());
        assert!(!helpers.menu_item("blog").is_active());
    }
}
