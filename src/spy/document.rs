//! Document abstraction the scroll-spy runs against.
//!
//! [`Document`] is the minimal slice of a DOM the state machine touches.
//! [`MemoryDocument`] implements it over an in-memory element table, which
//! is what tests and `stickynav simulate` drive.

use rustc_hash::{FxHashMap, FxHashSet};

/// Element lookup and class mutation by element id.
///
/// Mutations on ids that do not exist are no-ops and report `false`.
pub trait Document {
    /// Distance in pixels from the document top to the element, if it exists.
    fn offset_top(&self, id: &str) -> Option<f64>;

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    fn add_class(&mut self, id: &str, class: &str) -> bool;

    fn remove_class(&mut self, id: &str, class: &str) -> bool;

    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Ids of the descendants of `container` matching `selector`, in document order.
    fn links(&self, container: &str, selector: &str) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq)]
struct Element {
    tag: String,
    offset_top: f64,
    classes: FxHashSet<String>,
    children: Vec<String>,
}

/// In-memory [`Document`].
///
/// Selectors are limited to a tag name (`a`), a class (`.item`) or `*`.
///
/// ```ignore
/// let mut doc = MemoryDocument::new();
/// doc.element("nav", "nav", 200.0)
///     .child("nav", "link-about", "a")
///     .element("about", "section", 260.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDocument {
    elements: FxHashMap<String, Element>,
    scroll_y: f64,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a top-level element.
    pub fn element(&mut self, id: &str, tag: &str, offset_top: f64) -> &mut Self {
        self.elements.insert(
            id.to_string(),
            Element {
                tag: tag.to_string(),
                offset_top,
                classes: FxHashSet::default(),
                children: Vec::new(),
            },
        );
        self
    }

    /// Insert an element nested in `parent`, sharing its offset.
    ///
    /// Ignored when `parent` does not exist.
    pub fn child(&mut self, parent: &str, id: &str, tag: &str) -> &mut Self {
        let Some(offset) = self.elements.get_mut(parent).map(|p| {
            p.children.push(id.to_string());
            p.offset_top
        }) else {
            return self;
        };
        self.element(id, tag, offset)
    }

    pub fn set_scroll(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Move an element, as a late layout change would.
    #[cfg(test)]
    pub fn set_offset(&mut self, id: &str, offset_top: f64) {
        if let Some(el) = self.elements.get_mut(id) {
            el.offset_top = offset_top;
        }
    }

    #[cfg(test)]
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Classes on `id`, sorted.
    pub fn classes(&self, id: &str) -> Vec<&str> {
        let mut classes: Vec<&str> = self
            .elements
            .get(id)
            .map(|el| el.classes.iter().map(String::as_str).collect())
            .unwrap_or_default();
        classes.sort_unstable();
        classes
    }

    /// Ids of every element carrying `class`, sorted.
    #[cfg(test)]
    pub fn with_class(&self, class: &str) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .elements
            .iter()
            .filter(|(_, el)| el.classes.contains(class))
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    fn matches(el: &Element, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => el.classes.contains(class),
            None => selector == "*" || el.tag.eq_ignore_ascii_case(selector),
        }
    }

    fn collect_links(&self, id: &str, selector: &str, out: &mut Vec<String>) {
        let Some(el) = self.elements.get(id) else {
            return;
        };
        for child_id in &el.children {
            if let Some(child) = self.elements.get(child_id)
                && Self::matches(child, selector)
            {
                out.push(child_id.clone());
            }
            self.collect_links(child_id, selector, out);
        }
    }
}

impl Document for MemoryDocument {
    fn offset_top(&self, id: &str) -> Option<f64> {
        self.elements.get(id).map(|el| el.offset_top)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn add_class(&mut self, id: &str, class: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.classes.insert(class.to_string());
                true
            }
            None => false,
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.classes.remove(class);
                true
            }
            None => false,
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|el| el.classes.contains(class))
    }

    fn links(&self, container: &str, selector: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_links(container, selector, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.element("nav", "nav", 120.0)
            .child("nav", "menu", "ul")
            .child("menu", "home", "a")
            .child("menu", "blog", "A")
            .child("nav", "logo", "img")
            .element("main", "section", 180.0);
        doc
    }

    #[test]
    fn test_links_in_document_order() {
        let doc = sample();
        assert_eq!(doc.links("nav", "a"), vec!["home", "blog"]);
        assert_eq!(doc.links("nav", "*"), vec!["menu", "home", "blog", "logo"]);
        assert!(doc.links("main", "a").is_empty());
        assert!(doc.links("missing", "a").is_empty());
    }

    #[test]
    fn test_class_selector() {
        let mut doc = sample();
        doc.add_class("blog", "item");
        assert_eq!(doc.links("nav", ".item"), vec!["blog"]);
    }

    #[test]
    fn test_child_inherits_offset() {
        let doc = sample();
        assert_eq!(doc.offset_top("home"), Some(120.0));
        assert_eq!(doc.offset_top("missing"), None);
    }

    #[test]
    fn test_child_of_missing_parent_ignored() {
        let mut doc = MemoryDocument::new();
        doc.child("nowhere", "orphan", "a");
        assert!(!doc.contains("orphan"));
    }

    #[test]
    fn test_class_mutation() {
        let mut doc = sample();
        assert!(doc.add_class("main", "nav-offset"));
        assert!(doc.add_class("main", "nav-offset"));
        assert_eq!(doc.classes("main"), vec!["nav-offset"]);
        assert!(doc.has_class("main", "nav-offset"));

        assert!(doc.remove_class("main", "nav-offset"));
        assert!(doc.remove_class("main", "nav-offset"));
        assert!(doc.classes("main").is_empty());
    }

    #[test]
    fn test_missing_element_is_noop() {
        let mut doc = sample();
        let before = doc.clone();
        assert!(!doc.add_class("ghost", "fixed"));
        assert!(!doc.remove_class("ghost", "fixed"));
        assert!(!doc.has_class("ghost", "fixed"));
        assert_eq!(doc, before);
    }
}
