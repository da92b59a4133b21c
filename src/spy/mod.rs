//! Scroll-spy navigation state machine.
//!
//! Two states:
//!
//! ```text
//!            scroll_y > offset
//!   Normal ─────────────────────▶ Fixed
//!     ▲                              │
//!     └──────────────────────────────┘
//!            scroll_y <= offset
//! ```
//!
//! - entering **Fixed** adds `fixed_class` to the navigation element and
//!   `margin_class` to every configured section;
//! - entering **Normal** removes both and clears `active_class` from every
//!   navigation link.
//!
//! Every scroll event re-applies the entry actions of the resulting state,
//! so repeated events in the same state leave the document unchanged.
//! The navigation offset is captured once in [`ScrollSpy::initialize`] and
//! never recomputed; later layout changes are not tracked.

mod document;
mod error;

pub use document::{Document, MemoryDocument};
pub use error::SpyError;

use crate::{config::NavConfig, debug};
use serde::Serialize;
use std::fmt;

/// Navigation bar position state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpyState {
    /// In normal document flow.
    #[default]
    Normal,
    /// Pinned to the viewport.
    Fixed,
}

impl fmt::Display for SpyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Fixed => "fixed",
        })
    }
}

/// Result of one scroll evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: SpyState,
    pub to: SpyState,
}

impl Transition {
    #[inline]
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}

/// Element ids and class names the spy operates on.
///
/// Serialized with camelCase keys into the browser script's config object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpyOptions {
    pub element: String,
    pub sections: Vec<String>,
    pub fixed_class: String,
    pub margin_class: String,
    pub active_class: String,
    pub link_selector: String,
}

impl From<&NavConfig> for SpyOptions {
    fn from(nav: &NavConfig) -> Self {
        Self {
            element: nav.element.clone(),
            sections: nav.sections.clone(),
            fixed_class: nav.fixed_class.clone(),
            margin_class: nav.margin_class.clone(),
            active_class: nav.active_class.clone(),
            link_selector: nav.link_selector.clone(),
        }
    }
}

impl Default for SpyOptions {
    fn default() -> Self {
        Self::from(&NavConfig::default())
    }
}

/// Scroll-spy bound to one navigation element.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    options: SpyOptions,
    offset: f64,
    state: SpyState,
}

impl ScrollSpy {
    /// Capture the navigation offset and evaluate the current scroll position.
    ///
    /// Starts in [`SpyState::Normal`], then applies the document's current
    /// `scroll_y` immediately, so a page loaded mid-scroll starts pinned.
    ///
    /// # Errors
    ///
    /// [`SpyError::MissingNavigation`] if the navigation element is absent,
    /// [`SpyError::InvalidOffset`] if its offset is not a finite number.
    /// The document is left untouched in both cases.
    pub fn initialize<D: Document>(doc: &mut D, options: SpyOptions) -> Result<Self, SpyError> {
        let offset = doc
            .offset_top(&options.element)
            .ok_or_else(|| SpyError::MissingNavigation {
                id: options.element.clone(),
            })?;

        if !offset.is_finite() {
            return Err(SpyError::InvalidOffset {
                id: options.element.clone(),
                offset,
            });
        }

        debug!("spy"; "captured #{} offset at {}px", options.element, offset);

        let mut spy = Self {
            options,
            offset,
            state: SpyState::Normal,
        };
        let y = doc.scroll_y();
        spy.on_scroll(doc, y);
        Ok(spy)
    }

    /// Evaluate one scroll event at vertical offset `y`.
    pub fn on_scroll<D: Document>(&mut self, doc: &mut D, y: f64) -> Transition {
        let from = self.state;
        let to = if y > self.offset {
            self.enter_fixed(doc);
            SpyState::Fixed
        } else {
            self.enter_normal(doc);
            SpyState::Normal
        };
        self.state = to;

        let transition = Transition { from, to };
        if transition.is_change() {
            debug!("spy"; "{} -> {} at {}px", from, to, y);
        }
        transition
    }

    /// Mark `link` as the single active navigation link.
    ///
    /// # Errors
    ///
    /// [`SpyError::UnknownLink`] if `link` is not a navigation link; nothing
    /// is mutated in that case.
    pub fn on_click<D: Document>(&mut self, doc: &mut D, link: &str) -> Result<(), SpyError> {
        let links = self.nav_links(&*doc);
        if !links.iter().any(|l| l == link) {
            return Err(SpyError::UnknownLink {
                id: link.to_string(),
                nav: self.options.element.clone(),
            });
        }

        if doc.has_class(link, &self.options.active_class) {
            return Ok(());
        }

        self.clear_active(doc, &links);
        doc.add_class(link, &self.options.active_class);
        debug!("spy"; "#{} is now active", link);
        Ok(())
    }

    /// Captured navigation offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn state(&self) -> SpyState {
        self.state
    }

    /// Ids of the links inside the navigation element.
    pub fn nav_links<D: Document>(&self, doc: &D) -> Vec<String> {
        doc.links(&self.options.element, &self.options.link_selector)
    }

    fn enter_fixed<D: Document>(&self, doc: &mut D) {
        let opts = &self.options;
        doc.add_class(&opts.element, &opts.fixed_class);
        for section in &opts.sections {
            doc.add_class(section, &opts.margin_class);
        }
    }

    fn enter_normal<D: Document>(&self, doc: &mut D) {
        let opts = &self.options;
        doc.remove_class(&opts.element, &opts.fixed_class);
        for section in &opts.sections {
            doc.remove_class(section, &opts.margin_class);
        }
        let links = self.nav_links(&*doc);
        self.clear_active(doc, &links);
    }

    fn clear_active<D: Document>(&self, doc: &mut D, links: &[String]) {
        for link in links {
            doc.remove_class(link, &self.options.active_class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSET: f64 = 200.0;

    fn options() -> SpyOptions {
        SpyOptions {
            sections: vec!["about".into(), "posts".into(), "contact".into()],
            ..SpyOptions::default()
        }
    }

    fn page() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.element("nav", "nav", OFFSET)
            .child("nav", "link-about", "a")
            .child("nav", "link-posts", "a")
            .child("nav", "link-contact", "a")
            .element("about", "section", 260.0)
            .element("posts", "section", 900.0)
            .element("contact", "section", 1600.0)
            .element("footer", "footer", 2000.0)
            .child("footer", "link-footer", "a");
        doc
    }

    fn setup() -> (MemoryDocument, ScrollSpy) {
        let mut doc = page();
        let spy = ScrollSpy::initialize(&mut doc, options()).unwrap();
        (doc, spy)
    }

    fn assert_fixed(doc: &MemoryDocument) {
        assert!(doc.has_class("nav", "fixed"));
        for id in ["about", "posts", "contact"] {
            assert!(doc.has_class(id, "nav-offset"), "{id} missing margin class");
        }
    }

    fn assert_normal(doc: &MemoryDocument) {
        assert!(doc.with_class("fixed").is_empty());
        assert!(doc.with_class("nav-offset").is_empty());
        assert!(doc.with_class("active").is_empty());
    }

    #[test]
    fn test_initialize_captures_offset() {
        let (doc, spy) = setup();
        assert_eq!(spy.offset(), OFFSET);
        assert_eq!(spy.state(), SpyState::Normal);
        assert_normal(&doc);
    }

    #[test]
    fn test_initialize_mid_scroll_starts_fixed() {
        let mut doc = page();
        doc.set_scroll(450.0);
        let spy = ScrollSpy::initialize(&mut doc, options()).unwrap();
        assert_eq!(spy.state(), SpyState::Fixed);
        assert_fixed(&doc);
    }

    #[test]
    fn test_missing_navigation_fails_fast() {
        let mut doc = page();
        let opts = SpyOptions {
            element: "menu".into(),
            ..options()
        };
        let before = doc.clone();
        let err = ScrollSpy::initialize(&mut doc, opts).unwrap_err();
        assert_eq!(err, SpyError::MissingNavigation { id: "menu".into() });
        assert_eq!(doc, before);
    }

    #[test]
    fn test_non_finite_offset_rejected() {
        let mut doc = page();
        doc.set_offset("nav", f64::NAN);
        let err = ScrollSpy::initialize(&mut doc, options()).unwrap_err();
        assert!(matches!(err, SpyError::InvalidOffset { .. }));
    }

    #[test]
    fn test_scroll_scenario() {
        let (mut doc, mut spy) = setup();

        let t = spy.on_scroll(&mut doc, 150.0);
        assert_eq!(t.to, SpyState::Normal);
        assert!(!t.is_change());
        assert_normal(&doc);

        let t = spy.on_scroll(&mut doc, 250.0);
        assert_eq!((t.from, t.to), (SpyState::Normal, SpyState::Fixed));
        assert_fixed(&doc);

        spy.on_click(&mut doc, "link-posts").unwrap();
        assert!(doc.has_class("link-posts", "active"));

        let t = spy.on_scroll(&mut doc, 100.0);
        assert_eq!((t.from, t.to), (SpyState::Fixed, SpyState::Normal));
        assert_normal(&doc);
    }

    #[test]
    fn test_threshold_is_strict() {
        let (mut doc, mut spy) = setup();
        assert_eq!(spy.on_scroll(&mut doc, OFFSET).to, SpyState::Normal);
        assert_eq!(spy.on_scroll(&mut doc, OFFSET + 0.5).to, SpyState::Fixed);
        assert_eq!(spy.on_scroll(&mut doc, OFFSET).to, SpyState::Normal);
    }

    #[test]
    fn test_repeated_fixed_scroll_is_idempotent() {
        let (mut doc, mut spy) = setup();
        spy.on_scroll(&mut doc, 300.0);
        spy.on_click(&mut doc, "link-about").unwrap();
        let snapshot = doc.clone();

        let t = spy.on_scroll(&mut doc, 320.0);
        assert_eq!((t.from, t.to), (SpyState::Fixed, SpyState::Fixed));
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn test_repeated_normal_scroll_is_idempotent() {
        let (mut doc, mut spy) = setup();
        spy.on_scroll(&mut doc, 10.0);
        let snapshot = doc.clone();
        spy.on_scroll(&mut doc, 20.0);
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn test_fixed_keeps_active_link() {
        let (mut doc, mut spy) = setup();
        spy.on_click(&mut doc, "link-contact").unwrap();
        spy.on_scroll(&mut doc, 500.0);
        assert_eq!(doc.with_class("active"), vec!["link-contact"]);
    }

    #[test]
    fn test_click_moves_active_exclusively() {
        let (mut doc, mut spy) = setup();

        spy.on_click(&mut doc, "link-about").unwrap();
        assert_eq!(doc.with_class("active"), vec!["link-about"]);

        spy.on_click(&mut doc, "link-posts").unwrap();
        assert_eq!(doc.with_class("active"), vec!["link-posts"]);

        spy.on_click(&mut doc, "link-posts").unwrap();
        assert_eq!(doc.with_class("active"), vec!["link-posts"]);
    }

    #[test]
    fn test_click_outside_nav_rejected() {
        let (mut doc, mut spy) = setup();
        spy.on_click(&mut doc, "link-about").unwrap();
        let before = doc.clone();

        let err = spy.on_click(&mut doc, "link-footer").unwrap_err();
        assert!(matches!(err, SpyError::UnknownLink { .. }));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut doc = page();
        let opts = SpyOptions {
            sections: vec!["about".into(), "ghost".into()],
            ..options()
        };
        let mut spy = ScrollSpy::initialize(&mut doc, opts).unwrap();

        spy.on_scroll(&mut doc, 900.0);
        assert_eq!(doc.with_class("nav-offset"), vec!["about"]);
        assert!(!doc.contains("ghost"));

        spy.on_scroll(&mut doc, 0.0);
        assert!(doc.with_class("nav-offset").is_empty());
    }

    #[test]
    fn test_offset_is_never_recomputed() {
        let (mut doc, mut spy) = setup();
        doc.set_offset("nav", 1000.0);

        assert_eq!(spy.on_scroll(&mut doc, 500.0).to, SpyState::Fixed);
        assert_eq!(spy.offset(), OFFSET);
    }

    #[test]
    fn test_state_matches_offset_for_any_scroll() {
        let (mut doc, mut spy) = setup();
        for y in [0.0, 199.0, 200.0, 201.0, 5000.0, 150.0, -40.0, 200.1] {
            spy.on_scroll(&mut doc, y);
            if y > OFFSET {
                assert_fixed(&doc);
            } else {
                assert_normal(&doc);
            }
        }
    }

    #[test]
    fn test_options_from_nav_config() {
        let nav = NavConfig {
            element: "menu".into(),
            sections: vec!["a".into()],
            ..NavConfig::default()
        };
        let opts = SpyOptions::from(&nav);
        assert_eq!(opts.element, "menu");
        assert_eq!(opts.sections, vec!["a"]);
        assert_eq!(opts.active_class, "active");
    }
}
