//! `stickynav simulate`: drive the scroll-spy against an in-memory page.
//!
//! The page is laid out from `[nav]`: the navigation element sits at
//! `--offset`, holds one `link-<section>` per configured section, and the
//! sections follow below it.

use super::SimulateArgs;
use crate::{
    config::NavConfig,
    log,
    spy::{Document, MemoryDocument, ScrollSpy, SpyOptions},
};
use anyhow::{Context, Result};

/// Vertical distance between generated sections.
const SECTION_SPACING: f64 = 400.0;

pub fn run_simulate(nav: &NavConfig, args: &SimulateArgs) -> Result<()> {
    for line in simulate(nav, args)? {
        println!("{line}");
    }
    Ok(())
}

/// Build the in-memory page for `nav`.
fn build_page(nav: &NavConfig, offset: f64) -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    doc.element(&nav.element, "nav", offset);

    let (tag, class) = link_shape(&nav.link_selector);
    for (i, section) in nav.sections.iter().enumerate() {
        let link = link_id(section);
        doc.child(&nav.element, &link, tag);
        if let Some(class) = class {
            doc.add_class(&link, class);
        }
        doc.element(
            section,
            "section",
            offset + SECTION_SPACING * (i as f64 + 1.0),
        );
    }
    doc
}

fn link_id(section: &str) -> String {
    format!("link-{section}")
}

/// Tag and optional class the generated links need to match `selector`.
fn link_shape(selector: &str) -> (&str, Option<&str>) {
    let selector = selector.trim();
    match selector.strip_prefix('.') {
        Some(class) => ("a", Some(class)),
        None if selector.is_empty() || selector == "*" => ("a", None),
        None => (selector, None),
    }
}

fn simulate(nav: &NavConfig, args: &SimulateArgs) -> Result<Vec<String>> {
    let mut doc = build_page(nav, args.offset);
    let mut spy = ScrollSpy::initialize(&mut doc, SpyOptions::from(nav))
        .context("failed to attach scroll-spy")?;
    log!("simulate"; "offset captured at {}px, {} link(s)", spy.offset(), spy.nav_links(&doc).len());

    let mut lines = Vec::new();
    for &y in &args.scroll {
        doc.set_scroll(y);
        let t = spy.on_scroll(&mut doc, y);
        let marker = if t.is_change() { "*" } else { " " };
        lines.push(format!("{marker} scroll {y:>8.1}px  {} -> {}", t.from, t.to));
    }

    for link in &args.click {
        spy.on_click(&mut doc, link)?;
        lines.push(format!("  click  {link}"));
    }

    lines.push(format!("state: {}", spy.state()));
    let mut ids = vec![nav.element.clone()];
    ids.extend(spy.nav_links(&doc));
    ids.extend(nav.sections.iter().cloned());
    for id in ids {
        let classes = doc.classes(&id);
        let shown = if classes.is_empty() {
            "-".to_string()
        } else {
            classes.join(" ")
        };
        lines.push(format!("  #{id}: {shown}"));
    }
    Ok(lines)
}
