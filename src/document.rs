//! Query-only view over a rendered page snapshot.
//!
//! Extractors never touch the browser session directly; they receive a
//! [`Document`] and query it. Every lookup is tolerant of absent nodes —
//! a selector that matches nothing (or fails to parse) yields `None` or an
//! empty list, never an error.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Immutable snapshot of one rendered page's structure at fetch time.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw page HTML into a queryable snapshot.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// First element matching `selector`, in document order.
    pub fn find_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let sel = parse_selector(selector)?;
        self.html.select(&sel).next()
    }

    /// All elements matching `selector`, in document order.
    pub fn find_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match parse_selector(selector) {
            Some(sel) => self.html.select(&sel).collect(),
            None => Vec::new(),
        }
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(e) => {
            warn!("Invalid CSS selector {:?}: {}", selector, e);
            None
        }
    }
}

/// First descendant of `el` matching `selector` (never `el` itself).
pub fn find_first_in<'a>(el: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let sel = parse_selector(selector)?;
    el.select(&sel).find(|m| m.id() != el.id())
}

/// All descendants of `el` matching `selector`, in document order.
pub fn find_all_in<'a>(el: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    match parse_selector(selector) {
        Some(sel) => el.select(&sel).filter(|m| m.id() != el.id()).collect(),
        None => Vec::new(),
    }
}

/// Next element sibling of `el`, skipping text/comment nodes.
pub fn next_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Concatenated text of `el` and its descendants, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Attribute value of `el`, if set.
pub fn attr_of(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(|v| v.to_string())
}
