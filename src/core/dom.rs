// src/core/dom.rs
//
// Thin tree-query layer over `scraper`. The parsing specs talk to this
// interface (find_first / find_all / closest / text / attr) and never to the
// library's own object model.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(content: &str) -> Self {
        Self { html: Html::parse_document(content) }
    }

    pub fn find_first(&self, selector: &str) -> Option<Node<'_>> {
        let sel = parse_selector(selector)?;
        self.html.select(&sel).next().map(Node::new)
    }

    pub fn find_all(&self, selector: &str) -> Vec<Node<'_>> {
        match parse_selector(selector) {
            Some(sel) => self.html.select(&sel).map(Node::new).collect(),
            None => Vec::new(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(el: ElementRef<'a>) -> Self {
        Self { el }
    }

    pub fn find_first(&self, selector: &str) -> Option<Node<'a>> {
        let sel = parse_selector(selector)?;
        self.el.select(&sel).next().map(Node::new)
    }

    pub fn find_all(&self, selector: &str) -> Vec<Node<'a>> {
        match parse_selector(selector) {
            Some(sel) => self.el.select(&sel).map(Node::new).collect(),
            None => Vec::new(),
        }
    }

    /// Nearest ancestor matching `selector`; the node itself doesn't count.
    pub fn closest(&self, selector: &str) -> Option<Node<'a>> {
        let sel = parse_selector(selector)?;
        self.el
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| sel.matches(el))
            .map(Node::new)
    }

    /// Concatenated text content, whitespace-collapsed.
    pub fn text(&self) -> String {
        normalize_ws(&self.el.text().collect::<Vec<_>>().join(" "))
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.el.value().attr(name)
    }
}

// Selectors here are fixed literals; a malformed one reads as "no match"
// rather than an error, matching the best-effort parsing policy.
fn parse_selector(s: &str) -> Option<Selector> {
    Selector::parse(s).ok()
}
