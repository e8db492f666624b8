//! HTML to readable text.
//!
//! Emits every non-empty text node of the document, stripped, one per line.
//! Each link collapses to a single line holding its whole text, optionally
//! highlighted in blue.

use scraper::node::Node;
use scraper::{ElementRef, Html};

/// ANSI foreground blue.
pub const LINK_START: &str = "\x1b[34m";
/// ANSI default foreground.
pub const LINK_END: &str = "\x1b[39m";

/// Elements whose text is never shown.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap link text in [`LINK_START`] / [`LINK_END`].
    pub highlight_links: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            highlight_links: true,
        }
    }
}

/// Converts an HTML document to newline-separated text.
pub fn html_to_text(html: &str, opts: &RenderOptions) -> String {
    let doc = Html::parse_document(html);
    let mut lines = Vec::new();
    collect_lines(doc.root_element(), opts, &mut lines);
    lines.join("\n")
}

fn collect_lines(element: ElementRef<'_>, opts: &RenderOptions, lines: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    lines.push(t.to_string());
                }
            }
            Node::Element(el) => {
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                let name = el.name();
                if HIDDEN_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "a" {
                    push_link(child_el, opts, lines);
                } else {
                    collect_lines(child_el, opts, lines);
                }
            }
            _ => {}
        }
    }
}

fn push_link(link: ElementRef<'_>, opts: &RenderOptions, lines: &mut Vec<String>) {
    let text = link.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    if opts.highlight_links {
        lines.push(format!("{LINK_START}{text}{LINK_END}"));
    } else {
        lines.push(text.to_string());
    }
}
