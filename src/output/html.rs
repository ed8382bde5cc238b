//! HTML renderer.
//!
//! Pretty mode puts every element on its own line and inlines elements
//! whose children are all text. Compact mode (`indent == 0`) emits no
//! whitespace at all.

use crate::constants::MAX_INDENT;
use crate::output::OutputRenderer;
use crate::ui::{Element, Node};

/// HTML output renderer.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer {
    indent: usize,
}

impl HtmlRenderer {
    /// Widths above [`MAX_INDENT`] are clamped.
    pub fn new(indent: usize) -> Self {
        Self {
            indent: indent.min(MAX_INDENT),
        }
    }

    pub fn compact() -> Self {
        Self { indent: 0 }
    }

    fn write_pretty(&self, node: &Node, depth: usize, out: &mut String) {
        let pad = " ".repeat(self.indent.saturating_mul(depth));
        match node {
            Node::Text(t) => {
                out.push_str(&pad);
                out.push_str(&escape(t));
                out.push('\n');
            }
            Node::Element(el) if el.is_text_only() => {
                out.push_str(&pad);
                write_compact(node, out);
                out.push('\n');
            }
            Node::Element(el) => {
                out.push_str(&pad);
                open_tag(el, out);
                out.push('\n');
                for child in &el.children {
                    self.write_pretty(child, depth + 1, out);
                }
                out.push_str(&pad);
                close_tag(el, out);
                out.push('\n');
            }
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl OutputRenderer for HtmlRenderer {
    fn render(&self, tree: &Node) -> String {
        let mut out = String::new();
        if self.indent == 0 {
            write_compact(tree, &mut out);
        } else {
            self.write_pretty(tree, 0, &mut out);
        }
        out
    }
}

fn write_compact(node: &Node, out: &mut String) {
    match node {
        Node::Text(t) => out.push_str(&escape(t)),
        Node::Element(el) => {
            open_tag(el, out);
            for child in &el.children {
                write_compact(child, out);
            }
            close_tag(el, out);
        }
    }
}

fn open_tag(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push('>');
}

fn close_tag(el: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

/// Escape text for use in element content or a quoted attribute value.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
