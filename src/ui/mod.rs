//! Render tree produced by components.
//!
//! A tree is made of [`Element`]s and text leaves. It is plain data: every
//! output format (HTML, JSON, terminal) is derived from it, and structural
//! assertions run directly against it.

pub mod component;
pub mod query;

use indexmap::IndexMap;

pub use component::{Component, Shallow, shallow};

/// A node in the render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// The element behind this node, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// A host element: tag, attributes in insertion order, and children.
///
/// The `key` identifies a row among its siblings. It is never emitted by
/// the output renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub key: Option<String>,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            key: None,
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. Setting the same name twice keeps the first
    /// position and the last value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the `class` attribute, skipping empty class lists.
    pub fn class(self, class: &str) -> Self {
        if class.trim().is_empty() {
            self
        } else {
            self.attr("class", class.trim())
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text leaf. Empty text still produces a leaf so that an empty
    /// label remains visible in the tree.
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::text(value))
    }

    /// Child nodes that are elements, in order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// `true` when every child is a text leaf (including no children).
    pub fn is_text_only(&self) -> bool {
        self.children.iter().all(|c| matches!(c, Node::Text(_)))
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}
