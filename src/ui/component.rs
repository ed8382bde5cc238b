//! Components and shallow rendering.
//!
//! A component is a pure function from its props to a render tree. A
//! shallow render keeps only that immediate output and offers structural
//! queries on it, the way a test would inspect one component in isolation.

use super::query;
use super::{Element, Node};

/// A presentational component.
pub trait Component {
    /// Produce the component's output tree. Must not have side effects.
    fn render(&self) -> Node;
}

/// Render a component once and wrap the immediate output for inspection.
pub fn shallow<C: Component + ?Sized>(component: &C) -> Shallow {
    Shallow {
        root: component.render(),
    }
}

/// Immediate output of a single component render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shallow {
    root: Node,
}

impl Shallow {
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Elements with the given tag, in document order.
    pub fn find(&self, tag: &str) -> Found<'_> {
        Found {
            elements: query::find_all(&self.root, tag),
        }
    }
}

/// Result of a [`Shallow::find`] query.
#[derive(Debug, Clone)]
pub struct Found<'a> {
    elements: Vec<&'a Element>,
}

impl<'a> Found<'a> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&'a Element> {
        self.elements.get(index).copied()
    }

    /// Text content of each match.
    pub fn texts(&self) -> Vec<String> {
        self.elements.iter().map(|el| el.text_content()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Element> + '_ {
        self.elements.iter().copied()
    }
}
