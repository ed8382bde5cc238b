//! Structural queries over a render tree.

use super::{Element, Node};

/// All elements with the given tag, in document order (pre-order,
/// including the root itself).
pub fn find_all<'a>(node: &'a Node, tag: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    walk(node, &mut |el| {
        if el.tag == tag {
            found.push(el);
        }
    });
    found
}

/// The first element with the given tag, in document order.
pub fn find_first<'a>(node: &'a Node, tag: &str) -> Option<&'a Element> {
    find_all(node, tag).into_iter().next()
}

/// Text content of every element with the given tag, in document order.
pub fn texts_of(node: &Node, tag: &str) -> Vec<String> {
    find_all(node, tag)
        .into_iter()
        .map(Element::text_content)
        .collect()
}

/// Total number of elements in the tree.
pub fn element_count(node: &Node) -> usize {
    let mut count = 0;
    walk(node, &mut |_| count += 1);
    count
}

fn walk<'a>(node: &'a Node, visit: &mut impl FnMut(&'a Element)) {
    if let Node::Element(el) = node {
        visit(el);
        for child in &el.children {
            walk(child, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Element::new("div")
            .child(Element::new("h4").text("dash"))
            .child(
                Element::new("section")
                    .child(Element::new("h4").text("nested")),
            )
            .child(Element::new("h4").text("lily"))
            .into()
    }

    #[test]
    fn find_all_is_document_order() {
        let tree = sample();
        let texts: Vec<_> = find_all(&tree, "h4")
            .into_iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(texts, vec!["dash", "nested", "lily"]);
    }

    #[test]
    fn find_all_includes_root() {
        let tree = sample();
        assert_eq!(find_all(&tree, "div").len(), 1);
    }

    #[test]
    fn find_first_and_missing_tag() {
        let tree = sample();
        assert_eq!(find_first(&tree, "h4").unwrap().text_content(), "dash");
        assert!(find_first(&tree, "table").is_none());
        assert!(find_all(&tree, "table").is_empty());
    }

    #[test]
    fn texts_of_collects_labels() {
        assert_eq!(texts_of(&sample(), "section"), vec!["nested"]);
    }

    #[test]
    fn text_root_has_no_elements() {
        let leaf = Node::text("plain");
        assert_eq!(element_count(&leaf), 0);
        assert_eq!(element_count(&sample()), 5);
    }
}
