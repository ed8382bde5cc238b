//! JSON tree renderer.
//!
//! Outputs the tree in the shape used by component test renderers:
//! `{"type": tag, "props": {...}, "children": [...] | null}` with text
//! leaves as bare strings.

use serde_json::{Map, Value, json};

use crate::output::OutputRenderer;
use crate::ui::Node;

/// JSON output renderer.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Convert a tree to a JSON value without serializing it.
    pub fn to_value(&self, tree: &Node) -> Value {
        match tree {
            Node::Text(t) => Value::String(t.clone()),
            Node::Element(el) => {
                let props: Map<String, Value> = el
                    .attrs
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect();
                let children = if el.children.is_empty() {
                    Value::Null
                } else {
                    Value::Array(el.children.iter().map(|c| self.to_value(c)).collect())
                };
                json!({
                    "type": el.tag,
                    "props": props,
                    "children": children,
                })
            }
        }
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, tree: &Node) -> String {
        // A `Value` with string keys always serializes.
        let mut output = serde_json::to_string_pretty(&self.to_value(tree))
            .expect("serializing a JSON value cannot fail");
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Element;

    #[test]
    fn render_json_tree() {
        let tree: Node = Element::new("div")
            .child(Element::new("h4").attr("class", "card").text("dash"))
            .into();
        let output = JsonRenderer.render(&tree);
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["type"], "div");
        assert_eq!(parsed["props"], json!({}));
        assert_eq!(parsed["children"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["children"][0]["props"]["class"], "card");
        assert_eq!(parsed["children"][0]["children"], json!(["dash"]));
    }

    #[test]
    fn render_empty_children_as_null() {
        let tree: Node = Element::new("div").into();
        let parsed: Value = serde_json::from_str(&JsonRenderer.render(&tree)).unwrap();
        assert!(parsed["children"].is_null());
    }

    #[test]
    fn props_keep_attribute_order() {
        let tree: Node = Element::new("h4").attr("id", "x").attr("class", "y").into();
        let output = JsonRenderer.render(&tree);
        let id = output.find("\"id\"").unwrap();
        let class = output.find("\"class\"").unwrap();
        assert!(id < class);
    }
}
