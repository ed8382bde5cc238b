//! Terminal renderer: one bullet per row, then a count line.

use colored::Colorize;

use crate::output::OutputRenderer;
use crate::ui::Node;

/// Terminal output renderer with colored, flowing text.
///
/// Each child element of the root is one row; its text content is the
/// label.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, tree: &Node) -> String {
        let labels: Vec<String> = match tree {
            Node::Element(root) => root.child_elements().map(|el| el.text_content()).collect(),
            Node::Text(t) => vec![t.clone()],
        };

        if labels.is_empty() {
            return format!("{}\n", "  No users.".dimmed());
        }

        let mut output = String::new();
        for label in &labels {
            let shown = if label.is_empty() {
                "(no username)".dimmed().to_string()
            } else {
                label.bold().to_string()
            };
            output.push_str(&format!(" {} {}\n", "•".cyan(), shown));
        }

        output.push_str(&format!("{}\n", "───────────────".dimmed()));
        output.push_str(&format!(
            " {} {}\n",
            labels.len().to_string().bold(),
            if labels.len() == 1 { "user" } else { "users" },
        ));

        output
    }
}
