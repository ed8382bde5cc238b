//! Output renderers: HTML, JSON tree, terminal.

pub mod html;
pub mod json;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::ui::Node;

/// Trait for serializing a render tree to an output format.
pub trait OutputRenderer {
    /// Render the tree to a string. Rendering the same tree twice yields
    /// identical output.
    fn render(&self, tree: &Node) -> String;
}

/// Output format options.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Terminal,
}

impl OutputFormat {
    /// Render the tree using the renderer for this format.
    ///
    /// `indent` only affects HTML; zero selects compact output.
    pub fn render(&self, tree: &Node, indent: usize) -> String {
        match self {
            OutputFormat::Html => html::HtmlRenderer::new(indent).render(tree),
            OutputFormat::Json => json::JsonRenderer.render(tree),
            OutputFormat::Terminal => terminal::TerminalRenderer.render(tree),
        }
    }
}
