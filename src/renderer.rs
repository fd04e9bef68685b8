//! Output backends for a parsed document tree.

pub mod html;
pub mod json;
pub mod tree_dump;

pub use html::{HtmlRenderer, escape_href, escape_html};
pub use json::to_json_value;
pub use tree_dump::TreeDump;

use crate::config::Config;
use crate::syntax::Tree;

/// Renders `tree` as CommonMark HTML.
pub fn render_html(tree: &Tree, config: &Config) -> String {
    HtmlRenderer::new(&config.extensions).render(tree)
}

/// Renders `tree` as an indented dump, one node per line.
pub fn render_tree(tree: &Tree) -> String {
    TreeDump::default().render(tree)
}

/// Renders `tree` as pretty-printed JSON.
pub fn render_json(tree: &Tree) -> String {
    let mut out = format!("{:#}", to_json_value(tree));
    out.push('\n');
    out
}
