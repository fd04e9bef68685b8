pub mod config;
pub mod error;
pub mod parser;
pub mod renderer;
pub mod syntax;

pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use parser::{LinkReference, ReferenceMap, ReferenceResolver, parse, parse_with_references};
pub use syntax::{NodeId, NodeValue, Tree};

use config::LineEnding;

#[cfg(debug_assertions)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn detect_line_ending(input: &str) -> &'static str {
    // The first line break decides
    match input.find('\n') {
        Some(n) if n > 0 && input.as_bytes()[n - 1] == b'\r' => "\r\n",
        _ => "\n",
    }
}

/// Renders a CommonMark document to HTML.
///
/// # Examples
///
/// ```rust
/// let html = markee::to_html("# Hello *world*", None);
/// assert_eq!(html, "<h1>Hello <em>world</em></h1>\n");
/// ```
pub fn to_html(input: &str, config: Option<Config>) -> String {
    let config = config.unwrap_or_default();
    render(
        input,
        Some(Config {
            format: OutputFormat::Html,
            ..config
        }),
    )
}

/// Parses a CommonMark document and renders it in the configured output format.
///
/// Link references from the config's `[references]` table resolve
/// reference-style links. Output line endings follow `line_ending`; with
/// `auto` they follow the first line break of the input.
///
/// # Arguments
///
/// * `input` - The CommonMark document
/// * `config` - Optional configuration (defaults to default config)
pub fn render(input: &str, config: Option<Config>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let line_ending = match config.line_ending {
        Some(LineEnding::Crlf) => "\r\n",
        Some(LineEnding::Lf) => "\n",
        Some(LineEnding::Auto) | None => detect_line_ending(input),
    };

    let references = config.reference_map();
    let tree = parse_with_references(input, &references);
    log::debug!("Parsed {} nodes", tree.len());

    let out = match config.format {
        OutputFormat::Html => renderer::render_html(&tree, &config),
        OutputFormat::Tree => renderer::render_tree(&tree),
        OutputFormat::Json => renderer::render_json(&tree),
    };

    if line_ending == "\r\n" {
        out.replace('\n', "\r\n")
    } else {
        out
    }
}
