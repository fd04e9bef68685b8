use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markee")]
#[command(author, version)]
#[command(about = "A CommonMark parser and HTML renderer")]
#[command(
    long_about = "Markee parses CommonMark documents into a document tree and renders them \
    as HTML. The tree can also be printed for inspection, either as an indented dump or as JSON."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to HTML on stdout
    markee render document.md

    # Render from stdin into a file
    cat document.md | markee render -o document.html

    # Print the document tree
    markee parse document.md

    # Use custom config
    markee render --config custom.toml document.md

CONFIGURATION:

Markee looks for configuration files in this order:
  1. Explicit --config path
  2. markee.toml or .markee.toml in current/parent directories
  3. ~/.config/markee/config.toml (XDG)
  4. Built-in defaults

Example .markee.toml:

    format = \"html\"
    line_ending = \"auto\"

    [extensions]
    hard_line_breaks = false

    [references]
    rust = \"https://www.rust-lang.org\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, markee will \
        search for .markee.toml or markee.toml in the input's directory and its parents, \
        then fall back to ~/.config/markee/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a CommonMark document
    #[command(
        long_about = "Render a CommonMark document. By default, writes HTML to stdout. The \
        output format comes from the configuration file unless --to is given."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Render to stdout
    markee render document.md

    # Render from stdin
    echo '# Heading' | markee render

    # Write the tree as JSON to a file
    markee render --to json -o tree.json document.md

OUTPUT FORMATS:

  html   CommonMark HTML (default)
  tree   Indented dump of the document tree, one node per line
  json   The document tree as JSON")]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Output file (stdout if not provided)
        #[arg(short, long)]
        #[arg(help = "Output file path")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short = 't', long = "to", value_name = "FORMAT")]
        #[arg(help = "Output format: html, tree or json")]
        to: Option<String>,
    },
    /// Parse and display the document tree for debugging
    #[command(
        long_about = "Parse a document and display its document tree, for debugging and \
        understanding how markee interprets the document structure."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file and show the tree
    markee parse document.md

    # Parse from stdin
    echo '# Heading' | markee parse

The tree shows every node with its attributes, including:
  - Container blocks (block quotes, lists, list items)
  - Leaf blocks (headings, paragraphs, code blocks, thematic breaks)
  - Inline elements (emphasis, code spans, links, images, breaks)")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
