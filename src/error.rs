//! Errors from the I/O and configuration layers. Parsing and rendering
//! themselves never fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input could not be read or output could not be written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O on stdin or stdout.
    #[error("IO error: {0}")]
    Stdio(#[from] std::io::Error),

    /// A configuration file that does not parse.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("unsupported output format '{0}' (expected html, tree or json)")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
