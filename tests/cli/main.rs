//! CLI integration tests for markee.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (render, parse)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations
//! - Config discovery and error handling

mod common;
mod parse;
mod render;
