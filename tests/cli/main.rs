//! CLI integration tests for mdblocks.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (tokens, parse, render)
//! - Stdin/stdout handling
//! - Exit codes and diagnostics
//! - Config discovery

mod common;
mod parse;
mod render;
mod tokens;
