//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `console` - Seed and list users from the terminal

pub mod args;

pub use args::{Cli, Commands};
