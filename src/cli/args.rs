//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// userdesk - user CRUD over a relational store
#[derive(Parser, Debug)]
#[command(name = "userdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ./userdesk.toml when present)
    #[arg(short, long, global = true, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Seed the sample users and print every user, then exit
    Console,
}

/// Arguments for the serve command; unset values come from the configuration
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}
