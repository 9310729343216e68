//! userdesk - CRUD on a single `User` entity over SeaORM
//!
//! The same service layer is exposed two ways: a one-shot console run and a
//! REST API built with Axum.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Config file, environment and constants
//! - **domain**: The `User` record
//! - **services**: Use cases over the repository
//! - **infra**: Connection pool, unit of work, repository
//! - **api**: HTTP handlers and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # DB_USERNAME and DB_PASSWORD must be set
//! cargo run -- serve
//! cargo run -- console
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::User;
pub use errors::{AppError, AppResult};
pub use infra::Database;
