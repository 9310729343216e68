//! API layer - HTTP handlers and routing
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Custom extractors
//! - Route definitions and CORS

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::{cors_layer, create_router};
pub use state::AppState;
