//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Configuration sources
// =============================================================================

/// Config file read when no `--config` path is given
pub const DEFAULT_CONFIG_PATH: &str = "userdesk.toml";

/// Environment variable holding the database user (required)
pub const ENV_DB_USERNAME: &str = "DB_USERNAME";

/// Environment variable holding the database password (required)
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";

/// Environment override for the credential-free database URL
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Environment override for the bind host
pub const ENV_SERVER_HOST: &str = "SERVER_HOST";

/// Environment override for the bind port
pub const ENV_SERVER_PORT: &str = "SERVER_PORT";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Browser front end allowed by CORS
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

// =============================================================================
// Database
// =============================================================================

/// Default database location, without credentials
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/demo";

/// Upper bound of pooled connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connections kept open while idle
pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;

/// Seconds to wait for a new connection
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 8;

// =============================================================================
// Seed data
// =============================================================================

/// Users created by the seed operation as (first name, last name, email)
pub const SAMPLE_USERS: &[(&str, &str, &str)] = &[
    ("John", "Doe", "john.doe@example.com"),
    ("Jane", "Smith", "jane.smith@example.com"),
];
