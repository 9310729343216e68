//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database pool, used for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the repository and service on top of the pool.
    pub fn from_database(database: Arc<Database>) -> Self {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(user_repo));
        Self::new(user_service, database)
    }

    /// Create new application state with manually injected services.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
