//! Shared helpers for integration tests: an in-memory SQLite store.

#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::ConnectOptions;

use userdesk::infra::{Database, UserStore};
use userdesk::services::UserManager;

/// Fresh in-memory store with the `users` table created.
///
/// One pooled connection: every connection to `sqlite::memory:` is its own database.
pub async fn memory_database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::open(options)
        .await
        .expect("in-memory database should open")
}

pub fn store(db: &Database) -> UserStore {
    UserStore::new(db.get_connection())
}

pub fn manager(db: &Database) -> UserManager {
    UserManager::new(Arc::new(store(db)))
}
