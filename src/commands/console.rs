//! Console command - the same calls as the HTTP API, run once from the terminal.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

use super::close_after;

/// Execute the console command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let service = UserManager::new(Arc::new(UserStore::new(db.get_connection())));

    let result = run(&service).await;
    if let Err(e) = &result {
        tracing::error!("Error in console run: {}", e);
    }

    close_after(result, &db).await
}

/// Seed the sample users, then list everything with both listing variants.
pub async fn run(service: &dyn UserService) -> AppResult<()> {
    let created = service.create_sample_users().await?;
    tracing::info!("Seeded {} new user(s)", created.len());

    service.list_all().await?;
    service.list_one_by_one().await?;

    Ok(())
}
