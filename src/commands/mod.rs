//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod console;
pub mod serve;

use crate::errors::AppResult;
use crate::infra::Database;

/// Close the pool once a command has finished.
///
/// The command's own failure wins; a close failure is only returned when the
/// command succeeded.
async fn close_after(result: AppResult<()>, db: &Database) -> AppResult<()> {
    let closed = db.close().await;
    match (result, closed) {
        (Err(e), Err(close_err)) => {
            tracing::error!("Failed to close database pool: {}", close_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), closed) => closed.map_err(Into::into),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use sea_orm::ConnectOptions;

    async fn memory_database() -> Database {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::open(options).await.unwrap()
    }

    #[tokio::test]
    async fn command_error_is_kept_after_close() {
        let db = memory_database().await;

        let result = close_after(Err(AppError::internal("run failed")), &db).await;

        assert!(matches!(result, Err(AppError::Internal(msg)) if msg == "run failed"));
    }

    #[tokio::test]
    async fn successful_command_closes_the_pool() {
        let db = memory_database().await;

        assert!(close_after(Ok(()), &db).await.is_ok());
        assert!(db.ping().await.is_err());
    }
}
