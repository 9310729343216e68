//! Database connection pool and initialization.

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Schema,
    Statement,
};

use crate::config::Config;
use crate::infra::repositories::entities::UserEntity;

/// Database wrapper for connection management.
///
/// Wraps the SeaORM pool; clones share the same pool.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the pool described by the configuration and make sure the schema exists.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .sqlx_logging(config.sqlx_logging);

        let db = Self::open(options).await?;
        tracing::info!(
            max_connections = config.max_connections,
            "Database connected and schema ensured"
        );
        Ok(db)
    }

    /// Open a pool from explicit options and make sure the schema exists.
    pub async fn open(options: impl Into<ConnectOptions>) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(options).await?;
        let db = Self { connection };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Create the `users` table from the entity definition when it is missing.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let mut statement = Schema::new(backend).create_table_from_entity(UserEntity);
        statement.if_not_exists();

        self.connection.execute(backend.build(&statement)).await?;
        tracing::debug!("users table ensured");
        Ok(())
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the pool. Every clone of this handle stops working afterwards.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.connection.clone().close().await?;
        tracing::info!("Database connection pool closed");
        Ok(())
    }
}
