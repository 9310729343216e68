//! Unit of Work - scoped transactions over the connection pool.
//!
//! A unit of work begins a transaction, hands it to a closure, and then:
//! - commits when the closure returns `Ok`
//! - rolls back when the closure returns `Err`
//! - returns the connection to the pool on every exit path
//!
//! Dropping an uncommitted `DatabaseTransaction` (panic, cancelled future)
//! also rolls it back, so no path leaks an open transaction.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::errors::{AppError, AppResult};

/// Boxed future returned by a transactional closure.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Handle that runs closures inside a store transaction.
///
/// Cheap to clone: it only wraps the pooled connection handle.
#[derive(Clone)]
pub struct UnitOfWork {
    db: DatabaseConnection,
}

impl UnitOfWork {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pool handle for single statements that need no transaction.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error, and the
    /// closure's error is returned unchanged.
    pub async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        match f(&txn).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$txn:ident| $body:expr) => {
        $uow.transaction(|$txn| Box::pin(async move { $body })).await
    };
}
