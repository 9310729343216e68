//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// "Not found" is an empty result, never an error. Store failures are logged
/// here and returned as `AppError::Database`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether a user with exactly this email is stored
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Insert when `user.id` is `None`, otherwise replace every field of that row
    async fn save(&self, user: User) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// List all users in store order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Delete user by ID; a missing ID is a no-op
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    uow: UnitOfWork,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            uow: UnitOfWork::new(db),
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.uow.connection()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .count(self.db())
            .await
            .inspect_err(|e| tracing::error!("Error counting users with email {}: {}", email, e))?;

        Ok(count > 0)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let is_update = user.is_persisted();
        let active = ActiveModel::from(user);

        let model = with_transaction!(self.uow, |txn| {
            let model = if is_update {
                active.update(txn).await?
            } else {
                active.insert(txn).await?
            };
            Ok::<_, AppError>(model)
        })
        .inspect_err(|e| tracing::error!("Error saving user: {}", e))?;

        let saved = User::from(model);
        tracing::info!("User saved successfully: {}", saved);
        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.db())
            .await
            .inspect_err(|e| tracing::error!("Error retrieving user with ID {}: {}", id, e))?
            .map(User::from);

        match &result {
            Some(user) => tracing::info!("Retrieved user by ID {}: {}", id, user),
            None => tracing::warn!("No user found with ID: {}", id),
        }

        Ok(result)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(self.db())
            .await
            .inspect_err(|e| tracing::error!("Error retrieving all users: {}", e))?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let deleted = with_transaction!(self.uow, |txn| {
            match UserEntity::find_by_id(id).one(txn).await? {
                Some(model) => {
                    let user = User::from(model.clone());
                    model.delete(txn).await?;
                    Ok::<_, AppError>(Some(user))
                }
                None => Ok(None),
            }
        })
        .inspect_err(|e| tracing::error!("Error deleting user with ID {}: {}", id, e))?;

        if let Some(user) = deleted {
            tracing::info!("User deleted successfully: {}", user);
        }

        Ok(())
    }
}
