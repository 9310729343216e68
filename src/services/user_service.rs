//! User service - Handles user-related business logic.
//!
//! Orchestrates the repository: email pre-checks, sample seeding and the two
//! listing variants.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::SAMPLE_USERS;
use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID; `None` when absent
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert or fully replace a user (see `UserRepository::save`)
    async fn save(&self, user: User) -> AppResult<User>;

    /// Delete user by ID; a missing ID is a no-op
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;

    /// Check whether the email is already taken
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Insert a new user unless its email is already taken.
    ///
    /// The check and the insert are separate statements, so two concurrent
    /// registrations of one email can both succeed.
    async fn register_user(&self, user: User) -> AppResult<User>;

    /// Insert the fixed sample users whose emails are not stored yet.
    ///
    /// Returns the users created by this call.
    async fn create_sample_users(&self) -> AppResult<Vec<User>>;

    /// Fetch every user in one query and log each one
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// Same result as `list_all`, walked and logged one position at a time
    async fn list_one_by_one(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn save(&self, user: User) -> AppResult<User> {
        self.repo.save(user).await
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        self.repo.delete_by_id(id).await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.repo.exists_by_email(email).await
    }

    async fn register_user(&self, user: User) -> AppResult<User> {
        if self.repo.exists_by_email(&user.email).await? {
            tracing::info!("Rejecting user with taken email {}", user.email);
            return Err(AppError::duplicate_email(user.email));
        }

        self.repo.save(User { id: None, ..user }).await
    }

    async fn create_sample_users(&self) -> AppResult<Vec<User>> {
        let mut created = Vec::new();

        for &(first_name, last_name, email) in SAMPLE_USERS {
            if self.repo.exists_by_email(email).await? {
                tracing::info!("User with email {} already exists, skipping creation", email);
                continue;
            }

            let user = self.repo.save(User::new(first_name, last_name, email)).await?;
            tracing::info!("Created new user: {}", user);
            created.push(user);
        }

        Ok(created)
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        let users = self.repo.find_all().await?;
        for user in &users {
            tracing::info!("Retrieved user: {}", user);
        }
        Ok(users)
    }

    async fn list_one_by_one(&self) -> AppResult<Vec<User>> {
        let users = self.repo.find_all().await?;
        tracing::info!("Total number of users to retrieve: {}", users.len());

        for (position, user) in users.iter().enumerate() {
            tracing::info!("Retrieved user #{}: {}", position + 1, user);
        }

        tracing::info!("Completed retrieving all users one by one");
        Ok(users)
    }
}
