//! User repository trait

use async_trait::async_trait;

use super::entity::{NewUser, User};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository trait for user storage
///
/// Implementations report a duplicate email as `DomainError::Conflict`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns the identifier
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Get a user by email (the external lookup key)
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Set a new display name; returns whether a row was changed
    async fn update_username(&self, email: &str, username: &str) -> Result<bool, DomainError>;

    /// Delete the user and everything it owns; returns whether a row was removed
    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
