//! Post repository trait

use async_trait::async_trait;

use super::entity::{NewPost, Post, PostId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository trait for post storage
///
/// Mutations are conditional on both the post identifier and the owner, so a
/// row that disappeared or changed hands after an authorization read is
/// reported as `false` instead of being silently overwritten.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post; an unknown owner is reported as `DomainError::NotFound`
    async fn create(&self, post: NewPost) -> Result<Post, DomainError>;

    /// Get a post by identifier
    async fn get(&self, id: PostId) -> Result<Option<Post>, DomainError>;

    /// List every post in store order
    async fn list(&self) -> Result<Vec<Post>, DomainError>;

    /// Replace title and content of a post owned by `owner_id`
    async fn update_owned(
        &self,
        id: PostId,
        owner_id: UserId,
        title: &str,
        content: &str,
    ) -> Result<bool, DomainError>;

    /// Delete a post owned by `owner_id`
    async fn delete_owned(&self, id: PostId, owner_id: UserId) -> Result<bool, DomainError>;
}
