//! Ownership guard for post mutations

use std::sync::Arc;

use tracing::debug;

use crate::domain::post::{Post, PostId, PostRepository};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;

/// Resolves a requester and a post, and checks the requester owns the post
///
/// Read-only: the guard never mutates either store.
#[derive(Debug)]
pub struct OwnershipGuard<P: PostRepository + ?Sized, U: UserRepository + ?Sized> {
    posts: Arc<P>,
    users: Arc<U>,
}

impl<P, U> Clone for OwnershipGuard<P, U>
where
    P: PostRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            posts: Arc::clone(&self.posts),
            users: Arc::clone(&self.users),
        }
    }
}

impl<P, U> OwnershipGuard<P, U>
where
    P: PostRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    pub fn new(posts: Arc<P>, users: Arc<U>) -> Self {
        Self { posts, users }
    }

    /// Return the post if `requester_email` owns it
    pub async fn authorize(
        &self,
        post_id: PostId,
        requester_email: &str,
    ) -> Result<Post, DomainError> {
        let requester = self
            .users
            .get_by_email(requester_email)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", requester_email)))?;

        let post = self
            .posts
            .get(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Post {} not found", post_id)))?;

        if !requester.owns(post.owner_id()) {
            debug!(post_id = %post_id, user_id = %requester.id(), "Ownership check failed");
            return Err(DomainError::forbidden("user does not own this resource"));
        }

        Ok(post)
    }
}
