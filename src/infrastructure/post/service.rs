//! Post service - business logic for posts

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::post::{validate_content, validate_title, NewPost, Post, PostId, PostRepository};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;

use super::ownership::OwnershipGuard;

/// Request to create a new post
#[derive(Debug, Clone)]
pub struct CreatePostRequest {
    pub author_email: String,
    pub title: String,
    pub content: String,
}

/// Request to replace a post's title and content
#[derive(Debug, Clone)]
pub struct UpdatePostRequest {
    pub post_id: PostId,
    pub requester_email: String,
    pub title: String,
    pub content: String,
}

/// Request to delete a post
#[derive(Debug, Clone)]
pub struct DeletePostRequest {
    pub post_id: PostId,
    pub requester_email: String,
}

/// Service for managing posts
#[derive(Debug)]
pub struct PostService<P: PostRepository + ?Sized, U: UserRepository + ?Sized> {
    posts: Arc<P>,
    users: Arc<U>,
    guard: OwnershipGuard<P, U>,
}

impl<P, U> PostService<P, U>
where
    P: PostRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    /// Create a new post service
    pub fn new(posts: Arc<P>, users: Arc<U>) -> Self {
        let guard = OwnershipGuard::new(Arc::clone(&posts), Arc::clone(&users));
        Self {
            posts,
            users,
            guard,
        }
    }

    /// Create a post owned by the author
    #[instrument(skip(self, request), fields(author = %request.author_email))]
    pub async fn create(&self, request: CreatePostRequest) -> Result<Post, DomainError> {
        validate_title(&request.title).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_content(&request.content).map_err(|e| DomainError::validation(e.to_string()))?;

        let author = self
            .users
            .get_by_email(&request.author_email)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("User '{}' not found", request.author_email))
            })?;

        let post = self
            .posts
            .create(NewPost::new(author.id(), request.title, request.content))
            .await?;

        info!(post_id = %post.id(), "Created post");
        Ok(post)
    }

    /// Get a post by identifier
    #[instrument(skip(self))]
    pub async fn read(&self, id: PostId) -> Result<Post, DomainError> {
        self.posts
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Post {} not found", id)))
    }

    /// List every post
    #[instrument(skip(self))]
    pub async fn read_all(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.list().await?;
        debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// Replace title and content; only the owner may do this
    #[instrument(skip(self, request), fields(post_id = %request.post_id, requester = %request.requester_email))]
    pub async fn update(&self, request: UpdatePostRequest) -> Result<(), DomainError> {
        validate_title(&request.title).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_content(&request.content).map_err(|e| DomainError::validation(e.to_string()))?;

        let post = self
            .guard
            .authorize(request.post_id, &request.requester_email)
            .await?;

        let updated = self
            .posts
            .update_owned(post.id(), post.owner_id(), &request.title, &request.content)
            .await?;

        if !updated {
            return Err(changed_concurrently(post.id()));
        }

        info!("Updated post");
        Ok(())
    }

    /// Delete a post; only the owner may do this
    #[instrument(skip(self, request), fields(post_id = %request.post_id, requester = %request.requester_email))]
    pub async fn delete(&self, request: DeletePostRequest) -> Result<(), DomainError> {
        let post = self
            .guard
            .authorize(request.post_id, &request.requester_email)
            .await?;

        if !self.posts.delete_owned(post.id(), post.owner_id()).await? {
            return Err(changed_concurrently(post.id()));
        }

        info!("Deleted post");
        Ok(())
    }
}

fn changed_concurrently(id: PostId) -> DomainError {
    DomainError::conflict(format!(
        "Post {} was removed or changed owner after authorization",
        id
    ))
}
