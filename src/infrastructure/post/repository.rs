//! In-memory post repository implementation

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::post::{NewPost, Post, PostId, PostRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;
use crate::infrastructure::storage::InMemoryStore;

/// In-memory implementation of PostRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostRepository {
    store: InMemoryStore,
}

impl InMemoryPostRepository {
    /// Create a repository over a (possibly shared) store
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let mut tables = self.store.write().await;

        if !tables.users.contains_key(&post.owner_id.value()) {
            return Err(DomainError::not_found(format!(
                "User {} not found",
                post.owner_id
            )));
        }

        let id = tables.next_post_id();
        let post = post.into_post(PostId::new(id), Utc::now());
        tables.posts.insert(id, post.clone());

        Ok(post)
    }

    async fn get(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        let tables = self.store.read().await;
        Ok(tables.posts.get(&id.value()).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let tables = self.store.read().await;
        Ok(tables.posts.values().cloned().collect())
    }

    async fn update_owned(
        &self,
        id: PostId,
        owner_id: UserId,
        title: &str,
        content: &str,
    ) -> Result<bool, DomainError> {
        let mut tables = self.store.write().await;

        match tables.posts.get_mut(&id.value()) {
            Some(post) if post.owner_id() == owner_id => {
                post.revise(title, content);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_owned(&self, id: PostId, owner_id: UserId) -> Result<bool, DomainError> {
        let mut tables = self.store.write().await;

        let owned = tables
            .posts
            .get(&id.value())
            .is_some_and(|post| post.owner_id() == owner_id);

        if owned {
            tables.posts.remove(&id.value());
        }

        Ok(owned)
    }
}
