//! Postboard
//!
//! Authorization-aware domain services for a multi-user post board:
//! - User registration, authentication and account management
//! - Posts readable by anyone and mutable only by their owner
//! - Argon2id credential hashing
//! - PostgreSQL and in-memory storage behind repository traits

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use domain::{DomainError, PostRepository, UserRepository};
use infrastructure::post::PostService;
use infrastructure::storage::{Repositories, StorageFactory};
use infrastructure::user::{Argon2Hasher, PasswordHasher, UserService};

/// User service over runtime-selected collaborators
pub type DynUserService = UserService<dyn UserRepository, dyn PasswordHasher>;

/// Post service over runtime-selected repositories
pub type DynPostService = PostService<dyn PostRepository, dyn UserRepository>;

/// Services wired to one storage backend
pub struct AppServices {
    pub users: DynUserService,
    pub posts: DynPostService,
}

impl AppServices {
    /// Wire services over existing repositories
    pub fn new(repositories: Repositories, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            users: UserService::new(Arc::clone(&repositories.users), hasher),
            posts: PostService::new(repositories.posts, repositories.users),
        }
    }
}

/// Build the services for the configured backend and hashing cost
pub async fn build_services(config: &AppConfig) -> Result<AppServices, DomainError> {
    let storage = config
        .storage
        .storage_config()
        .map_err(|e| DomainError::validation(e.to_string()))?;

    let repositories = StorageFactory::create(&storage).await?;
    let hasher: Arc<dyn PasswordHasher> =
        Arc::new(Argon2Hasher::with_params(config.password.hasher_params()));

    info!(backend = ?storage.storage_type(), "Services ready");
    Ok(AppServices::new(repositories, hasher))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PasswordSettings;
    use crate::infrastructure::post::CreatePostRequest;
    use crate::infrastructure::user::RegisterUserRequest;

    fn fast_config() -> AppConfig {
        AppConfig {
            password: PasswordSettings {
                memory_kib: 64,
                iterations: 1,
                parallelism: 1,
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_build_services_in_memory() {
        let services = build_services(&fast_config()).await.unwrap();

        services
            .users
            .register(RegisterUserRequest::new("alice@x.com", "alice", "pw1"))
            .await
            .unwrap();
        services
            .users
            .authenticate("alice@x.com", "pw1")
            .await
            .unwrap();

        let post = services
            .posts
            .create(CreatePostRequest {
                author_email: "alice@x.com".to_string(),
                title: "Hello".to_string(),
                content: "First".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(services.posts.read(post.id()).await.unwrap(), post);
    }

    #[tokio::test]
    async fn test_build_services_rejects_unknown_backend() {
        let mut config = fast_config();
        config.storage.backend = "sqlite".to_string();

        let result = build_services(&config).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
