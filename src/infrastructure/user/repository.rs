//! In-memory user repository implementation

use async_trait::async_trait;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::storage::InMemoryStore;

/// In-memory implementation of UserRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

impl InMemoryUserRepository {
    /// Create a repository over a (possibly shared) store
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut tables = self.store.write().await;

        if tables.user_by_email(&user.email).is_some() {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                user.email
            )));
        }

        let id = tables.next_user_id();
        let user = user.into_user(UserId::new(id));
        tables.users.insert(id, user.clone());

        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.store.read().await;
        Ok(tables.user_by_email(email).cloned())
    }

    async fn update_username(&self, email: &str, username: &str) -> Result<bool, DomainError> {
        let mut tables = self.store.write().await;

        match tables.users.values_mut().find(|u| u.email() == email) {
            Some(user) => {
                user.set_username(username);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let mut tables = self.store.write().await;

        let Some(id) = tables.user_by_email(email).map(|u| u.id()) else {
            return Ok(false);
        };

        tables.users.remove(&id.value());
        tables.posts.retain(|_, post| post.owner_id() != id);

        Ok(true)
    }
}
