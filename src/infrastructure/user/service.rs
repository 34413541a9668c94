//! User service for registration, authentication and account management

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::user::{
    validate_email, validate_password, validate_username, NewUser, UserProfile, UserRepository,
};
use crate::domain::{CredentialToken, DomainError};

use super::password::PasswordHasher;

/// Same wording for unknown email and wrong password
const AUTH_FAILURE: &str = "invalid email or password";

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegisterUserRequest {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// User service for authentication and management
#[derive(Debug)]
pub struct UserService<R: UserRepository + ?Sized, H: PasswordHasher + ?Sized> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> UserService<R, H>
where
    R: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized + 'static,
{
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterUserRequest) -> Result<(), DomainError> {
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_username(&request.username)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = self.hash_password(request.password).await?;

        // Uniqueness is enforced by the store, which reports a Conflict
        let user = self
            .repository
            .create(NewUser::new(request.email, request.username, password_hash))
            .await?;

        info!(user_id = %user.id(), "Registered user");
        Ok(())
    }

    /// Check credentials and hand back a bearer credential
    #[instrument(skip(self, password))]
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<CredentialToken, DomainError> {
        let user = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found(AUTH_FAILURE))?;

        let matches = self
            .verify_password(user.password_hash().to_string(), password.to_string())
            .await?;

        if !matches {
            return Err(DomainError::invalid_credentials(AUTH_FAILURE));
        }

        debug!(user_id = %user.id(), "Authenticated user");
        Ok(CredentialToken::placeholder())
    }

    /// Look up a user's public profile
    #[instrument(skip(self))]
    pub async fn lookup(&self, email: &str) -> Result<UserProfile, DomainError> {
        self.repository
            .get_by_email(email)
            .await?
            .map(UserProfile::from)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", email)))
    }

    /// Change a user's display name
    #[instrument(skip(self))]
    pub async fn rename(&self, email: &str, new_username: &str) -> Result<(), DomainError> {
        validate_username(new_username).map_err(|e| DomainError::validation(e.to_string()))?;

        if !self.repository.update_username(email, new_username).await? {
            return Err(DomainError::not_found(format!("User '{}' not found", email)));
        }

        info!("Renamed user");
        Ok(())
    }

    /// Remove a user together with the posts it owns
    #[instrument(skip(self))]
    pub async fn remove(&self, email: &str) -> Result<(), DomainError> {
        if !self.repository.delete_by_email(email).await? {
            return Err(DomainError::not_found(format!("User '{}' not found", email)));
        }

        info!("Removed user");
        Ok(())
    }

    async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::hashing(format!("Hashing task failed: {}", e)))?
    }

    async fn verify_password(
        &self,
        encoded_hash: String,
        password: String,
    ) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.verify(&encoded_hash, &password))
            .await
            .map_err(|e| DomainError::verification(format!("Verification task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{MockUserRepository, User, UserId};
    use crate::infrastructure::user::password::{Argon2Hasher, HasherParams, MockPasswordHasher};
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn create_service() -> UserService<InMemoryUserRepository, Argon2Hasher> {
        let repository = Arc::new(InMemoryUserRepository::default());
        let hasher = Arc::new(Argon2Hasher::with_params(HasherParams {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        }));
        UserService::new(repository, hasher)
    }

    fn alice() -> RegisterUserRequest {
        RegisterUserRequest::new("alice@x.com", "alice", "pw1")
    }

    #[tokio::test]
    async fn test_register_user() {
        let service = create_service();

        service.register(alice()).await.unwrap();

        let profile = service.lookup("alice@x.com").await.unwrap();
        assert_eq!(profile.id, UserId::new(1));
        assert_eq!(profile.email, "alice@x.com");
        assert_eq!(profile.username, "alice");
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let repository = Arc::new(InMemoryUserRepository::default());
        let service = UserService::new(
            Arc::clone(&repository),
            Arc::new(Argon2Hasher::with_params(HasherParams {
                memory_kib: 64,
                iterations: 1,
                parallelism: 1,
            })),
        );

        service.register(alice()).await.unwrap();

        let stored = repository.get_by_email("alice@x.com").await.unwrap().unwrap();
        assert_ne!(stored.password_hash(), "pw1");
        assert!(!stored.password_hash().is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let service = create_service();

        for request in [
            RegisterUserRequest::new("", "alice", "pw1"),
            RegisterUserRequest::new("alice@x.com", "", "pw1"),
            RegisterUserRequest::new("alice@x.com", "alice", ""),
        ] {
            let result = service.register(request).await;
            assert!(matches!(result, Err(DomainError::Validation { .. })));
        }

        assert!(matches!(
            service.lookup("alice@x.com").await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_service();

        service.register(alice()).await.unwrap();

        let result = service
            .register(RegisterUserRequest::new("alice@x.com", "impostor", "pw2"))
            .await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));

        let profile = service.lookup("alice@x.com").await.unwrap();
        assert_eq!(profile.username, "alice");
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = create_service();
        service.register(alice()).await.unwrap();

        let token = service.authenticate("alice@x.com", "pw1").await.unwrap();
        assert_eq!(token, CredentialToken::placeholder());
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = create_service();
        service.register(alice()).await.unwrap();

        let result = service.authenticate("alice@x.com", "pw1x").await;
        assert!(matches!(result, Err(DomainError::InvalidCredentials { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let service = create_service();

        let result = service.authenticate("nobody@x.com", "pw1").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_failures_share_wording() {
        let service = create_service();
        service.register(alice()).await.unwrap();

        let unknown = service.authenticate("nobody@x.com", "pw1").await.unwrap_err();
        let mismatch = service.authenticate("alice@x.com", "nope").await.unwrap_err();

        assert!(unknown.to_string().ends_with(AUTH_FAILURE));
        assert!(mismatch.to_string().ends_with(AUTH_FAILURE));
    }

    #[tokio::test]
    async fn test_authenticate_malformed_stored_hash() {
        let mut repository = MockUserRepository::new();
        repository.expect_get_by_email().returning(|email| {
            Ok(Some(User::from_parts(UserId::new(1), email, "alice", "not base64 !!")))
        });

        let service = UserService::new(
            Arc::new(repository),
            Arc::new(Argon2Hasher::new()),
        );

        let result = service.authenticate("alice@x.com", "pw1").await;
        assert!(matches!(result, Err(DomainError::Verification { .. })));
    }

    #[tokio::test]
    async fn test_register_hashing_failure_persists_nothing() {
        let mut repository = MockUserRepository::new();
        repository.expect_create().never();

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .times(1)
            .returning(|_| Err(DomainError::hashing("entropy unavailable")));

        let service = UserService::new(Arc::new(repository), Arc::new(hasher));

        let result = service.register(alice()).await;
        assert!(matches!(result, Err(DomainError::Hashing { .. })));
    }

    #[tokio::test]
    async fn test_register_passes_hash_to_repository() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .withf(|password| password == "pw1")
            .returning(|_| Ok("encoded".to_string()));

        let mut repository = MockUserRepository::new();
        repository
            .expect_create()
            .withf(|user| {
                user.email == "alice@x.com" && user.username == "alice" && user.password_hash == "encoded"
            })
            .times(1)
            .returning(|user| Ok(user.into_user(UserId::new(1))));

        let service = UserService::new(Arc::new(repository), Arc::new(hasher));
        service.register(alice()).await.unwrap();
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_get_by_email()
            .returning(|_| Err(DomainError::timeout("get user by email exceeded 3000ms")));

        let service = UserService::new(Arc::new(repository), Arc::new(MockPasswordHasher::new()));

        let result = service.lookup("alice@x.com").await;
        assert!(matches!(result, Err(DomainError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_lookup_unknown() {
        let service = create_service();

        let result = service.lookup("nobody@x.com").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_rename() {
        let service = create_service();
        service.register(alice()).await.unwrap();

        service.rename("alice@x.com", "alicia").await.unwrap();

        let profile = service.lookup("alice@x.com").await.unwrap();
        assert_eq!(profile.username, "alicia");
    }

    #[tokio::test]
    async fn test_rename_unknown_user() {
        let service = create_service();

        let result = service.rename("nobody@x.com", "ghost").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_rename_rejects_empty_username() {
        let service = create_service();
        service.register(alice()).await.unwrap();

        let result = service.rename("alice@x.com", "").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_remove() {
        let service = create_service();
        service.register(alice()).await.unwrap();

        service.remove("alice@x.com").await.unwrap();

        assert!(matches!(
            service.lookup("alice@x.com").await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.authenticate("alice@x.com", "pw1").await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_remove_unknown_user() {
        let service = create_service();

        let result = service.remove("nobody@x.com").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
