//! User entity and related types

use serde::{Deserialize, Serialize};

/// Store-assigned numeric user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity as persisted by a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the store on creation
    id: UserId,
    /// Unique lookup key
    email: String,
    /// Mutable display name
    username: String,
    /// Encoded password hash - never exposed in serialization
    #[serde(skip_serializing, default)]
    password_hash: String,
}

impl User {
    /// Rebuild a user from stored state
    pub fn from_parts(
        id: UserId,
        email: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    // Mutators

    /// Update the display name
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Whether this user is the owner recorded on a resource
    pub fn owns(&self, owner_id: UserId) -> bool {
        self.id == owner_id
    }
}

/// Creation input; the identifier is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Attach the identifier the store assigned
    pub fn into_user(self, id: UserId) -> User {
        User::from_parts(id, self.email, self.username, self.password_hash)
    }
}

/// Outward projection of a user; carries no secret material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub username: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: i64, email: &str) -> User {
        User::from_parts(UserId::new(id), email, "alice", "hashed_password")
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user(1, "alice@x.com");

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.email(), "alice@x.com");
        assert_eq!(user.username(), "alice");
        assert_eq!(user.password_hash(), "hashed_password");
    }

    #[test]
    fn test_new_user_into_user() {
        let user = NewUser::new("bob@x.com", "bob", "hash").into_user(UserId::new(9));

        assert_eq!(user.id().value(), 9);
        assert_eq!(user.email(), "bob@x.com");
        assert_eq!(user.password_hash(), "hash");
    }

    #[test]
    fn test_set_username() {
        let mut user = create_test_user(1, "alice@x.com");
        user.set_username("alice2");
        assert_eq!(user.username(), "alice2");
        assert_eq!(user.email(), "alice@x.com");
    }

    #[test]
    fn test_owns() {
        let user = create_test_user(1, "alice@x.com");
        assert!(user.owns(UserId::new(1)));
        assert!(!user.owns(UserId::new(2)));
    }

    #[test]
    fn test_user_serialization_excludes_password() {
        let user = create_test_user(1, "alice@x.com");

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_profile_drops_hash() {
        let profile = UserProfile::from(create_test_user(3, "carol@x.com"));
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["email"], "carol@x.com");
        assert!(json.get("password_hash").is_none());
    }
}
