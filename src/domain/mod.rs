//! Domain layer: entities, validation, repository traits and errors

pub mod credential;
pub mod error;
pub mod post;
pub mod user;

pub use credential::CredentialToken;
pub use error::DomainError;
pub use post::{NewPost, Post, PostId, PostRepository};
pub use user::{NewUser, User, UserId, UserProfile, UserRepository};
