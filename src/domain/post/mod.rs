//! Post domain
//!
//! Post entity, validation, and repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{NewPost, Post, PostId};
pub use repository::PostRepository;
pub use validation::{validate_content, validate_title, PostValidationError};

#[cfg(test)]
pub use repository::MockPostRepository;
