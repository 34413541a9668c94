//! Post infrastructure module
//!
//! Post repositories, the ownership guard and the post service.

mod ownership;
mod postgres_repository;
mod repository;
mod service;

pub use ownership::OwnershipGuard;
pub use postgres_repository::PostgresPostRepository;
pub use repository::InMemoryPostRepository;
pub use service::{CreatePostRequest, DeletePostRequest, PostService, UpdatePostRequest};
