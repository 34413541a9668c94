//! User infrastructure module
//!
//! This module provides implementations for user authentication and management,
//! including password hashing with Argon2, the user repositories, and the user service.

mod password;
mod postgres_repository;
mod repository;
mod service;

pub use password::{Argon2Hasher, HasherParams, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{RegisterUserRequest, UserService};

#[cfg(test)]
pub use password::MockPasswordHasher;
