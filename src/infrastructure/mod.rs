//! Infrastructure layer - store-backed repositories, hashing and services

pub mod logging;
pub mod post;
pub mod storage;
pub mod user;
