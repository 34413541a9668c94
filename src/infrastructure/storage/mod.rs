//! Storage infrastructure - backing stores shared by the repositories

mod factory;
mod in_memory;
mod postgres;

pub use factory::{Repositories, StorageConfig, StorageFactory, StorageType};
pub use in_memory::InMemoryStore;
pub use postgres::{PostgresConfig, PostgresStore};
