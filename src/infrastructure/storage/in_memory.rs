//! In-memory relational store
//!
//! Holds both tables behind one lock so the repositories built on top of it
//! share identifier sequences, email uniqueness, foreign-key checks and
//! cascading deletes exactly like the PostgreSQL schema.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Post, User};

/// Rows and sequences of the in-memory store
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub users: BTreeMap<i64, User>,
    pub posts: BTreeMap<i64, Post>,
    last_user_id: i64,
    last_post_id: i64,
}

impl Tables {
    pub fn next_user_id(&mut self) -> i64 {
        self.last_user_id += 1;
        self.last_user_id
    }

    pub fn next_post_id(&mut self) -> i64 {
        self.last_post_id += 1;
        self.last_post_id
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|u| u.email() == email)
    }
}

/// Thread-safe in-memory store
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
