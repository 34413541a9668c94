//! Post entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;

/// Store-assigned numeric post identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for PostId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post entity; readable by anyone, mutable only by its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: PostId,
    /// Owner identifier - never serialized outward
    #[serde(skip)]
    owner_id: UserId,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Rebuild a post from stored state
    pub fn from_parts(
        id: PostId,
        owner_id: UserId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
            content: content.into(),
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // Mutators

    /// Replace title and content
    pub fn revise(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }
}

/// Creation input; identifier and timestamp are assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub owner_id: UserId,
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(owner_id: UserId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            owner_id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Attach the identifier and timestamp the store assigned
    pub fn into_post(self, id: PostId, created_at: DateTime<Utc>) -> Post {
        Post::from_parts(id, self.owner_id, self.title, self.content, created_at)
    }
}
