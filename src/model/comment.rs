use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_entity_id;
use crate::model::ReactionBucket;

/// A comment on a post, or a reply at any depth.
///
/// Replies form a tree rooted at each top-level comment; each node exclusively
/// owns its `replies` list and is addressable by id anywhere in the tree.
/// Comments are never edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reactions: Vec<ReactionBucket>,
    /// Optional star rating attached by the commenter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u8>,
    /// Set on replies only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// The `@`-mention target when replying to a reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_name: Option<String>,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// A new top-level comment (`parent_id` unset).
    pub fn new(author_id: impl Into<String>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_entity_id(),
            author_id: author_id.into(),
            content: content.into(),
            created_at: now,
            reactions: Vec::new(),
            stars: None,
            parent_id: None,
            mention_name: None,
            replies: Vec::new(),
        }
    }

    /// A new reply under `parent_id`.
    pub fn reply(
        parent_id: impl Into<String>,
        author_id: impl Into<String>,
        content: impl Into<String>,
        mention_name: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            mention_name,
            ..Self::new(author_id, content, now)
        }
    }

    pub fn with_stars(mut self, stars: u8) -> Self {
        self.stars = Some(stars);
        self
    }
}
