use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_entity_id;
use crate::model::{Comment, Poll, ReactionBucket};
use crate::visibility::Visibility;

/// A feed post.
///
/// Content, visibility, and attachments are mutable by the author only;
/// reactions and comments may be added by any viewer who can see the post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(default)]
    pub visibility: Visibility,
    /// User allow-list, consulted when `visibility == Specific`.
    #[serde(default)]
    pub visible_to: Vec<String>,
    /// Department allow-list, consulted when `visibility == Department`.
    #[serde(default)]
    pub visible_to_departments: Vec<String>,
    #[serde(default)]
    pub tagged_users: Vec<String>,
    #[serde(default)]
    pub reactions: Vec<ReactionBucket>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// When set in the future with `is_published == false`, the post is
    /// visible only to its author until the scheduled time passes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
}

impl Post {
    pub fn new(
        author_id: impl Into<String>,
        content: impl Into<String>,
        visibility: Visibility,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: generate_entity_id(),
            author_id: author_id.into(),
            content: content.into(),
            attachments: Vec::new(),
            poll: None,
            visibility,
            visible_to: Vec::new(),
            visible_to_departments: Vec::new(),
            tagged_users: Vec::new(),
            reactions: Vec::new(),
            comments: Vec::new(),
            scheduled_at: None,
            created_at: now,
            updated_at: now,
            is_published: true,
        }
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    pub fn with_poll(mut self, poll: Poll) -> Self {
        self.poll = Some(poll);
        self
    }

    pub fn with_visible_to<S: Into<String>>(mut self, users: impl IntoIterator<Item = S>) -> Self {
        self.visible_to = users.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_visible_to_departments<S: Into<String>>(
        mut self,
        departments: impl IntoIterator<Item = S>,
    ) -> Self {
        self.visible_to_departments = departments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tagged_users<S: Into<String>>(mut self, users: impl IntoIterator<Item = S>) -> Self {
        self.tagged_users = users.into_iter().map(Into::into).collect();
        self
    }

    /// Schedule the post for later publication.
    pub fn scheduled(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(at);
        self.is_published = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub kind: AttachmentKind,
    pub url: String,
    pub name: String,
}

impl Attachment {
    pub fn new(kind: AttachmentKind, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: generate_entity_id(),
            kind,
            url: url.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Video,
    Sticker,
}
