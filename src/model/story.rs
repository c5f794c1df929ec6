use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_entity_id;
use crate::visibility::Visibility;

/// Fixed story lifetime: a story is active for 24 hours from creation.
pub const STORY_TTL_HOURS: i64 = 24;

/// A time-boxed story.
///
/// Active while `now < expires_at`; Expired is terminal, with the story kept
/// read-only for the author's archive. Highlighting is a cross-cutting flag:
/// an expired story can still be highlighted and stays visible in the
/// highlight view despite being filtered out of the live story bar.
///
/// Story reactions deliberately differ from post/comment reactions: one
/// reaction slot per user, replaced in place on re-react, with no toggle-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub author_id: String,
    pub media: StoryMedia,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub text_color: String,
    #[serde(default)]
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_position: Option<TextPosition>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub visible_to: Vec<String>,
    #[serde(default)]
    pub visible_to_departments: Vec<String>,
    #[serde(default)]
    pub tagged_users: Vec<String>,
    #[serde(default)]
    pub reactions: Vec<StoryReaction>,
    #[serde(default)]
    pub replies: Vec<StoryReply>,
    /// At most one entry per user; view recording is idempotent.
    #[serde(default)]
    pub views: Vec<StoryView>,
    #[serde(default)]
    pub is_highlight: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Story {
    pub fn new(author_id: impl Into<String>, media: StoryMedia, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_entity_id(),
            author_id: author_id.into(),
            media,
            text: None,
            text_color: String::new(),
            background_color: String::new(),
            text_position: None,
            visibility: Visibility::Company,
            visible_to: Vec::new(),
            visible_to_departments: Vec::new(),
            tagged_users: Vec::new(),
            reactions: Vec::new(),
            replies: Vec::new(),
            views: Vec::new(),
            is_highlight: false,
            highlight_name: None,
            created_at: now,
            expires_at: now + Duration::hours(STORY_TTL_HOURS),
        }
    }

    pub fn with_text(
        mut self,
        text: impl Into<String>,
        color: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        self.text = Some(text.into());
        self.text_color = color.into();
        self.background_color = background.into();
        self
    }

    pub fn with_text_position(mut self, x: f32, y: f32) -> Self {
        self.text_position = Some(TextPosition { x, y });
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryMedia {
    pub id: String,
    pub kind: StoryMediaKind,
    pub url: String,
}

impl StoryMedia {
    pub fn new(kind: StoryMediaKind, url: impl Into<String>) -> Self {
        Self {
            id: generate_entity_id(),
            kind,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryMediaKind {
    Image,
    Video,
}

/// Overlay text anchor, in percentages of the story canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextPosition {
    pub x: f32,
    pub y: f32,
}

/// A viewer's single reaction slot on a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryReaction {
    pub id: String,
    pub user_id: String,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryReply {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryView {
    pub user_id: String,
    pub viewed_at: DateTime<Utc>,
}

/// A named, author-curated collection of stories that survives story expiry.
///
/// At most one highlight exists per `(user_id, name)` pair; promoting another
/// story under an existing name appends to `story_ids`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryHighlight {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub cover_story_id: String,
    pub story_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}
