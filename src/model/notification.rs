use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Comment,
    FriendRequest,
    Post,
    Story,
    Mention,
}

impl NotificationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Like => "like",
            NotificationKind::Comment => "comment",
            NotificationKind::FriendRequest => "friend_request",
            NotificationKind::Post => "post",
            NotificationKind::Story => "story",
            NotificationKind::Mention => "mention",
        }
    }
}

/// An inbox entry for the session user.
///
/// Notifications are seeded into the session; the store only marks them read
/// or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub from_user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
