//! Entity shapes for the social-content store.
//!
//! All entities are plain owned data: serde-derived, `chrono` timestamps,
//! nanoid string identifiers. Mutation lives in [`crate::engine`] and
//! [`crate::store`], not here.

mod comment;
mod event;
mod group;
mod notification;
mod poll;
mod post;
mod reaction;
mod story;
mod user;

pub use comment::Comment;
pub use event::Event;
pub use group::Group;
pub use notification::{Notification, NotificationKind};
pub use poll::{Poll, PollOption};
pub use post::{Attachment, AttachmentKind, Post};
pub use reaction::ReactionBucket;
pub use story::{
    Story, StoryHighlight, StoryMedia, StoryMediaKind, StoryReaction, StoryReply, StoryView,
    TextPosition, STORY_TTL_HOURS,
};
pub use user::{Department, Profile, SocialLink, User};

/// Identified entities that can live in a store collection.
///
/// Collection mutators locate their target through this trait; see
/// [`crate::store::update_by_id`].
pub trait Entity {
    fn id(&self) -> &str;
}

impl Entity for Post {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Comment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Story {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for StoryHighlight {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Group {
    fn id(&self) -> &str {
        &self.id
    }
}
