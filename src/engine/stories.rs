//! Story lifecycle: expiry, views, reactions, replies, highlights, and the
//! story-bar grouping used by viewers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::id::generate_entity_id;
use crate::model::{Story, StoryHighlight, StoryReaction, StoryReply, StoryView, User};
use crate::visibility::can_view;

/// A story is active until its fixed 24-hour expiry; Expired is terminal.
pub fn is_active(story: &Story, now: DateTime<Utc>) -> bool {
    now < story.expires_at
}

/// Records that `user_id` viewed the story. Idempotent: a second view by the
/// same user leaves the view list unchanged.
pub fn record_view(story: &Story, user_id: &str, now: DateTime<Utc>) -> Story {
    if story.views.iter().any(|v| v.user_id == user_id) {
        return story.clone();
    }
    let mut next = story.clone();
    next.views.push(StoryView {
        user_id: user_id.to_string(),
        viewed_at: now,
    });
    next
}

/// Sets `user_id`'s reaction to `emoji`.
///
/// Each user holds a single reaction slot: re-reacting replaces the emoji in
/// place. There is no toggle-off, unlike post/comment reactions.
pub fn react_to_story(story: &Story, emoji: &str, user_id: &str, now: DateTime<Utc>) -> Story {
    let mut next = story.clone();
    match next.reactions.iter_mut().find(|r| r.user_id == user_id) {
        Some(existing) => existing.emoji = emoji.to_string(),
        None => next.reactions.push(StoryReaction {
            id: generate_entity_id(),
            user_id: user_id.to_string(),
            emoji: emoji.to_string(),
            created_at: now,
        }),
    }
    next
}

/// Appends a direct reply to the story.
pub fn add_story_reply(story: &Story, user_id: &str, message: &str, now: DateTime<Utc>) -> Story {
    let mut next = story.clone();
    next.replies.push(StoryReply {
        id: generate_entity_id(),
        user_id: user_id.to_string(),
        message: message.to_string(),
        created_at: now,
    });
    next
}

/// One author's run of active stories in the story bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorStories {
    pub author_id: String,
    pub stories: Vec<Story>,
}

/// Filters to active, viewer-visible stories and groups them by author.
///
/// Stories within a group run oldest first so a story viewer's progress bar
/// advances chronologically. Groups are ordered by each author's earliest
/// active story, which keeps the bar stable as views and reactions arrive.
pub fn group_active_by_author(stories: &[Story], viewer: &User, now: DateTime<Utc>) -> Vec<AuthorStories> {
    let mut visible: Vec<&Story> = stories
        .iter()
        .filter(|s| is_active(s, now) && can_view(viewer, *s))
        .collect();
    visible.sort_by_key(|s| s.created_at);

    let mut groups: Vec<AuthorStories> = Vec::new();
    for story in visible {
        match groups.iter_mut().find(|g| g.author_id == story.author_id) {
            Some(group) => group.stories.push(story.clone()),
            None => groups.push(AuthorStories {
                author_id: story.author_id.clone(),
                stories: vec![story.clone()],
            }),
        }
    }
    groups
}

/// True when every story in the group carries a view entry for `user_id`.
/// Drives the seen (dim) versus unseen (gradient ring) avatar treatment.
pub fn has_viewed_all(stories: &[Story], user_id: &str) -> bool {
    stories
        .iter()
        .all(|s| s.views.iter().any(|v| v.user_id == user_id))
}

/// Upserts the highlight keyed by `(author_id, name)`.
///
/// Creates the highlight with `story_id` as cover when absent; otherwise
/// appends `story_id` to the existing highlight's story list (no duplicate
/// entry when the story was already promoted into it).
pub fn upsert_highlight(
    highlights: &[StoryHighlight],
    author_id: &str,
    name: &str,
    story_id: &str,
    now: DateTime<Utc>,
) -> Vec<StoryHighlight> {
    let mut next = highlights.to_vec();
    match next
        .iter_mut()
        .find(|h| h.user_id == author_id && h.name == name)
    {
        Some(highlight) => {
            if !highlight.story_ids.iter().any(|id| id == story_id) {
                highlight.story_ids.push(story_id.to_string());
            }
        }
        None => next.push(StoryHighlight {
            id: generate_entity_id(),
            user_id: author_id.to_string(),
            name: name.to_string(),
            cover_story_id: story_id.to_string(),
            story_ids: vec![story_id.to_string()],
            created_at: now,
        }),
    }
    next
}
