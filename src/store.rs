//! The session store: canonical collections plus their mutator surface.
//!
//! Mutators follow two blanket policies from the UI contract:
//!
//! - **no-op on miss** — mutating an id that no longer exists returns the
//!   collection unchanged instead of raising, tolerating stale ids from an
//!   optimistic UI;
//! - **no-op on policy violation** — author-only operations invoked by a
//!   non-author leave the collection unchanged rather than erroring.
//!
//! All mutation runs synchronously on the caller; collections are rebuilt
//! through [`update_by_id`] so a view layer can detect changes by comparing
//! snapshots.

use chrono::{DateTime, Utc};

use crate::engine::{comments, polls, reactions, stories};
use crate::engine::stories::AuthorStories;
use crate::errors::ValidationResult;
use crate::feed::{self, FeedQuery};
use crate::model::{
    Attachment, Entity, Event, Group, Notification, Post, Story, StoryHighlight, User,
};
use crate::validators;
use crate::visibility::Visibility;

/// Replaces the element matching `id` with `transform(element)`.
///
/// All other elements are carried over unchanged, and a missing `id` returns
/// the collection as-is.
pub fn update_by_id<T, F>(items: &[T], id: &str, transform: F) -> Vec<T>
where
    T: Entity + Clone,
    F: FnOnce(&T) -> T,
{
    match items.iter().position(|item| item.id() == id) {
        Some(idx) => {
            let mut next = items.to_vec();
            next[idx] = transform(&items[idx]);
            next
        }
        None => items.to_vec(),
    }
}

/// In-memory collections for one client session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocialStore {
    pub posts: Vec<Post>,
    pub stories: Vec<Story>,
    pub highlights: Vec<StoryHighlight>,
    pub notifications: Vec<Notification>,
    pub events: Vec<Event>,
    pub groups: Vec<Group>,
}

impl SocialStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── posts ──────────────────────────────────────────────────────────

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Validates and inserts a composed post.
    pub fn add_post(&mut self, post: Post) -> ValidationResult {
        validators::validate_post_draft(&post)?;
        self.posts.push(post);
        Ok(())
    }

    /// Removes the post if `requester_id` is its author.
    pub fn delete_post(&mut self, post_id: &str, requester_id: &str) {
        self.posts
            .retain(|p| p.id != post_id || p.author_id != requester_id);
    }

    /// Rewrites the post body; author-only.
    pub fn update_post_content(
        &mut self,
        post_id: &str,
        requester_id: &str,
        content: &str,
        now: DateTime<Utc>,
    ) {
        self.posts = update_by_id(&self.posts, post_id, |post| {
            if post.author_id != requester_id {
                return post.clone();
            }
            let mut next = post.clone();
            next.content = content.to_string();
            next.updated_at = now;
            next
        });
    }

    /// Re-targets the post's audience; author-only.
    pub fn set_post_visibility(
        &mut self,
        post_id: &str,
        requester_id: &str,
        visibility: Visibility,
        visible_to: Vec<String>,
        visible_to_departments: Vec<String>,
        now: DateTime<Utc>,
    ) {
        self.posts = update_by_id(&self.posts, post_id, |post| {
            if post.author_id != requester_id {
                return post.clone();
            }
            let mut next = post.clone();
            next.visibility = visibility;
            next.visible_to = visible_to;
            next.visible_to_departments = visible_to_departments;
            next.updated_at = now;
            next
        });
    }

    /// Replaces the post's attachment list; author-only.
    pub fn set_post_attachments(
        &mut self,
        post_id: &str,
        requester_id: &str,
        attachments: Vec<Attachment>,
        now: DateTime<Utc>,
    ) {
        self.posts = update_by_id(&self.posts, post_id, |post| {
            if post.author_id != requester_id {
                return post.clone();
            }
            let mut next = post.clone();
            next.attachments = attachments;
            next.updated_at = now;
            next
        });
    }

    pub fn toggle_post_reaction(&mut self, post_id: &str, emoji: &str, user_id: &str) {
        self.posts = update_by_id(&self.posts, post_id, |post| {
            reactions::toggle_post_reaction(post, emoji, user_id)
        });
    }

    pub fn toggle_comment_reaction(
        &mut self,
        post_id: &str,
        comment_id: &str,
        emoji: &str,
        user_id: &str,
    ) {
        self.posts = update_by_id(&self.posts, post_id, |post| {
            reactions::toggle_comment_reaction(post, comment_id, emoji, user_id)
        });
    }

    pub fn add_comment(
        &mut self,
        post_id: &str,
        author_id: &str,
        content: &str,
        stars: Option<u8>,
        now: DateTime<Utc>,
    ) {
        self.posts = update_by_id(&self.posts, post_id, |post| {
            comments::add_comment(post, author_id, content, stars, now)
        });
    }

    pub fn add_reply(
        &mut self,
        post_id: &str,
        parent_comment_id: &str,
        author_id: &str,
        content: &str,
        mention_name: Option<String>,
        now: DateTime<Utc>,
    ) {
        self.posts = update_by_id(&self.posts, post_id, |post| {
            comments::add_reply(post, parent_comment_id, author_id, content, mention_name.clone(), now)
        });
    }

    /// Toggles `user_id`'s vote in the post's poll, if it has one.
    pub fn vote(&mut self, post_id: &str, option_id: &str, user_id: &str) {
        self.posts = update_by_id(&self.posts, post_id, |post| {
            let Some(poll) = &post.poll else {
                return post.clone();
            };
            let mut next = post.clone();
            next.poll = Some(polls::vote(poll, option_id, user_id));
            next
        });
    }

    /// Visibility-filtered, scheduling-aware feed for `viewer`.
    pub fn visible_posts(&self, viewer: &User, query: &FeedQuery, now: DateTime<Utc>) -> Vec<Post> {
        feed::list_visible_posts(&self.posts, viewer, query, now)
    }

    // ── stories ────────────────────────────────────────────────────────

    pub fn story(&self, id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    /// Validates and inserts a new story.
    pub fn add_story(&mut self, story: Story) -> ValidationResult {
        validators::validate_story_draft(&story)?;
        self.stories.push(story);
        Ok(())
    }

    /// Removes the story if `requester_id` is its author. Any currently-open
    /// viewer session re-reads the collection and drops the story.
    pub fn delete_story(&mut self, story_id: &str, requester_id: &str) {
        self.stories
            .retain(|s| s.id != story_id || s.author_id != requester_id);
    }

    pub fn record_story_view(&mut self, story_id: &str, user_id: &str, now: DateTime<Utc>) {
        self.stories = update_by_id(&self.stories, story_id, |story| {
            stories::record_view(story, user_id, now)
        });
    }

    pub fn react_to_story(&mut self, story_id: &str, emoji: &str, user_id: &str, now: DateTime<Utc>) {
        self.stories = update_by_id(&self.stories, story_id, |story| {
            stories::react_to_story(story, emoji, user_id, now)
        });
    }

    pub fn reply_to_story(&mut self, story_id: &str, user_id: &str, message: &str, now: DateTime<Utc>) {
        self.stories = update_by_id(&self.stories, story_id, |story| {
            stories::add_story_reply(story, user_id, message, now)
        });
    }

    /// Marks the story as a highlight and upserts the author's highlight
    /// record keyed by `(author, name)`. Author-only; a non-author requester
    /// leaves both collections unchanged.
    pub fn promote_story_to_highlight(
        &mut self,
        story_id: &str,
        highlight_name: &str,
        requester_id: &str,
        now: DateTime<Utc>,
    ) {
        let Some(story) = self.story(story_id) else {
            return;
        };
        if story.author_id != requester_id {
            return;
        }

        self.highlights =
            stories::upsert_highlight(&self.highlights, requester_id, highlight_name, story_id, now);
        self.stories = update_by_id(&self.stories, story_id, |story| {
            let mut next = story.clone();
            next.is_highlight = true;
            next.highlight_name = Some(highlight_name.to_string());
            next
        });
    }

    /// Active, viewer-visible stories grouped for the story bar.
    pub fn story_bar(&self, viewer: &User, now: DateTime<Utc>) -> Vec<AuthorStories> {
        stories::group_active_by_author(&self.stories, viewer, now)
    }

    /// The author's own archive: every story they posted, expired included.
    pub fn story_archive(&self, author_id: &str) -> Vec<Story> {
        self.stories
            .iter()
            .filter(|s| s.author_id == author_id)
            .cloned()
            .collect()
    }

    // ── notifications ──────────────────────────────────────────────────

    pub fn mark_notification_read(&mut self, notification_id: &str) {
        self.notifications = update_by_id(&self.notifications, notification_id, |n| {
            let mut next = n.clone();
            next.is_read = true;
            next
        });
    }

    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    pub fn delete_notification(&mut self, notification_id: &str) {
        self.notifications.retain(|n| n.id != notification_id);
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    // ── events & groups ────────────────────────────────────────────────

    /// Toggles `user_id`'s attendance on the event.
    pub fn rsvp_event(&mut self, event_id: &str, user_id: &str) {
        self.events = update_by_id(&self.events, event_id, |event| {
            let mut next = event.clone();
            if next.attendees.iter().any(|a| a == user_id) {
                next.attendees.retain(|a| a != user_id);
            } else {
                next.attendees.push(user_id.to_string());
            }
            next
        });
    }

    /// Validates and inserts a new group.
    pub fn add_group(&mut self, group: Group) -> ValidationResult {
        validators::validate_group_draft(&group)?;
        self.groups.push(group);
        Ok(())
    }

    pub fn join_group(&mut self, group_id: &str, user_id: &str) {
        self.groups = update_by_id(&self.groups, group_id, |group| {
            let mut next = group.clone();
            if !next.members.iter().any(|m| m == user_id) {
                next.members.push(user_id.to_string());
            }
            next
        });
    }

    /// Removes `user_id` from the group. The owner cannot leave their own
    /// group; deleting it is the owner's exit path.
    pub fn leave_group(&mut self, group_id: &str, user_id: &str) {
        self.groups = update_by_id(&self.groups, group_id, |group| {
            if group.owner_id == user_id {
                return group.clone();
            }
            let mut next = group.clone();
            next.members.retain(|m| m != user_id);
            next
        });
    }

    /// Removes the group if `requester_id` owns it.
    pub fn delete_group(&mut self, group_id: &str, requester_id: &str) {
        self.groups
            .retain(|g| g.id != group_id || g.owner_id != requester_id);
    }
}
