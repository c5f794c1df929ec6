//! Emoji reaction bookkeeping for posts, comments, and replies.
//!
//! Reactions aggregate into per-emoji buckets with toggle semantics: the same
//! user re-reacting with the same emoji removes the reaction, and a bucket
//! whose last user leaves is dropped rather than kept at zero. A user may hold
//! reactions under several emojis at once; emojis do not displace each other.
//!
//! Stories use a different, single-slot model; see [`crate::engine::stories`].

use crate::engine::comments::map_comment;
use crate::model::{Comment, Post, ReactionBucket};

/// Toggles `user_id`'s reaction with `emoji` in a bucket list.
pub fn toggle_reaction(buckets: &[ReactionBucket], emoji: &str, user_id: &str) -> Vec<ReactionBucket> {
    match buckets.iter().position(|b| b.emoji == emoji) {
        Some(idx) if buckets[idx].contains(user_id) => {
            let mut next = buckets.to_vec();
            next[idx].users.retain(|u| u != user_id);
            if next[idx].users.is_empty() {
                next.remove(idx);
            }
            next
        }
        Some(idx) => {
            let mut next = buckets.to_vec();
            next[idx].users.push(user_id.to_string());
            next
        }
        None => {
            let mut next = buckets.to_vec();
            next.push(ReactionBucket::new(emoji, user_id));
            next
        }
    }
}

/// Toggles a reaction on the post itself.
pub fn toggle_post_reaction(post: &Post, emoji: &str, user_id: &str) -> Post {
    let mut next = post.clone();
    next.reactions = toggle_reaction(&post.reactions, emoji, user_id);
    next
}

/// Toggles a reaction on a comment or reply located by id anywhere in the
/// post's comment tree. A missing id is a silent no-op.
pub fn toggle_comment_reaction(post: &Post, comment_id: &str, emoji: &str, user_id: &str) -> Post {
    let mapped = map_comment(&post.comments, comment_id, &|comment| {
        let mut next = comment.clone();
        next.reactions = toggle_reaction(&comment.reactions, emoji, user_id);
        next
    });

    match mapped {
        Some(comments) => {
            let mut next = post.clone();
            next.comments = comments;
            next
        }
        None => post.clone(),
    }
}
