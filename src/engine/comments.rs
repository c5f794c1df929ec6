//! Comment/reply tree mutation.
//!
//! Replies nest to arbitrary depth. Mutations rebuild only the spine from the
//! tree root to the changed node; untouched siblings and branches are carried
//! over unchanged.

use chrono::{DateTime, Utc};

use crate::model::{Comment, Post};

/// Applies `transform` to the comment with `target_id`, wherever it sits in
/// the tree. Returns `None` when no node matches.
pub(crate) fn map_comment<F>(comments: &[Comment], target_id: &str, transform: &F) -> Option<Vec<Comment>>
where
    F: Fn(&Comment) -> Comment,
{
    for (idx, comment) in comments.iter().enumerate() {
        if comment.id == target_id {
            let mut next = comments.to_vec();
            next[idx] = transform(comment);
            return Some(next);
        }
        if let Some(replies) = map_comment(&comment.replies, target_id, transform) {
            let mut next = comments.to_vec();
            next[idx].replies = replies;
            return Some(next);
        }
    }
    None
}

/// Appends a new top-level comment to the post.
pub fn add_comment(
    post: &Post,
    author_id: &str,
    content: &str,
    stars: Option<u8>,
    now: DateTime<Utc>,
) -> Post {
    let mut comment = Comment::new(author_id, content, now);
    comment.stars = stars;

    let mut next = post.clone();
    next.comments.push(comment);
    next
}

/// Appends a reply under the comment or reply with `parent_comment_id`.
///
/// The parent is located anywhere in the tree. A missing parent is a silent
/// no-op returning the post unchanged.
pub fn add_reply(
    post: &Post,
    parent_comment_id: &str,
    author_id: &str,
    content: &str,
    mention_name: Option<String>,
    now: DateTime<Utc>,
) -> Post {
    let reply = Comment::reply(parent_comment_id, author_id, content, mention_name, now);
    let appended = map_comment(&post.comments, parent_comment_id, &|parent| {
        let mut next = parent.clone();
        next.replies.push(reply.clone());
        next
    });

    match appended {
        Some(comments) => {
            let mut next = post.clone();
            next.comments = comments;
            next
        }
        None => post.clone(),
    }
}
