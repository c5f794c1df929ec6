//! Feed queries: the filtered, ordered view of posts a client renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Post, User};
use crate::visibility::{can_view_post, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    /// Newest first; the feed default.
    #[default]
    Desc,
}

impl SortOrder {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Filters layered over the visibility predicate when listing posts.
///
/// # Example
///
/// ```
/// use townhall::feed::FeedQuery;
/// use townhall::visibility::Visibility;
///
/// let query = FeedQuery::new()
///     .with_visibility(Visibility::Company)
///     .with_search("offsite");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedQuery {
    /// Restrict to a single visibility mode, on top of `can_view`.
    pub visibility: Option<Visibility>,
    /// Case-insensitive substring match over content and attachment names.
    pub search: Option<String>,
    pub order: SortOrder,
}

impl FeedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

/// Lists the posts `viewer` may see, filtered by `query` and sorted by
/// creation time (newest first by default).
pub fn list_visible_posts(
    posts: &[Post],
    viewer: &User,
    query: &FeedQuery,
    now: DateTime<Utc>,
) -> Vec<Post> {
    let needle = query.search.as_deref().map(str::to_lowercase);

    let mut visible: Vec<Post> = posts
        .iter()
        .filter(|post| can_view_post(viewer, post, now))
        .filter(|post| query.visibility.is_none_or(|mode| post.visibility == mode))
        .filter(|post| match &needle {
            Some(needle) if !needle.is_empty() => matches_search(post, needle),
            _ => true,
        })
        .cloned()
        .collect();

    match query.order {
        SortOrder::Asc => visible.sort_by_key(|p| p.created_at),
        SortOrder::Desc => visible.sort_by_key(|p| std::cmp::Reverse(p.created_at)),
    }
    visible
}

fn matches_search(post: &Post, needle: &str) -> bool {
    post.content.to_lowercase().contains(needle)
        || post
            .attachments
            .iter()
            .any(|a| a.name.to_lowercase().contains(needle))
}
