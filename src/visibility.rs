//! Audience gating for feed and story content.
//!
//! Every shareable item carries a [`Visibility`] mode plus optional allow-lists.
//! The [`can_view`] predicate is the single source of truth for "may this
//! viewer see this item" and is applied identically to posts and stories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Post, Story, User};

/// Who a content item is shared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Everyone in the company.
    #[default]
    Company,
    /// Only members of the departments in `visible_to_departments`.
    Department,
    /// Only the users listed in `visible_to`.
    Specific,
    /// Only the author.
    Private,
}

impl Visibility {
    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::Company => "company",
            Visibility::Department => "department",
            Visibility::Specific => "specific",
            Visibility::Private => "private",
        }
    }
}

/// Items that can be audience-gated.
///
/// An absent allow-list is an empty slice, never a wildcard.
pub trait Audience {
    fn author_id(&self) -> &str;
    fn visibility(&self) -> Visibility;
    fn visible_to(&self) -> &[String];
    fn visible_to_departments(&self) -> &[String];
}

impl Audience for Post {
    fn author_id(&self) -> &str {
        &self.author_id
    }
    fn visibility(&self) -> Visibility {
        self.visibility
    }
    fn visible_to(&self) -> &[String] {
        &self.visible_to
    }
    fn visible_to_departments(&self) -> &[String] {
        &self.visible_to_departments
    }
}

impl Audience for Story {
    fn author_id(&self) -> &str {
        &self.author_id
    }
    fn visibility(&self) -> Visibility {
        self.visibility
    }
    fn visible_to(&self) -> &[String] {
        &self.visible_to
    }
    fn visible_to_departments(&self) -> &[String] {
        &self.visible_to_departments
    }
}

/// Decides whether `viewer` may see `item`.
///
/// Rules in priority order: authors always see their own content; `company`
/// admits everyone; `specific` requires membership in the item's user
/// allow-list; `department` requires the viewer's department in the item's
/// department allow-list; `private` admits nobody but the author.
pub fn can_view<A: Audience>(viewer: &User, item: &A) -> bool {
    if item.author_id() == viewer.id {
        return true;
    }
    match item.visibility() {
        Visibility::Company => true,
        Visibility::Specific => item.visible_to().iter().any(|id| *id == viewer.id),
        Visibility::Department => item
            .visible_to_departments()
            .iter()
            .any(|id| *id == viewer.department_id),
        Visibility::Private => false,
    }
}

/// Post-only scheduling overlay on top of [`can_view`].
///
/// A post with a future `scheduled_at` and `is_published == false` is visible
/// only to its author.
pub fn can_view_post(viewer: &User, post: &Post, now: DateTime<Utc>) -> bool {
    if post.author_id == viewer.id {
        return true;
    }
    if !can_view(viewer, post) {
        return false;
    }
    post.is_published || post.scheduled_at.is_none_or(|at| at <= now)
}
