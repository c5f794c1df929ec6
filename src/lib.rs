//! townhall core library.
//!
//! An in-memory social-content state store for a corporate social client:
//! posts with nested comments, emoji reactions, polls, time-boxed stories with
//! highlight promotion, notifications, events, and groups, gated by a single
//! visibility predicate.
//!
//! The crate is synchronous and side-effect free: UI event handlers call
//! store mutators, mutators produce new collection snapshots, and views
//! re-read derived, filtered slices such as the feed or the story bar.

pub mod engine;
pub mod errors;
pub mod feed;
pub mod id;
pub mod mentions;
pub mod model;
pub mod session;
pub mod store;
pub mod validators;
pub mod visibility;

pub use engine::stories::AuthorStories;
pub use errors::{StoreError, ValidationError, ValidationIssue, ValidationResult};
pub use feed::{FeedQuery, SortOrder};
pub use model::*;
pub use session::Session;
pub use store::{update_by_id, SocialStore};
pub use visibility::{can_view, can_view_post, Audience, Visibility};
