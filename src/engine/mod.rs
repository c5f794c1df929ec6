//! Pure mutation engines.
//!
//! Every function here is a synchronous transform: it takes the current value,
//! returns a new one, and never touches shared state. Missing target ids are
//! silent no-ops so that stale ids from an optimistic UI never raise.

pub mod comments;
pub mod polls;
pub mod reactions;
pub mod stories;
