use serde::{Deserialize, Serialize};

/// One emoji's worth of reactions on a post, comment, or reply.
///
/// Invariants maintained by the reaction engine: an emoji appears at most once
/// per entity, a user appears at most once per bucket, and a bucket with no
/// users is removed rather than kept at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionBucket {
    pub emoji: String,
    pub users: Vec<String>,
}

impl ReactionBucket {
    pub fn new(emoji: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            users: vec![user_id.into()],
        }
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.users.iter().any(|u| u == user_id)
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }
}
