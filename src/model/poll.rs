use serde::{Deserialize, Serialize};

use crate::id::generate_entity_id;

/// An inline poll attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    /// When false, a user may hold a vote in at most one option.
    pub multiple_choice: bool,
}

impl Poll {
    pub fn new<S: Into<String>>(
        question: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        multiple_choice: bool,
    ) -> Self {
        Self {
            id: generate_entity_id(),
            question: question.into(),
            options: options.into_iter().map(PollOption::new).collect(),
            multiple_choice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub votes: Vec<String>,
}

impl PollOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_entity_id(),
            text: text.into(),
            votes: Vec::new(),
        }
    }
}
