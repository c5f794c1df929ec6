use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_entity_id;

/// An interest or team group. The owner is always a member and cannot leave;
/// deleting the group is the owner's exit path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub owner_id: String,
    #[serde(default)]
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn new(name: impl Into<String>, owner_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        let owner_id = owner_id.into();
        Self {
            id: generate_entity_id(),
            name: name.into(),
            description: String::new(),
            owner_id: owner_id.clone(),
            members: vec![owner_id],
            created_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
