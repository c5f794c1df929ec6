use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_entity_id;

/// A company event with toggle-style RSVPs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub organizer_id: String,
    /// Attending user ids; membership toggled by `SocialStore::rsvp_event`.
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        organizer_id: impl Into<String>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: generate_entity_id(),
            title: title.into(),
            description: String::new(),
            location: String::new(),
            starts_at,
            ends_at,
            organizer_id: organizer_id.into(),
            attendees: Vec::new(),
        }
    }
}
