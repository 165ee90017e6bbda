//! Data models for historical events

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::srs::CardState;

/// A memorable event belonging to exactly one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub year: u16,
    /// What happened
    pub content: String,
    /// The learner's mental image anchoring the event to the year peg
    pub mental_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_to_year: Option<CardState>,
}

impl Event {
    pub fn new(year: u16, content: String, mental_image: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            year,
            content,
            mental_image,
            notes: None,
            event_to_year: None,
        }
    }
}
