//! Data models for year associations

use serde::{Deserialize, Serialize};

use crate::srs::CardState;

/// Last year on the timeline
pub const MAX_YEAR: u16 = 2025;

/// One year on the timeline.
///
/// The events themselves live in the event store; a year only carries its
/// own notes and the card state for the year → events direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Year {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_to_events: Option<CardState>,
}
