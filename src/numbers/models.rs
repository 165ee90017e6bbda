//! Data models for number associations

use serde::{Deserialize, Serialize};

use crate::srs::CardState;

/// A learner-authored peg word for a two-digit number.
///
/// Each practice direction owns its own card state; practicing one
/// direction never affects the other. A direction with no card state has
/// never been practiced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberAssociation {
    /// The peg word (e.g. "sun" for 02 in the Major System)
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_to_word: Option<CardState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_to_number: Option<CardState>,
}

impl NumberAssociation {
    pub fn new(word: String) -> Self {
        Self {
            word,
            notes: None,
            number_to_word: None,
            word_to_number: None,
        }
    }

    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }
}
