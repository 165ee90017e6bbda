//! Data models for digit associations

use serde::{Deserialize, Serialize};

use crate::srs::CardState;

/// The phonetic sounds associated with one digit.
///
/// Practiced in both directions (digit → sound, sound → digit), each with
/// its own card state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitAssociation {
    pub sounds: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digit_to_sound: Option<CardState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_to_digit: Option<CardState>,
}

impl DigitAssociation {
    pub fn new(sounds: Vec<String>, notes: Option<String>) -> Self {
        Self {
            sounds,
            notes,
            digit_to_sound: None,
            sound_to_digit: None,
        }
    }
}

/// Sounds deliberately left out of the digit table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoredSounds {
    pub sounds: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
