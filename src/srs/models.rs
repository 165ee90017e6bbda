//! Data models for the spaced repetition system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a card in the spaced repetition system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardStatus {
    /// Never reviewed
    New,
    /// In initial learning phase
    Learning,
    /// Regular spaced review
    Review,
    /// Failed and re-learning
    Relearning,
}

impl Default for CardStatus {
    fn default() -> Self {
        Self::New
    }
}

/// Learner's answer quality for a single review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    Wrong,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// Map a rating to an SM-2 quality value (0-5 scale)
    pub fn quality(self) -> i32 {
        match self {
            Rating::Wrong => 1, // incorrect but recognized
            Rating::Hard => 3,  // correct with difficulty
            Rating::Good => 4,  // correct with hesitation
            Rating::Easy => 5,  // perfect
        }
    }

    /// Parse user input leniently; anything unrecognized counts as Good
    pub fn from_str_lossy(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "w" | "wrong" | "again" => Rating::Wrong,
            "h" | "hard" => Rating::Hard,
            "e" | "easy" => Rating::Easy,
            _ => Rating::Good,
        }
    }
}

/// A named practice mode for an item kind. Each (item, direction) pair
/// owns its own independent card state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    NumberToWord,
    WordToNumber,
    DigitToSound,
    SoundToDigit,
    YearToEvents,
    EventToYear,
}

/// Current spaced repetition state for one (item, direction) pair.
///
/// An item/direction with no card state is "new" and always eligible for
/// practice; one with card state is eligible iff `due_date <= now`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardState {
    /// Current interval in days
    #[serde(default)]
    pub interval: i32,
    /// SM-2 ease factor (default 2.5)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f32,
    /// When the card is due for review
    pub due_date: DateTime<Utc>,
    /// Total number of reviews
    #[serde(default)]
    pub review_count: i32,
    /// Number of correct responses
    #[serde(default)]
    pub correct_count: i32,
    /// Current status in the learning process
    #[serde(default)]
    pub status: CardStatus,
}

fn default_ease_factor() -> f32 {
    2.5
}

impl CardState {
    /// A brand-new card, due immediately
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            interval: 0,
            ease_factor: default_ease_factor(),
            due_date: now,
            review_count: 0,
            correct_count: 0,
            status: CardStatus::New,
        }
    }

    /// Check if the card is due for review
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_date <= now
    }
}
