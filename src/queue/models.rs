//! Task queue data models

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::srs::Direction;

/// One presentation grouping of eligible exercises.
///
/// The set of categories is closed; they are considered in the declared
/// order below when building the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskCategory {
    RememberWordByNumber,
    RememberNumberByWord,
    RememberSoundByDigit,
    RememberDigitBySound,
    RememberEventsByYear,
    RememberYearByEvent,
    CreateNumberAssociation,
    CreateEventsForYear,
}

impl TaskCategory {
    /// All categories in priority order
    pub const ALL: [TaskCategory; 8] = [
        TaskCategory::RememberWordByNumber,
        TaskCategory::RememberNumberByWord,
        TaskCategory::RememberSoundByDigit,
        TaskCategory::RememberDigitBySound,
        TaskCategory::RememberEventsByYear,
        TaskCategory::RememberYearByEvent,
        TaskCategory::CreateNumberAssociation,
        TaskCategory::CreateEventsForYear,
    ];

    /// The review direction implied by this category; `None` for the
    /// creation categories, which carry no card state
    pub fn direction(self) -> Option<Direction> {
        match self {
            TaskCategory::RememberWordByNumber => Some(Direction::NumberToWord),
            TaskCategory::RememberNumberByWord => Some(Direction::WordToNumber),
            TaskCategory::RememberSoundByDigit => Some(Direction::DigitToSound),
            TaskCategory::RememberDigitBySound => Some(Direction::SoundToDigit),
            TaskCategory::RememberEventsByYear => Some(Direction::YearToEvents),
            TaskCategory::RememberYearByEvent => Some(Direction::EventToYear),
            TaskCategory::CreateNumberAssociation | TaskCategory::CreateEventsForYear => None,
        }
    }

    pub fn is_creation(self) -> bool {
        self.direction().is_none()
    }

    /// Human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            TaskCategory::RememberWordByNumber => "remember the word for a number",
            TaskCategory::RememberNumberByWord => "remember the number for a word",
            TaskCategory::RememberSoundByDigit => "remember the sounds of a digit",
            TaskCategory::RememberDigitBySound => "remember the digit for a sound",
            TaskCategory::RememberEventsByYear => "remember the events of a year",
            TaskCategory::RememberYearByEvent => "remember the year of an event",
            TaskCategory::CreateNumberAssociation => "invent a peg word for a number",
            TaskCategory::CreateEventsForYear => "add an event for a year",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The unit handed to the presentation layer: one concrete exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueTask {
    pub category: TaskCategory,
    pub identifier: String,
}

/// A non-empty category with its eligible items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub category: TaskCategory,
    pub count: usize,
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_is_listed_once() {
        for category in TaskCategory::ALL {
            assert_eq!(
                TaskCategory::ALL.iter().filter(|c| **c == category).count(),
                1
            );
        }
    }

    #[test]
    fn test_creation_categories_have_no_direction() {
        assert!(TaskCategory::CreateNumberAssociation.direction().is_none());
        assert!(TaskCategory::CreateEventsForYear.direction().is_none());
        assert_eq!(
            TaskCategory::ALL.iter().filter(|c| c.is_creation()).count(),
            2
        );
    }
}
