//! Store operations for digit associations
//!
//! Ships with the traditional Major System consonant table as default
//! data, so a fresh profile can be drilled immediately.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{DigitAssociation, IgnoredSounds};
use crate::srs::{review_or_reset, CardState, Direction, Rating, Scheduler};

#[derive(Error, Debug)]
pub enum DigitError {
    #[error("digit must be between 0 and 9: {0}")]
    InvalidDigit(u32),

    #[error("no association for digit {0}")]
    NotFound(u8),

    #[error("direction {0:?} does not apply to digit associations")]
    InvalidDirection(Direction),
}

pub type Result<T> = std::result::Result<T, DigitError>;

/// Repository of digit → sounds associations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DigitAssociationStore {
    associations: BTreeMap<u8, DigitAssociation>,
    ignored_sounds: IgnoredSounds,
}

impl Default for DigitAssociationStore {
    fn default() -> Self {
        Self {
            associations: default_associations(),
            ignored_sounds: default_ignored_sounds(),
        }
    }
}

/// The traditional Major System consonant table
fn default_associations() -> BTreeMap<u8, DigitAssociation> {
    let entries: [(u8, &[&str], &str); 10] = [
        (0, &["s", "z", "soft c"], "z is the first letter of zero. The other letters have a similar sound."),
        (1, &["t", "d"], "d & t have one downstroke and sound similar (some people include th here)"),
        (2, &["n"], "n looks something like 2 on its side and has 2 downstrokes"),
        (3, &["m"], "M looks like a 3 on its side and has three downstrokes"),
        (4, &["r"], "4 and R are almost mirror images of each other, R is the last letter of \"fouR\""),
        (5, &["l"], "L is the Roman Numeral for 50"),
        (6, &["sh", "soft ch", "j", "soft g", "zh"], "g looks like an upside-down 6, cursive j looks kind of like a 6"),
        (7, &["k", "hard c", "hard g", "hard ch", "q", "qu"], "capital K looks like two sevens stuck together"),
        (8, &["f", "v"], "cursive f looks like 8, v is a vocalize f (some people include th here)"),
        (9, &["p", "b"], "P looks like a mirror-image of 9. b sounds similar look like a rotated 9"),
    ];

    entries
        .into_iter()
        .map(|(digit, sounds, notes)| {
            let sounds = sounds.iter().map(|s| s.to_string()).collect();
            (digit, DigitAssociation::new(sounds, Some(notes.to_string())))
        })
        .collect()
}

fn default_ignored_sounds() -> IgnoredSounds {
    IgnoredSounds {
        sounds: ["Vowel sounds", "w", "h", "y"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        notes: Some("These sounds are ignored in the traditional Major System".to_string()),
    }
}

fn check_digit(digit: u32) -> Result<u8> {
    if digit <= 9 {
        Ok(digit as u8)
    } else {
        Err(DigitError::InvalidDigit(digit))
    }
}

impl DigitAssociationStore {
    /// An empty store with no digit data at all
    pub fn empty() -> Self {
        Self {
            associations: BTreeMap::new(),
            ignored_sounds: IgnoredSounds {
                sounds: Vec::new(),
                notes: None,
            },
        }
    }

    pub fn get_association(&self, digit: u8) -> Option<&DigitAssociation> {
        self.associations.get(&digit)
    }

    /// Digits that currently have an association, in order
    pub fn associated_digits(&self) -> Vec<u8> {
        self.associations.keys().copied().collect()
    }

    /// Replace all sounds (and notes) for a digit
    pub fn update_digit_sounds(
        &mut self,
        digit: u32,
        sounds: Vec<String>,
        notes: Option<String>,
    ) -> Result<()> {
        let digit = check_digit(digit)?;
        self.associations
            .insert(digit, DigitAssociation::new(sounds, notes));
        Ok(())
    }

    /// Add a single sound to a digit, creating the association if needed
    pub fn add_sound_to_digit(&mut self, digit: u32, sound: String) -> Result<()> {
        let digit = check_digit(digit)?;
        let association = self
            .associations
            .entry(digit)
            .or_insert_with(|| DigitAssociation::new(Vec::new(), None));
        if !association.sounds.contains(&sound) {
            association.sounds.push(sound);
        }
        Ok(())
    }

    pub fn remove_sound_from_digit(&mut self, digit: u32, sound: &str) -> Result<()> {
        let digit = check_digit(digit)?;
        if let Some(association) = self.associations.get_mut(&digit) {
            association.sounds.retain(|s| s != sound);
        }
        Ok(())
    }

    pub fn remove_digit(&mut self, digit: u32) -> Result<()> {
        let digit = check_digit(digit)?;
        self.associations.remove(&digit);
        Ok(())
    }

    /// All sounds across all digits (excluding ignored sounds)
    pub fn all_sounds(&self) -> Vec<String> {
        self.associations
            .values()
            .flat_map(|a| a.sounds.iter().cloned())
            .collect()
    }

    /// Find which digit a sound belongs to
    pub fn digit_for_sound(&self, sound: &str) -> Option<u8> {
        self.associations
            .iter()
            .find(|(_, a)| a.sounds.iter().any(|s| s == sound))
            .map(|(digit, _)| *digit)
    }

    pub fn ignored_sounds(&self) -> &IgnoredSounds {
        &self.ignored_sounds
    }

    pub fn is_sound_ignored(&self, sound: &str) -> bool {
        self.ignored_sounds.sounds.iter().any(|s| s == sound)
    }

    /// Restore the default Major System table, discarding card states
    pub fn reset_to_defaults(&mut self) {
        self.associations = default_associations();
        self.ignored_sounds = default_ignored_sounds();
    }

    /// Digits eligible for practice in `direction`, as identifiers
    pub fn due_or_new(&self, direction: Direction, now: DateTime<Utc>) -> Result<Vec<String>> {
        let mut eligible = Vec::new();
        for (digit, association) in &self.associations {
            let card = match direction {
                Direction::DigitToSound => association.digit_to_sound.as_ref(),
                Direction::SoundToDigit => association.sound_to_digit.as_ref(),
                other => return Err(DigitError::InvalidDirection(other)),
            };
            if card.map_or(true, |c: &CardState| c.is_due(now)) {
                eligible.push(digit.to_string());
            }
        }
        Ok(eligible)
    }

    /// Record a review outcome for one (digit, direction) pair
    pub fn record_review(
        &mut self,
        digit: u32,
        direction: Direction,
        rating: Rating,
        now: DateTime<Utc>,
        scheduler: &dyn Scheduler,
    ) -> Result<()> {
        let digit = check_digit(digit)?;
        let association = self
            .associations
            .get_mut(&digit)
            .ok_or(DigitError::NotFound(digit))?;

        let card = match direction {
            Direction::DigitToSound => &mut association.digit_to_sound,
            Direction::SoundToDigit => &mut association.sound_to_digit,
            other => return Err(DigitError::InvalidDirection(other)),
        };
        *card = Some(review_or_reset(scheduler, card.as_ref(), now, rating));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::Sm2Scheduler;
    use chrono::Duration;

    #[test]
    fn test_defaults_cover_all_digits() {
        let store = DigitAssociationStore::default();
        assert_eq!(store.associated_digits(), (0..10).collect::<Vec<u8>>());
        assert_eq!(store.get_association(5).unwrap().sounds, vec!["l"]);
        assert!(store.is_sound_ignored("w"));
        assert!(!store.is_sound_ignored("m"));
    }

    #[test]
    fn test_digit_for_sound() {
        let store = DigitAssociationStore::default();
        assert_eq!(store.digit_for_sound("m"), Some(3));
        assert_eq!(store.digit_for_sound("sh"), Some(6));
        assert_eq!(store.digit_for_sound("x"), None);
    }

    #[test]
    fn test_digit_validation() {
        let mut store = DigitAssociationStore::default();
        assert!(matches!(
            store.add_sound_to_digit(10, "x".to_string()),
            Err(DigitError::InvalidDigit(10))
        ));
        assert!(store.add_sound_to_digit(3, "x".to_string()).is_ok());
        assert!(store.get_association(3).unwrap().sounds.contains(&"x".to_string()));
    }

    #[test]
    fn test_default_table_is_all_new_and_eligible() {
        let store = DigitAssociationStore::default();
        let now = Utc::now();
        let eligible = store.due_or_new(Direction::DigitToSound, now).unwrap();
        assert_eq!(eligible.len(), 10);
        assert_eq!(eligible[0], "0");
        assert_eq!(eligible[9], "9");
    }

    #[test]
    fn test_review_schedules_out_one_direction() {
        let mut store = DigitAssociationStore::default();
        let now = Utc::now();

        store
            .record_review(4, Direction::SoundToDigit, Rating::Good, now, &Sm2Scheduler)
            .unwrap();

        let later = now + Duration::hours(1);
        let sound_to_digit = store.due_or_new(Direction::SoundToDigit, later).unwrap();
        assert_eq!(sound_to_digit.len(), 9);
        assert!(!sound_to_digit.contains(&"4".to_string()));

        // The opposite direction is untouched
        let digit_to_sound = store.due_or_new(Direction::DigitToSound, later).unwrap();
        assert_eq!(digit_to_sound.len(), 10);
    }

    #[test]
    fn test_empty_store_has_nothing_to_practice() {
        let store = DigitAssociationStore::empty();
        let eligible = store.due_or_new(Direction::DigitToSound, Utc::now()).unwrap();
        assert!(eligible.is_empty());
    }
}
