//! Store operations for number associations

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::NumberAssociation;
use crate::srs::{review_or_reset, CardState, Direction, Rating, Scheduler};

#[derive(Error, Debug)]
pub enum NumberError {
    #[error("number must be a two-digit string (00-99): {0:?}")]
    InvalidNumber(String),

    #[error("no association for number {0}")]
    NotFound(String),

    #[error("direction {0:?} does not apply to number associations")]
    InvalidDirection(Direction),
}

pub type Result<T> = std::result::Result<T, NumberError>;

/// Repository of peg-word associations, keyed by two-digit number
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberAssociationStore {
    associations: BTreeMap<String, NumberAssociation>,
}

/// Validate a two-digit identifier (00-99)
fn check_number(number: &str) -> Result<()> {
    if number.len() == 2 && number.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(NumberError::InvalidNumber(number.to_string()))
    }
}

/// All two-digit numbers in order: "00", "01", ... "99"
fn all_numbers() -> impl Iterator<Item = String> {
    (0..100).map(|i| format!("{:02}", i))
}

impl NumberAssociationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the association for a number
    pub fn set_association(&mut self, number: &str, association: NumberAssociation) -> Result<()> {
        check_number(number)?;
        self.associations.insert(number.to_string(), association);
        Ok(())
    }

    pub fn get_association(&self, number: &str) -> Option<&NumberAssociation> {
        self.associations.get(number)
    }

    pub fn has_association(&self, number: &str) -> bool {
        self.associations.contains_key(number)
    }

    pub fn remove_association(&mut self, number: &str) -> Result<()> {
        check_number(number)?;
        self.associations
            .remove(number)
            .map(|_| ())
            .ok_or_else(|| NumberError::NotFound(number.to_string()))
    }

    /// All numbers that have associations, in numeric order
    pub fn associated_numbers(&self) -> Vec<String> {
        self.associations.keys().cloned().collect()
    }

    /// All numbers that don't have associations yet, in numeric order
    pub fn unassociated_numbers(&self) -> Vec<String> {
        all_numbers()
            .filter(|num| !self.associations.contains_key(num))
            .collect()
    }

    /// How many of the 100 numbers have associations
    pub fn progress_count(&self) -> usize {
        self.associations.len()
    }

    /// Numbers eligible for practice in `direction`: card state absent
    /// (never practiced) or due
    pub fn due_or_new(&self, direction: Direction, now: DateTime<Utc>) -> Result<Vec<String>> {
        let mut eligible = Vec::new();
        for (number, association) in &self.associations {
            let card = self.card_for(association, direction)?;
            if card.map_or(true, |c| c.is_due(now)) {
                eligible.push(number.clone());
            }
        }
        Ok(eligible)
    }

    fn card_for<'a>(
        &self,
        association: &'a NumberAssociation,
        direction: Direction,
    ) -> Result<Option<&'a CardState>> {
        match direction {
            Direction::NumberToWord => Ok(association.number_to_word.as_ref()),
            Direction::WordToNumber => Ok(association.word_to_number.as_ref()),
            other => Err(NumberError::InvalidDirection(other)),
        }
    }

    /// Record a review outcome for one (number, direction) pair
    pub fn record_review(
        &mut self,
        number: &str,
        direction: Direction,
        rating: Rating,
        now: DateTime<Utc>,
        scheduler: &dyn Scheduler,
    ) -> Result<()> {
        let slot = match direction {
            Direction::NumberToWord | Direction::WordToNumber => direction,
            other => return Err(NumberError::InvalidDirection(other)),
        };

        let association = self
            .associations
            .get_mut(number)
            .ok_or_else(|| NumberError::NotFound(number.to_string()))?;

        let card = match slot {
            Direction::NumberToWord => &mut association.number_to_word,
            _ => &mut association.word_to_number,
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
    fn test_set_association_validates_number() {
        let mut store = NumberAssociationStore::new();
        let assoc = NumberAssociation::new("sun".to_string());

        assert!(matches!(
            store.set_association("7", assoc.clone()),
            Err(NumberError::InvalidNumber(_))
        ));
        assert!(matches!(
            store.set_association("123", assoc.clone()),
            Err(NumberError::InvalidNumber(_))
        ));
        assert!(matches!(
            store.set_association("ab", assoc.clone()),
            Err(NumberError::InvalidNumber(_))
        ));
        assert!(store.set_association("07", assoc).is_ok());
    }

    #[test]
    fn test_unassociated_numbers_shrink_as_pegs_are_added() {
        let mut store = NumberAssociationStore::new();
        assert_eq!(store.unassociated_numbers().len(), 100);

        store
            .set_association("07", NumberAssociation::new("key".to_string()))
            .unwrap();

        let unassociated = store.unassociated_numbers();
        assert_eq!(unassociated.len(), 99);
        assert!(!unassociated.contains(&"07".to_string()));
        assert!(store.has_association("07"));
    }

    #[test]
    fn test_new_association_is_eligible_in_both_directions() {
        let mut store = NumberAssociationStore::new();
        store
            .set_association("07", NumberAssociation::new("key".to_string()))
            .unwrap();

        let now = Utc::now();
        assert_eq!(
            store.due_or_new(Direction::NumberToWord, now).unwrap(),
            vec!["07".to_string()]
        );
        assert_eq!(
            store.due_or_new(Direction::WordToNumber, now).unwrap(),
            vec!["07".to_string()]
        );
    }

    #[test]
    fn test_review_affects_only_targeted_direction() {
        let mut store = NumberAssociationStore::new();
        store
            .set_association("07", NumberAssociation::new("key".to_string()))
            .unwrap();
        store
            .set_association("42", NumberAssociation::new("rain".to_string()))
            .unwrap();

        let now = Utc::now();
        store
            .record_review("07", Direction::NumberToWord, Rating::Good, now, &Sm2Scheduler)
            .unwrap();

        let reviewed = store.get_association("07").unwrap();
        assert!(reviewed.number_to_word.is_some());
        assert!(reviewed.word_to_number.is_none());

        let untouched = store.get_association("42").unwrap();
        assert!(untouched.number_to_word.is_none());
        assert!(untouched.word_to_number.is_none());

        // The reviewed direction is scheduled out, the other is still new
        let later = now + Duration::hours(1);
        assert!(store
            .due_or_new(Direction::NumberToWord, later)
            .unwrap()
            .iter()
            .all(|n| n != "07"));
        assert!(store
            .due_or_new(Direction::WordToNumber, later)
            .unwrap()
            .contains(&"07".to_string()));
    }

    #[test]
    fn test_due_card_becomes_eligible_again() {
        let mut store = NumberAssociationStore::new();
        store
            .set_association("07", NumberAssociation::new("key".to_string()))
            .unwrap();

        let now = Utc::now();
        store
            .record_review("07", Direction::NumberToWord, Rating::Good, now, &Sm2Scheduler)
            .unwrap();

        // First interval is one day
        assert!(!store
            .due_or_new(Direction::NumberToWord, now + Duration::hours(23))
            .unwrap()
            .contains(&"07".to_string()));
        assert!(store
            .due_or_new(Direction::NumberToWord, now + Duration::days(1))
            .unwrap()
            .contains(&"07".to_string()));
    }

    #[test]
    fn test_record_review_rejects_foreign_direction() {
        let mut store = NumberAssociationStore::new();
        store
            .set_association("07", NumberAssociation::new("key".to_string()))
            .unwrap();

        let result = store.record_review(
            "07",
            Direction::YearToEvents,
            Rating::Good,
            Utc::now(),
            &Sm2Scheduler,
        );
        assert!(matches!(result, Err(NumberError::InvalidDirection(_))));
    }
}
