//! Store operations for year associations
//!
//! Every year from 0 through `MAX_YEAR` exists from the start; there is no
//! "create year" operation. Year identifiers are plain decimal strings,
//! except year 0 which is written "0000".

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{Year, MAX_YEAR};
use crate::srs::{review_or_reset, Direction, Rating, Scheduler};

#[derive(Error, Debug)]
pub enum YearError {
    #[error("not a year between 0000 and {MAX_YEAR}: {0:?}")]
    InvalidYear(String),

    #[error("direction {0:?} does not apply to year associations")]
    InvalidDirection(Direction),
}

pub type Result<T> = std::result::Result<T, YearError>;

/// The identifier string for a year number
pub fn year_id(year: u16) -> String {
    if year == 0 {
        "0000".to_string()
    } else {
        year.to_string()
    }
}

/// Parse a year identifier, accepting leading zeros
pub fn parse_year_id(id: &str) -> Result<u16> {
    let year: u16 = id
        .parse()
        .map_err(|_| YearError::InvalidYear(id.to_string()))?;
    if year > MAX_YEAR {
        return Err(YearError::InvalidYear(id.to_string()));
    }
    Ok(year)
}

/// Repository of per-year data, seeded with the full timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YearStore {
    years: BTreeMap<u16, Year>,
}

impl Default for YearStore {
    fn default() -> Self {
        let years = (0..=MAX_YEAR).map(|y| (y, Year::default())).collect();
        Self { years }
    }
}

impl YearStore {
    pub fn get_year(&self, year: u16) -> Option<&Year> {
        self.years.get(&year)
    }

    /// All years in ascending order
    pub fn all_years(&self) -> impl Iterator<Item = u16> + '_ {
        self.years.keys().copied()
    }

    /// Years that have notes written for them
    pub fn years_with_notes(&self) -> Vec<u16> {
        self.years
            .iter()
            .filter(|(_, y)| y.notes.as_deref().map_or(false, |n| !n.trim().is_empty()))
            .map(|(year, _)| *year)
            .collect()
    }

    pub fn set_notes(&mut self, year: u16, notes: Option<String>) -> Result<()> {
        let entry = self
            .years
            .get_mut(&year)
            .ok_or_else(|| YearError::InvalidYear(year.to_string()))?;
        entry.notes = notes;
        Ok(())
    }

    /// Is the year → events direction eligible for practice? Card state
    /// absent (never practiced) or due.
    pub fn is_due_or_new(&self, year: u16, now: DateTime<Utc>) -> bool {
        match self.years.get(&year) {
            Some(y) => y.year_to_events.as_ref().map_or(true, |c| c.is_due(now)),
            None => false,
        }
    }

    /// Record a review outcome for the year → events direction
    pub fn record_review(
        &mut self,
        year: u16,
        direction: Direction,
        rating: Rating,
        now: DateTime<Utc>,
        scheduler: &dyn Scheduler,
    ) -> Result<()> {
        if direction != Direction::YearToEvents {
            return Err(YearError::InvalidDirection(direction));
        }
        let entry = self
            .years
            .get_mut(&year)
            .ok_or_else(|| YearError::InvalidYear(year.to_string()))?;
        entry.year_to_events = Some(review_or_reset(
            scheduler,
            entry.year_to_events.as_ref(),
            now,
            rating,
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::Sm2Scheduler;
    use chrono::Duration;

    #[test]
    fn test_year_id_formatting() {
        assert_eq!(year_id(0), "0000");
        assert_eq!(year_id(7), "7");
        assert_eq!(year_id(1850), "1850");
    }

    #[test]
    fn test_parse_year_id() {
        assert_eq!(parse_year_id("0000").unwrap(), 0);
        assert_eq!(parse_year_id("1850").unwrap(), 1850);
        assert_eq!(parse_year_id("0512").unwrap(), 512);
        assert!(parse_year_id("2026").is_err());
        assert!(parse_year_id("abc").is_err());
        assert!(parse_year_id("").is_err());
    }

    #[test]
    fn test_default_store_covers_full_timeline() {
        let store = YearStore::default();
        assert_eq!(store.all_years().count(), MAX_YEAR as usize + 1);
        assert!(store.get_year(0).is_some());
        assert!(store.get_year(MAX_YEAR).is_some());
        assert!(store.get_year(MAX_YEAR + 1).is_none());
    }

    #[test]
    fn test_unpracticed_year_is_due_or_new() {
        let store = YearStore::default();
        assert!(store.is_due_or_new(1850, Utc::now()));
    }

    #[test]
    fn test_review_schedules_year_out() {
        let mut store = YearStore::default();
        let now = Utc::now();

        store
            .record_review(1850, Direction::YearToEvents, Rating::Good, now, &Sm2Scheduler)
            .unwrap();

        assert!(!store.is_due_or_new(1850, now + Duration::hours(1)));
        assert!(store.is_due_or_new(1850, now + Duration::days(1)));
        // Neighbors are untouched
        assert!(store.is_due_or_new(1849, now));
    }

    #[test]
    fn test_record_review_rejects_foreign_direction() {
        let mut store = YearStore::default();
        let result = store.record_review(
            1850,
            Direction::EventToYear,
            Rating::Good,
            Utc::now(),
            &Sm2Scheduler,
        );
        assert!(matches!(result, Err(YearError::InvalidDirection(_))));
    }

    #[test]
    fn test_years_with_notes() {
        let mut store = YearStore::default();
        store.set_notes(1492, Some("ocean blue".to_string())).unwrap();
        store.set_notes(1500, Some("   ".to_string())).unwrap();
        assert_eq!(store.years_with_notes(), vec![1492]);
    }
}
