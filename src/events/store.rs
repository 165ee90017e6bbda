//! Store operations for historical events
//!
//! Events are kept in one map keyed by id, with a year → event-ids index
//! alongside. Removal is a map deletion plus index cleanup.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::models::Event;
use crate::srs::{review_or_reset, Direction, Rating, Scheduler};
use crate::years::MAX_YEAR;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("not a year between 0000 and {MAX_YEAR}: {0}")]
    InvalidYear(u16),

    #[error("event {0} not found")]
    NotFound(Uuid),

    #[error("direction {0:?} does not apply to events")]
    InvalidDirection(Direction),
}

pub type Result<T> = std::result::Result<T, EventError>;

/// Repository of events plus a by-year index
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventStore {
    events: BTreeMap<Uuid, Event>,
    events_by_year: BTreeMap<u16, Vec<Uuid>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new event to a year, returning its id
    pub fn add_event(&mut self, year: u16, content: String, mental_image: String) -> Result<Uuid> {
        if year > MAX_YEAR {
            return Err(EventError::InvalidYear(year));
        }

        let event = Event::new(year, content, mental_image);
        let id = event.id;
        self.events.insert(id, event);
        self.events_by_year.entry(year).or_default().push(id);
        Ok(id)
    }

    pub fn get_event(&self, id: Uuid) -> Option<&Event> {
        self.events.get(&id)
    }

    /// Update an event's text fields; `Some` values replace, `None` leaves
    /// the field as it is
    pub fn update_event(
        &mut self,
        id: Uuid,
        content: Option<String>,
        mental_image: Option<String>,
        notes: Option<String>,
    ) -> Result<()> {
        let event = self.events.get_mut(&id).ok_or(EventError::NotFound(id))?;
        if let Some(content) = content {
            event.content = content;
        }
        if let Some(mental_image) = mental_image {
            event.mental_image = mental_image;
        }
        if let Some(notes) = notes {
            event.notes = Some(notes);
        }
        Ok(())
    }

    pub fn remove_event(&mut self, id: Uuid) -> Result<()> {
        let event = self.events.remove(&id).ok_or(EventError::NotFound(id))?;

        if let Some(ids) = self.events_by_year.get_mut(&event.year) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                self.events_by_year.remove(&event.year);
            }
        }
        Ok(())
    }

    /// All events recorded for one year, in insertion order
    pub fn events_for_year(&self, year: u16) -> Vec<&Event> {
        self.events_by_year
            .get(&year)
            .map(|ids| ids.iter().filter_map(|id| self.events.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn year_has_events(&self, year: u16) -> bool {
        self.events_by_year
            .get(&year)
            .map_or(false, |ids| !ids.is_empty())
    }

    /// Years that currently have at least one event, ascending
    pub fn years_with_events(&self) -> Vec<u16> {
        self.events_by_year
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(year, _)| *year)
            .collect()
    }

    /// Does any year in `range` have at least one event?
    pub fn has_events_in(&self, range: RangeInclusive<u16>) -> bool {
        self.events_by_year
            .range(range)
            .any(|(_, ids)| !ids.is_empty())
    }

    pub fn total_events(&self) -> usize {
        self.events.len()
    }

    /// Events eligible for practice in the event → year direction
    pub fn due_or_new(&self, direction: Direction, now: DateTime<Utc>) -> Result<Vec<String>> {
        if direction != Direction::EventToYear {
            return Err(EventError::InvalidDirection(direction));
        }
        Ok(self
            .events
            .iter()
            .filter(|(_, e)| e.event_to_year.as_ref().map_or(true, |c| c.is_due(now)))
            .map(|(id, _)| id.to_string())
            .collect())
    }

    /// Record a review outcome for one event's event → year direction
    pub fn record_review(
        &mut self,
        id: Uuid,
        direction: Direction,
        rating: Rating,
        now: DateTime<Utc>,
        scheduler: &dyn Scheduler,
    ) -> Result<()> {
        if direction != Direction::EventToYear {
            return Err(EventError::InvalidDirection(direction));
        }
        let event = self.events.get_mut(&id).ok_or(EventError::NotFound(id))?;
        event.event_to_year = Some(review_or_reset(
            scheduler,
            event.event_to_year.as_ref(),
            now,
            rating,
        ));
        Ok(())
    }
}
