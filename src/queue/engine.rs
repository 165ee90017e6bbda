//! The scheduler facade
//!
//! Exactly two operations are exposed to the presentation layer:
//! `pick_next_task` (read-only query, consumes randomness) and
//! `record_outcome` (mutates exactly one card state).

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use uuid::Uuid;

use super::categories::available_categories;
use super::models::{QueueTask, TaskCategory};
use super::weights::pick_weighted_year;
use crate::digits::DigitError;
use crate::events::EventError;
use crate::numbers::NumberError;
use crate::profile::Profile;
use crate::srs::{Rating, Scheduler, Sm2Scheduler};
use crate::years::{parse_year_id, YearError};

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("{0} tasks have no review outcome to record")]
    NotReviewable(TaskCategory),

    #[error("not an event id: {0:?}")]
    InvalidEventId(String),

    #[error("not a digit: {0:?}")]
    InvalidDigitId(String),

    #[error(transparent)]
    Number(#[from] NumberError),

    #[error(transparent)]
    Digit(#[from] DigitError),

    #[error(transparent)]
    Year(#[from] YearError),

    #[error(transparent)]
    Event(#[from] EventError),
}

/// Picks the next exercise and records review outcomes.
///
/// Holds no state between calls besides the RNG; every query recomputes
/// eligibility from the profile it is handed. The RNG is injectable so
/// tests can assert distributional properties deterministically.
pub struct TaskQueue<R: Rng = StdRng> {
    rng: R,
    scheduler: Box<dyn Scheduler>,
}

impl TaskQueue<StdRng> {
    pub fn new() -> Self {
        Self::from_parts(StdRng::from_entropy(), Box::new(Sm2Scheduler))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(StdRng::seed_from_u64(seed), Box::new(Sm2Scheduler))
    }
}

impl Default for TaskQueue<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TaskQueue<R> {
    pub fn from_parts(rng: R, scheduler: Box<dyn Scheduler>) -> Self {
        Self { rng, scheduler }
    }

    /// Pick the next exercise, or `None` when nothing is eligible.
    ///
    /// Stage 1 draws a category uniformly from the non-empty ones, so a
    /// category with 1 item and one with 90 are equally likely. Stage 2
    /// draws the item: uniformly, except event creation which uses the
    /// recency/sparsity weighting.
    pub fn pick_next_task(&mut self, profile: &Profile, now: DateTime<Utc>) -> Option<QueueTask> {
        let categories = available_categories(profile, now);
        if categories.is_empty() {
            return None;
        }

        let info = &categories[self.rng.gen_range(0..categories.len())];
        let identifier = match info.category {
            TaskCategory::CreateEventsForYear => {
                pick_weighted_year(&mut self.rng, &info.items, &profile.events)?.clone()
            }
            _ => info.items[self.rng.gen_range(0..info.items.len())].clone(),
        };

        log::debug!(
            "picked {:?} ({} of {} categories eligible)",
            info.category,
            info.count,
            categories.len()
        );

        Some(QueueTask {
            category: info.category,
            identifier,
        })
    }

    /// Record a review outcome for the task's (item, direction) pair.
    /// Creation tasks carry no card state and are rejected.
    pub fn record_outcome(
        &mut self,
        profile: &mut Profile,
        task: &QueueTask,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> Result<(), QueueError> {
        let direction = task
            .category
            .direction()
            .ok_or(QueueError::NotReviewable(task.category))?;

        let scheduler = self.scheduler.as_ref();
        match task.category {
            TaskCategory::RememberWordByNumber | TaskCategory::RememberNumberByWord => {
                profile
                    .numbers
                    .record_review(&task.identifier, direction, rating, now, scheduler)?;
            }
            TaskCategory::RememberSoundByDigit | TaskCategory::RememberDigitBySound => {
                let digit: u32 = task
                    .identifier
                    .parse()
                    .map_err(|_| QueueError::InvalidDigitId(task.identifier.clone()))?;
                profile
                    .digits
                    .record_review(digit, direction, rating, now, scheduler)?;
            }
            TaskCategory::RememberEventsByYear => {
                let year = parse_year_id(&task.identifier)?;
                profile
                    .years
                    .record_review(year, direction, rating, now, scheduler)?;
            }
            TaskCategory::RememberYearByEvent => {
                let id = Uuid::parse_str(&task.identifier)
                    .map_err(|_| QueueError::InvalidEventId(task.identifier.clone()))?;
                profile
                    .events
                    .record_review(id, direction, rating, now, scheduler)?;
            }
            TaskCategory::CreateNumberAssociation | TaskCategory::CreateEventsForYear => {
                unreachable!("creation categories have no direction")
            }
        }
        Ok(())
    }
}
