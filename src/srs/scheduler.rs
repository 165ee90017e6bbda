//! Pluggable scheduling oracle
//!
//! The stores never call the interval math directly; they go through the
//! `Scheduler` trait so the algorithm can be swapped out. A scheduler that
//! fails must never block the learner: `review_or_reset` falls back to a
//! fresh due-now card.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::algorithm::calculate_next_review;
use super::models::{CardState, Rating};

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("scheduler produced a due date in the past: {0}")]
    DueDateInPast(DateTime<Utc>),

    #[error("scheduler produced a non-finite ease factor")]
    InvalidEaseFactor,
}

/// Computes the next card state after a review.
///
/// A missing card (`None`) is treated as due-now before scheduling. The
/// returned card's `due_date` is always `>= now`.
pub trait Scheduler {
    fn next(
        &self,
        card: Option<&CardState>,
        now: DateTime<Utc>,
        rating: Rating,
    ) -> Result<CardState, SchedulerError>;
}

/// The default SM-2 backed scheduler
#[derive(Debug, Default, Clone, Copy)]
pub struct Sm2Scheduler;

impl Scheduler for Sm2Scheduler {
    fn next(
        &self,
        card: Option<&CardState>,
        now: DateTime<Utc>,
        rating: Rating,
    ) -> Result<CardState, SchedulerError> {
        let current = card.cloned().unwrap_or_else(|| CardState::fresh(now));

        let quality = rating.quality();
        let result = calculate_next_review(&current, quality, now);

        if !result.ease_factor.is_finite() {
            return Err(SchedulerError::InvalidEaseFactor);
        }
        if result.due_date < now {
            return Err(SchedulerError::DueDateInPast(result.due_date));
        }

        let mut next = current;
        next.interval = result.interval;
        next.ease_factor = result.ease_factor;
        next.due_date = result.due_date;
        next.status = result.status;
        next.review_count += 1;
        if quality >= 3 {
            next.correct_count += 1;
        }

        Ok(next)
    }
}

/// Apply a review through the scheduler, recovering from oracle failure by
/// re-initializing the card to a fresh due-now state. The learner is never
/// left permanently blocked from reviewing an item.
pub fn review_or_reset<S: Scheduler + ?Sized>(
    scheduler: &S,
    card: Option<&CardState>,
    now: DateTime<Utc>,
    rating: Rating,
) -> CardState {
    match scheduler.next(card, now, rating) {
        Ok(next) => next,
        Err(err) => {
            log::error!("Scheduler failed, resetting card to due-now: {}", err);
            CardState::fresh(now)
        }
    }
}
