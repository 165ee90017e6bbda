//! Spaced repetition system: card state, ratings, and the scheduling oracle

pub mod algorithm;
pub mod models;
pub mod scheduler;

pub use models::{CardState, CardStatus, Direction, Rating};
pub use scheduler::{review_or_reset, Scheduler, SchedulerError, Sm2Scheduler};
