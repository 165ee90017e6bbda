//! Historical events: learner-authored memorable events attached to years

pub mod models;
pub mod store;

pub use models::Event;
pub use store::{EventError, EventStore};
