//! Digit associations: the phonetic sound table for digits 0-9

pub mod models;
pub mod store;

pub use models::{DigitAssociation, IgnoredSounds};
pub use store::{DigitAssociationStore, DigitError};
