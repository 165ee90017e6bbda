//! A learner's complete training data
//!
//! The stores are plain repository objects bundled in one value and passed
//! by reference into the queue engine; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::digits::DigitAssociationStore;
use crate::events::EventStore;
use crate::numbers::NumberAssociationStore;
use crate::years::YearStore;

/// Everything one learner has authored and practiced
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub numbers: NumberAssociationStore,
    pub digits: DigitAssociationStore,
    pub years: YearStore,
    pub events: EventStore,
}

impl Profile {
    /// A fresh profile: empty pegs, the default digit sound table, the
    /// full year timeline, no events
    pub fn new() -> Self {
        Self::default()
    }
}
