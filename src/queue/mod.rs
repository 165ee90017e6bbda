//! The task queue engine
//!
//! Decides which exercise category is practiced next and which item inside
//! it. Categories are recomputed fresh on every query; selection is a
//! two-stage draw (uniform over non-empty categories, then uniform or
//! weighted within the chosen one).

pub mod categories;
pub mod engine;
pub mod models;
pub mod weights;

pub use categories::available_categories;
pub use engine::{QueueError, TaskQueue};
pub use models::{CategoryInfo, QueueTask, TaskCategory};
