//! Year associations: the historical timeline from year 0 to the present

pub mod models;
pub mod store;

pub use models::{Year, MAX_YEAR};
pub use store::{parse_year_id, year_id, YearError, YearStore};
