//! Due-set aggregation and the category registry
//!
//! Everything here is a pure read of current store state: the registry is
//! rebuilt on every query because reviews and authoring change the
//! underlying sets between calls.

use chrono::{DateTime, Utc};

use super::models::{CategoryInfo, TaskCategory};
use crate::profile::Profile;
use crate::srs::Direction;
use crate::years::year_id;

/// The eligible items for one category, in store enumeration order
pub fn eligible_items(
    category: TaskCategory,
    profile: &Profile,
    now: DateTime<Utc>,
) -> Vec<String> {
    match category {
        TaskCategory::RememberWordByNumber => profile
            .numbers
            .due_or_new(Direction::NumberToWord, now)
            .unwrap_or_default(),
        TaskCategory::RememberNumberByWord => profile
            .numbers
            .due_or_new(Direction::WordToNumber, now)
            .unwrap_or_default(),
        TaskCategory::RememberSoundByDigit => profile
            .digits
            .due_or_new(Direction::DigitToSound, now)
            .unwrap_or_default(),
        TaskCategory::RememberDigitBySound => profile
            .digits
            .due_or_new(Direction::SoundToDigit, now)
            .unwrap_or_default(),
        TaskCategory::RememberEventsByYear => profile
            .events
            .years_with_events()
            .into_iter()
            .filter(|year| profile.years.is_due_or_new(*year, now))
            .map(year_id)
            .collect(),
        TaskCategory::RememberYearByEvent => profile
            .events
            .due_or_new(Direction::EventToYear, now)
            .unwrap_or_default(),
        TaskCategory::CreateNumberAssociation => profile.numbers.unassociated_numbers(),
        TaskCategory::CreateEventsForYear => creatable_event_years(profile),
    }
}

/// Years a learner could start filling with events: no events recorded
/// yet, but both two-digit halves of the year already have peg words.
pub fn creatable_event_years(profile: &Profile) -> Vec<String> {
    profile
        .years
        .all_years()
        .filter(|year| !profile.events.year_has_events(*year))
        .filter(|year| {
            let (high, low) = split_year(*year);
            profile.numbers.has_association(&high) && profile.numbers.has_association(&low)
        })
        .map(year_id)
        .collect()
}

/// Split a year into its zero-padded two-digit halves: 1850 → ("18", "50")
fn split_year(year: u16) -> (String, String) {
    let padded = format!("{:04}", year);
    (padded[..2].to_string(), padded[2..].to_string())
}

/// Build the registry: all non-empty categories in priority order.
/// Categories with zero eligible items are omitted entirely.
pub fn available_categories(profile: &Profile, now: DateTime<Utc>) -> Vec<CategoryInfo> {
    TaskCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let items = eligible_items(category, profile, now);
            if items.is_empty() {
                None
            } else {
                Some(CategoryInfo {
                    category,
                    count: items.len(),
                    items,
                })
            }
        })
        .collect()
}
