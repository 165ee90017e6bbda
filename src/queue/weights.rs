//! Weighting for the year event-creation draw
//!
//! Two signals combine: a recency ramp (recent history is more useful to
//! peg than antiquity, but the last few years are penalized) and a
//! sparsity bonus for centuries and decades that have no events yet.

use rand::Rng;

use crate::events::EventStore;
use crate::years::{parse_year_id, MAX_YEAR};

/// Recency bias: 0.1 at year 0, ramping linearly to 1.0 at 2000, then a
/// flat penalty for anything later
pub fn base_weight(year: u16) -> f64 {
    if year == 0 {
        0.1
    } else if year <= 2000 {
        0.1 + (year as f64 / 2000.0) * 0.9
    } else {
        0.05
    }
}

/// Sparsity bonus: 3.0 if the year's century has no events at all, 2.0 if
/// the century has some but the decade has none, otherwise 1.0
pub fn sparsity_multiplier(year: u16, events: &EventStore) -> f64 {
    let century_start = (year / 100) * 100;
    let century_end = (century_start + 99).min(MAX_YEAR);
    if !events.has_events_in(century_start..=century_end) {
        return 3.0;
    }

    let decade_start = (year / 10) * 10;
    let decade_end = (decade_start + 9).min(MAX_YEAR);
    if !events.has_events_in(decade_start..=decade_end) {
        return 2.0;
    }

    1.0
}

pub fn final_weight(year: u16, events: &EventStore) -> f64 {
    base_weight(year) * sparsity_multiplier(year, events)
}

/// Weighted draw over year identifiers: pick `r` uniform in
/// `[0, totalWeight)` and walk the candidates subtracting weights.
///
/// The first candidate is the fallback in case floating-point drift
/// exhausts the list without a hit; with exact arithmetic that cannot
/// happen.
pub fn pick_weighted_year<'a, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &'a [String],
    events: &EventStore,
) -> Option<&'a String> {
    if candidates.is_empty() {
        return None;
    }

    let weights: Vec<f64> = candidates
        .iter()
        .map(|id| parse_year_id(id).map_or(0.0, |year| final_weight(year, events)))
        .collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return candidates.first();
    }

    let mut remaining = rng.gen::<f64>() * total;
    for (candidate, weight) in candidates.iter().zip(&weights) {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(candidate);
        }
    }

    candidates.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_base_weight_ramp() {
        assert_close(base_weight(0), 0.1);
        assert_close(base_weight(1000), 0.55);
        assert_close(base_weight(1850), 0.9325);
        assert_close(base_weight(2000), 1.0);
        assert_close(base_weight(2001), 0.05);
        assert_close(base_weight(2025), 0.05);
    }

    #[test]
    fn test_sparsity_multiplier_tiers() {
        let mut events = EventStore::new();
        events
            .add_event(1755, "quake".to_string(), "image".to_string())
            .unwrap();

        // Century 1700-1799 has an event, decade 1750-1759 has an event
        assert_close(sparsity_multiplier(1755, &events), 1.0);
        assert_close(sparsity_multiplier(1750, &events), 1.0);
        // Same century, empty decade
        assert_close(sparsity_multiplier(1760, &events), 2.0);
        assert_close(sparsity_multiplier(1799, &events), 2.0);
        // Empty century
        assert_close(sparsity_multiplier(1850, &events), 3.0);
        assert_close(sparsity_multiplier(44, &events), 3.0);
    }

    #[test]
    fn test_century_span_is_clamped_to_timeline_end() {
        let mut events = EventStore::new();
        events
            .add_event(2010, "x".to_string(), "y".to_string())
            .unwrap();
        // 2025's century span is 2000..=2025 (has the event) and its
        // decade span is 2020..=2025 (empty)
        assert_close(sparsity_multiplier(2025, &events), 2.0);
        assert_close(sparsity_multiplier(2015, &events), 1.0);
    }

    #[test]
    fn test_pick_weighted_year_empty_and_single() {
        let events = EventStore::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(pick_weighted_year(&mut rng, &[], &events).is_none());

        let only = vec!["1850".to_string()];
        assert_eq!(
            pick_weighted_year(&mut rng, &only, &events).unwrap(),
            "1850"
        );
    }

    #[test]
    fn test_draw_frequencies_follow_final_weights() {
        // 1755 saturates its century and decade; 1760 shares the century
        // (x2), 1850 sits in an empty century (x3)
        let mut events = EventStore::new();
        events
            .add_event(1755, "quake".to_string(), "image".to_string())
            .unwrap();

        let candidates: Vec<String> = vec!["1750", "1760", "1850"]
            .into_iter()
            .map(String::from)
            .collect();

        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<&str, u32> = HashMap::new();
        let draws = 100_000;
        for _ in 0..draws {
            let picked = pick_weighted_year(&mut rng, &candidates, &events).unwrap();
            *counts.entry(picked.as_str()).or_default() += 1;
        }

        let expected: HashMap<&str, f64> = [
            ("1750", final_weight(1750, &events)),
            ("1760", final_weight(1760, &events)),
            ("1850", final_weight(1850, &events)),
        ]
        .into_iter()
        .collect();
        let total: f64 = expected.values().sum();

        for (year, weight) in expected {
            let observed = counts[year] as f64 / draws as f64;
            let predicted = weight / total;
            assert!(
                (observed - predicted).abs() < 0.01,
                "{}: observed {:.4}, predicted {:.4}",
                year,
                observed,
                predicted
            );
        }

        // The sparsity tiers dominate the small base-weight differences
        // here: empty century beats empty decade beats saturated
        assert!(counts["1850"] > counts["1760"]);
        assert!(counts["1760"] > counts["1750"]);
    }
}
