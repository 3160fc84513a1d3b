//! Simulated upstream number feeds.
//!
//! A real deployment would fetch these batches from a qualifier service;
//! here each category resolves to the fixed sequence the upstream test
//! server replies with.

use rollavg_core::SequenceCategory;
use tracing::debug;

/// Response for the prime qualifier.
const PRIMES: &[u64] = &[2, 3, 5, 7, 11];
/// Response for the fibonacci qualifier.  The repeated `1` is part of the
/// upstream fixture — collapsing it is the engine's job.
const FIBONACCI: &[u64] = &[0, 1, 1, 2, 3, 5, 8, 13, 21, 34];
/// Response for the even qualifier.
const EVENS: &[u64] = &[2, 4, 6, 8, 10, 12, 14, 16];
/// Response for the random qualifier.
const RANDOMS: &[u64] = &[5, 13, 9, 6, 17, 2];

/// Resolve a category to its batch of numbers.
///
/// `None` — an unrecognised qualifier — contributes nothing.  Degraded
/// input, not an error.
pub fn resolve(category: Option<SequenceCategory>) -> &'static [u64] {
    match category {
        Some(SequenceCategory::Prime) => PRIMES,
        Some(SequenceCategory::Fibonacci) => FIBONACCI,
        Some(SequenceCategory::Even) => EVENS,
        Some(SequenceCategory::Random) => RANDOMS,
        None => {
            debug!("unknown feed qualifier; contributing nothing");
            &[]
        }
    }
}

/// Resolve a raw qualifier code (`"p"`, `"f"`, `"e"`, `"r"`, or anything
/// else) straight to its batch.
pub fn resolve_code(code: &str) -> &'static [u64] {
    resolve(SequenceCategory::from_code(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_resolves_to_a_non_empty_batch() {
        for category in SequenceCategory::ALL {
            assert!(!resolve(Some(category)).is_empty());
        }
    }

    #[test]
    fn even_feed_matches_upstream_fixture() {
        assert_eq!(resolve_code("e"), &[2, 4, 6, 8, 10, 12, 14, 16]);
    }

    #[test]
    fn fibonacci_feed_carries_its_duplicate() {
        let batch = resolve(Some(SequenceCategory::Fibonacci));
        assert_eq!(batch.iter().filter(|&&v| v == 1).count(), 2);
    }

    #[test]
    fn unknown_code_contributes_nothing() {
        assert!(resolve_code("z").is_empty());
        assert!(resolve_code("").is_empty());
    }

    #[test]
    fn unknown_qualifier_yields_no_data_end_to_end() {
        let mut engine = rollavg_core::WindowEngine::default();
        let report = engine.ingest(resolve_code("z"));
        assert!(report.previous.is_empty());
        assert!(report.current.is_empty());
        assert_eq!(report.average, None);
    }
}
