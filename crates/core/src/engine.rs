use crate::state::WindowReport;

/// Default window capacity.
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Sliding-window averaging engine.
///
/// Owns the pool of distinct ingested values and the previous/current window
/// pair.  The only mutating operation is [`ingest`](Self::ingest); there is
/// no removal, no reset, and no capacity change after construction.
#[derive(Debug, Clone)]
pub struct WindowEngine {
    window_size: usize,
    /// Distinct values in first-insertion order.
    pool: Vec<u64>,
    previous: Vec<u64>,
    current: Vec<u64>,
}

impl WindowEngine {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size: window_size.max(1),
            pool: Vec::new(),
            previous: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Fold a batch of values into the pool and rotate the window pair.
    ///
    /// Values already present — including duplicates within the batch itself
    /// — are dropped.  The current window becomes the trailing
    /// `window_size` distinct values, and the pre-call window slides into
    /// the previous slot.  Each call runs to completion; callers must not
    /// overlap refreshes.
    pub fn ingest(&mut self, batch: &[u64]) -> WindowReport {
        for &value in batch {
            if !self.pool.contains(&value) {
                self.pool.push(value);
            }
        }

        let start = self.pool.len().saturating_sub(self.window_size);
        let updated = self.pool[start..].to_vec();

        let average = mean(&updated);

        self.previous = std::mem::replace(&mut self.current, updated);

        WindowReport {
            previous: self.previous.clone(),
            current: self.current.clone(),
            average,
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Every distinct value seen so far, oldest first.
    pub fn pool(&self) -> &[u64] {
        &self.pool
    }

    pub fn current_window(&self) -> &[u64] {
        &self.current
    }

    pub fn previous_window(&self) -> &[u64] {
        &self.previous
    }
}

impl Default for WindowEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

/// Arithmetic mean rounded to 2 decimal places; `None` for an empty slice.
fn mean(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().sum();
    let raw = sum as f64 / values.len() as f64;
    Some((raw * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENS: [u64; 8] = [2, 4, 6, 8, 10, 12, 14, 16];
    const PRIMES: [u64; 5] = [2, 3, 5, 7, 11];
    const FIBONACCI: [u64; 10] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34];

    #[test]
    fn first_refresh_takes_whole_batch() {
        let mut engine = WindowEngine::default();
        let report = engine.ingest(&EVENS);
        assert!(report.previous.is_empty());
        assert_eq!(report.current, EVENS.to_vec());
        assert_eq!(report.average, Some(9.0));
    }

    #[test]
    fn repeated_batch_is_idempotent_on_pool() {
        let mut engine = WindowEngine::default();
        engine.ingest(&EVENS);
        let report = engine.ingest(&EVENS);
        assert_eq!(engine.pool(), &EVENS);
        assert_eq!(report.current, EVENS.to_vec());
        assert_eq!(report.previous, report.current);
    }

    #[test]
    fn switching_feeds_accumulates_distinct_values() {
        let mut engine = WindowEngine::default();
        engine.ingest(&EVENS);
        let report = engine.ingest(&PRIMES);
        // 2 is shared, so 8 + 5 - 1 = 12 distinct values total.
        assert_eq!(engine.pool().len(), 12);
        assert_eq!(report.current, vec![6, 8, 10, 12, 14, 16, 3, 5, 7, 11]);
        assert_eq!(report.average, Some(9.2)); // 92 / 10
    }

    #[test]
    fn in_batch_duplicates_collapse() {
        let mut engine = WindowEngine::default();
        let report = engine.ingest(&FIBONACCI);
        assert_eq!(engine.pool(), &[0, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(report.average, Some(6.22)); // 56 / 9 = 6.222…
    }

    #[test]
    fn empty_batch_on_empty_state_reports_no_data() {
        let mut engine = WindowEngine::default();
        let report = engine.ingest(&[]);
        assert!(report.previous.is_empty());
        assert!(report.current.is_empty());
        assert_eq!(report.average, None);
    }

    #[test]
    fn pool_never_holds_duplicates() {
        let mut engine = WindowEngine::default();
        for batch in [&EVENS[..], &PRIMES[..], &FIBONACCI[..], &EVENS[..]] {
            engine.ingest(batch);
            let mut seen = std::collections::HashSet::new();
            assert!(engine.pool().iter().all(|v| seen.insert(*v)));
        }
    }

    #[test]
    fn window_never_exceeds_capacity() {
        let mut engine = WindowEngine::default();
        engine.ingest(&EVENS);
        assert_eq!(engine.current_window().len(), 8);
        engine.ingest(&PRIMES);
        assert_eq!(engine.current_window().len(), 10);
        engine.ingest(&FIBONACCI);
        assert_eq!(engine.current_window().len(), 10);
    }

    #[test]
    fn history_rotates_exactly_one_step() {
        let mut engine = WindowEngine::default();
        let first = engine.ingest(&EVENS);
        let second = engine.ingest(&PRIMES);
        assert_eq!(second.previous, first.current);
        let third = engine.ingest(&FIBONACCI);
        assert_eq!(third.previous, second.current);
    }

    #[test]
    fn small_capacity_keeps_most_recent_suffix() {
        let mut engine = WindowEngine::new(3);
        engine.ingest(&[1, 2, 3, 4, 5]);
        assert_eq!(engine.current_window(), &[3, 4, 5]);
        assert_eq!(engine.pool().len(), 5);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let mut engine = WindowEngine::default();
        let report = engine.ingest(&[0, 1, 3]); // 4 / 3 = 1.333…
        assert_eq!(report.average, Some(1.33));
    }
}
