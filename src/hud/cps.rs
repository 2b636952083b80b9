use std::collections::VecDeque;

const WINDOW_MS: u64 = 1000;

/// Sliding one-second window of press timestamps backing the CPS
/// readout of mouse-button widgets.
///
/// Timestamps are appended at "now" and are therefore non-decreasing as
/// long as the recording clock is monotonic. Stale entries are only
/// removed from the front during [`CpsCounter::count`], so callers must
/// query at least roughly once per frame to keep the queue small.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpsCounter {
    timestamps: VecDeque<u64>,
}

impl CpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one press at `now_ms`. No bound is enforced here.
    pub fn record(&mut self, now_ms: u64) {
        self.timestamps.push_back(now_ms);
    }

    /// Number of presses in the trailing second, measured from `now_ms`.
    ///
    /// Entries older than the window are dropped from the front; the
    /// scan stops at the first retained entry since the queue is
    /// chronological. The boundary is strict: a press exactly 1000 ms
    /// old still counts.
    ///
    /// Known limitation: if `now_ms` moves backward relative to earlier
    /// calls the purge simply stops early and the count may include
    /// entries older than the window. It never panics.
    pub fn count(&mut self, now_ms: u64) -> usize {
        while let Some(&front) = self.timestamps.front() {
            if front.saturating_add(WINDOW_MS) < now_ms {
                self.timestamps.pop_front();
            } else {
                break;
            }
        }
        self.timestamps.len()
    }

    /// Recorded entries still buffered, stale or not.
    pub fn buffered(&self) -> usize {
        self.timestamps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counter_reports_zero() {
        let mut counter = CpsCounter::new();
        assert_eq!(counter.count(0), 0);
        assert_eq!(counter.count(5000), 0);
    }

    #[test]
    fn presses_inside_the_window_are_all_counted() {
        let mut counter = CpsCounter::new();
        counter.record(0);
        counter.record(500);
        counter.record(999);
        // 0 + 1000 >= 1000, the boundary press still counts.
        assert_eq!(counter.count(1000), 3);
        // One tick later the press at 0 ages out.
        assert_eq!(counter.count(1001), 2);
    }

    #[test]
    fn queries_are_idempotent_without_new_presses() {
        let mut counter = CpsCounter::new();
        counter.record(100);
        counter.record(200);
        assert_eq!(counter.count(600), 2);
        assert_eq!(counter.count(600), 2);
    }

    #[test]
    fn purge_drops_stale_entries_from_storage() {
        let mut counter = CpsCounter::new();
        for t in [0, 100, 200, 2000] {
            counter.record(t);
        }
        assert_eq!(counter.count(2500), 1);
        assert_eq!(counter.buffered(), 1);
    }

    #[test]
    fn timestamps_equal_to_now_are_retained() {
        let mut counter = CpsCounter::new();
        counter.record(4000);
        counter.record(4000);
        counter.record(4000);
        assert_eq!(counter.count(4000), 3);
    }

    #[test]
    fn backward_clock_does_not_panic_and_never_over_purges() {
        let mut counter = CpsCounter::new();
        counter.record(5000);
        counter.record(6000);
        // Clock went backward: nothing qualifies for the purge, the
        // count is stale but the call is safe.
        assert_eq!(counter.count(100), 2);
        assert_eq!(counter.count(6000), 2);
    }

    #[test]
    fn count_never_exceeds_records_within_the_window() {
        let mut counter = CpsCounter::new();
        let presses: Vec<u64> = (0..50).map(|i| i * 37).collect();
        for &t in &presses {
            counter.record(t);
        }
        let now = 1500;
        let in_window = presses
            .iter()
            .filter(|&&t| t + WINDOW_MS >= now)
            .count();
        assert_eq!(counter.count(now), in_window);
    }
}
