//! Time-windowed heart-rate sample buffer
//!
//! Fixed-capacity, oldest-first ring of raw readings. Entries leave the
//! buffer by age (older than the retention window) or by capacity
//! pressure, never by value.

use heapless::Deque;

use super::events::ErrorKind;

/// Maximum samples retained regardless of age
pub const WINDOW_CAPACITY: usize = 96;

/// Default retention window in seconds
pub const DEFAULT_RETENTION_S: u32 = 60;

/// A single raw heart-rate reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Arrival time in whole seconds
    pub timestamp_s: u32,
    /// Beats per minute, always positive once stored
    pub bpm: u16,
}

/// Bounded time-ordered window of samples
///
/// Callers must supply non-decreasing `now_s` across calls; a clock that
/// jumps backward suspends age eviction until time catches up (see
/// [`push`](Self::push)). The capacity bound holds either way.
#[derive(Debug)]
pub struct SampleWindow {
    /// Samples in arrival order, oldest at the front
    samples: Deque<Sample, WINDOW_CAPACITY>,
    /// Age limit in seconds
    retention_s: u32,
    /// Running total of samples discarded by capacity pressure
    capacity_evictions: u32,
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleWindow {
    /// Create a window with the default retention
    pub fn new() -> Self {
        Self::with_retention(DEFAULT_RETENTION_S)
    }

    /// Create a window with a custom retention in seconds
    pub fn with_retention(retention_s: u32) -> Self {
        Self {
            samples: Deque::new(),
            retention_s,
            capacity_evictions: 0,
        }
    }

    /// Append a reading taken at `now_s`
    ///
    /// Rejects a zero reading with [`ErrorKind::InvalidSample`] without
    /// touching the buffer. Otherwise evicts every entry older than the
    /// retention window, then the single oldest entry if the buffer is
    /// still full, and appends at the back.
    pub fn push(&mut self, bpm: u16, now_s: u32) -> Result<(), ErrorKind> {
        if bpm == 0 {
            return Err(ErrorKind::InvalidSample);
        }

        self.evict_expired(now_s);

        if self.samples.is_full() {
            // Safety bound for bursts arriving faster than they age out
            let _ = self.samples.pop_front();
            self.capacity_evictions = self.capacity_evictions.saturating_add(1);
        }

        let _ = self.samples.push_back(Sample {
            timestamp_s: now_s,
            bpm,
        });
        Ok(())
    }

    /// Drop entries older than the retention window
    ///
    /// Oldest-first ordering means expired entries are contiguous at the
    /// front. The saturating age means a backwards `now_s` evicts nothing.
    fn evict_expired(&mut self, now_s: u32) {
        while let Some(oldest) = self.samples.front().copied() {
            if now_s.saturating_sub(oldest.timestamp_s) > self.retention_s {
                let _ = self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Rolling swing: max minus min over the retained samples
    ///
    /// Returns 0 when fewer than 2 samples are present. Single linear
    /// scan, no mutation.
    pub fn max_minus_min(&self) -> u16 {
        if self.samples.len() < 2 {
            return 0;
        }

        let mut min = u16::MAX;
        let mut max = 0u16;
        for sample in self.samples.iter() {
            min = min.min(sample.bpm);
            max = max.max(sample.bpm);
        }
        max - min
    }

    /// Number of currently retained samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no samples are retained
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest retained sample, if any
    pub fn oldest(&self) -> Option<Sample> {
        self.samples.front().copied()
    }

    /// Newest retained sample, if any
    pub fn newest(&self) -> Option<Sample> {
        self.samples.back().copied()
    }

    /// Configured retention in seconds
    pub fn retention_s(&self) -> u32 {
        self.retention_s
    }

    /// Running total of capacity evictions
    ///
    /// Not reset by [`clear`](Self::clear); this is a lifetime diagnostic.
    pub fn capacity_evictions(&self) -> u32 {
        self.capacity_evictions
    }

    /// Discard all retained samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_delta_needs_two_samples() {
        let mut window = SampleWindow::new();
        assert_eq!(window.max_minus_min(), 0);

        window.push(72, 0).unwrap();
        assert_eq!(window.max_minus_min(), 0);
    }

    #[test]
    fn test_delta_is_max_minus_min() {
        let mut window = SampleWindow::new();
        window.push(40, 0).unwrap();
        window.push(70, 1).unwrap();
        assert_eq!(window.max_minus_min(), 30);

        // A value between the extremes does not change the swing
        window.push(55, 2).unwrap();
        assert_eq!(window.max_minus_min(), 30);
    }

    #[test]
    fn test_zero_reading_rejected() {
        let mut window = SampleWindow::new();
        window.push(60, 0).unwrap();

        assert_eq!(window.push(0, 1), Err(ErrorKind::InvalidSample));
        assert_eq!(window.len(), 1);
        assert_eq!(window.newest().map(|s| s.bpm), Some(60));
    }

    #[test]
    fn test_age_eviction_at_boundary() {
        let mut window = SampleWindow::new();
        window.push(60, 0).unwrap();

        // Exactly at the retention limit the sample survives
        window.push(70, DEFAULT_RETENTION_S).unwrap();
        assert_eq!(window.len(), 2);

        // One second past the limit the first sample is gone
        window.push(80, DEFAULT_RETENTION_S + 1).unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window.oldest().map(|s| s.bpm), Some(70));
    }

    #[test]
    fn test_eviction_shrinks_the_swing() {
        let mut window = SampleWindow::new();
        window.push(40, 0).unwrap();
        window.push(70, 5).unwrap();
        assert_eq!(window.max_minus_min(), 30);

        // Both earlier samples age out, leaving a singleton
        window.push(55, 100).unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window.max_minus_min(), 0);
    }

    #[test]
    fn test_capacity_eviction_drops_oldest() {
        let mut window = SampleWindow::new();

        // Fill to capacity within the retention window
        for i in 0..WINDOW_CAPACITY {
            window.push(100 + i as u16, 0).unwrap();
        }
        assert_eq!(window.len(), WINDOW_CAPACITY);
        assert_eq!(window.capacity_evictions(), 0);

        // One more push evicts the very first sample
        window.push(50, 1).unwrap();
        assert_eq!(window.len(), WINDOW_CAPACITY);
        assert_eq!(window.oldest().map(|s| s.bpm), Some(101));
        assert_eq!(window.newest().map(|s| s.bpm), Some(50));
        assert_eq!(window.capacity_evictions(), 1);
    }

    #[test]
    fn test_backwards_clock_keeps_capacity_bound() {
        let mut window = SampleWindow::new();
        window.push(60, 100).unwrap();

        // Earlier `now_s` than the stored sample: nothing ages out,
        // the push itself still lands
        window.push(70, 40).unwrap();
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_clear_keeps_eviction_total() {
        let mut window = SampleWindow::new();
        for i in 0..=WINDOW_CAPACITY {
            window.push(90 + i as u16, 0).unwrap();
        }
        assert_eq!(window.capacity_evictions(), 1);

        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.max_minus_min(), 0);
        assert_eq!(window.capacity_evictions(), 1);
    }

    proptest! {
        #[test]
        fn retained_samples_stay_bounded_and_fresh(
            steps in prop::collection::vec((1u16..=250u16, 0u32..=7u32), 1..200)
        ) {
            let mut window = SampleWindow::new();
            let mut now_s = 0u32;

            for (bpm, advance) in steps {
                now_s += advance;
                prop_assert!(window.push(bpm, now_s).is_ok());

                // Capacity bound holds after every push
                prop_assert!(window.len() <= WINDOW_CAPACITY);

                // Oldest-first order means checking the front suffices
                // for the freshness invariant
                if let Some(oldest) = window.oldest() {
                    prop_assert!(now_s - oldest.timestamp_s <= window.retention_s());
                }
            }
        }
    }
}
