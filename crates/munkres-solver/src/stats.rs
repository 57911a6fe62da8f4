//! Solve statistics.
//!
//! Stack-allocated counters for one solve run.

use std::time::{Duration, Instant};

/// Statistics for a single solve.
///
/// # Example
///
/// ```
/// use munkres_solver::stats::SolveStats;
///
/// let mut stats = SolveStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_step();
/// stats.record_augmentation();
/// stats.finish();
///
/// assert_eq!(stats.step_count, 2);
/// assert_eq!(stats.augmentations, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    start_time: Option<Instant>,
    end_time: Option<Instant>,
    /// State machine transitions taken.
    pub step_count: u64,
    /// Augmenting paths flipped.
    pub augmentations: u64,
    /// Uncovered-minimum matrix adjustments.
    pub adjustments: u64,
    /// Zeros marked as primed.
    pub primes: u64,
    /// Permutations scored by brute force.
    pub permutations_evaluated: u64,
}

impl SolveStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.end_time = None;
    }

    /// Marks the end of solving, freezing [`elapsed`](Self::elapsed).
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Returns the time between `start` and `finish` (or now, while running).
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Returns the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn record_augmentation(&mut self) {
        self.augmentations += 1;
    }

    pub fn record_adjustment(&mut self) {
        self.adjustments += 1;
    }

    pub fn record_prime(&mut self) {
        self.primes += 1;
    }

    pub fn record_permutation(&mut self) {
        self.permutations_evaluated += 1;
    }
}
