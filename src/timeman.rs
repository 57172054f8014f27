//! Time Management
//!
//! Converts a remaining-clock budget into a per-move think time, and runs
//! the deadline timer that cancels a search when the budget elapses.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Remaining time state for the player to move, as reported by the caller's
/// timing source.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Clock {
    /// Time left on the player's clock.
    pub remaining: Duration,
    /// Time added back to the clock after each move.
    pub increment: Duration,
}

impl Clock {
    pub fn new(remaining: Duration, increment: Duration) -> Self {
        Self {
            remaining,
            increment,
        }
    }
}

/// Per-move time budget policy.
///
/// The shape of the policy is fixed: a capped fraction of remaining time,
/// relief from the increment when the clock can absorb it, and a floor that
/// guarantees a minimum allowance. The constants are the tuning surface;
/// `Default` carries the stock values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimePolicy {
    /// Upper cap on the base budget, in milliseconds.
    pub upper_cap: f64,
    /// Fraction of remaining clock used as base budget (remaining / divisor).
    pub clock_divisor: f64,
    /// Fraction of the increment added when the clock comfortably exceeds
    /// twice the increment.
    pub increment_factor: f64,
    /// Upper cap on the floor allowance, in milliseconds.
    pub floor_cap: f64,
    /// Fraction of remaining clock guaranteed as a minimum allowance.
    pub floor_fraction: f64,
}

impl Default for TimePolicy {
    fn default() -> Self {
        Self {
            upper_cap: 120.0,
            clock_divisor: 40.0,
            increment_factor: 0.8,
            floor_cap: 60.0,
            floor_fraction: 0.25,
        }
    }
}

impl TimePolicy {
    /// Computes the think time for one move, with ceiling rounding to whole
    /// milliseconds.
    pub fn think_time(&self, clock: Clock) -> Duration {
        let remaining = clock.remaining.as_secs_f64() * 1000.0;
        let increment = clock.increment.as_secs_f64() * 1000.0;

        let mut think = f64::min(self.upper_cap, remaining / self.clock_divisor);
        if remaining > increment * 2.0 {
            think += increment * self.increment_factor;
        }
        let floor = f64::min(self.floor_cap, remaining * self.floor_fraction);

        Duration::from_millis(f64::max(think, floor).ceil() as u64)
    }
}

/// Starts the deadline timer for one search: after `movetime` elapses, the
/// shared cancellation flag is stored once. The search polls the flag and
/// never blocks on this thread, and the thread touches nothing else, so no
/// further synchronization is needed.
pub fn start_timer(stopper: Arc<AtomicBool>, movetime: Duration) {
    thread::spawn(move || {
        thread::sleep(movetime);
        stopper.store(true, Ordering::Relaxed);
    });
}
