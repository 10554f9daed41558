//! Fixed-interval timers
//!
//! Each timer is an explicit instance checked against the loop's single
//! clock read. Firing resets the reference point to the current tick,
//! not to a fixed schedule, so late checks accumulate additive drift
//! instead of bursting to catch up - the right behavior for telemetry
//! cadence, where "roughly every second" beats "exactly 3600 per hour".

use crate::time::Timestamp;

/// Timer that fires once its interval has elapsed since the last fire
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval_ms: u64,
    last_fire: Timestamp,
}

impl IntervalTimer {
    /// Timer with the given interval, referenced to `now`
    pub fn new(interval_ms: u64, now: Timestamp) -> Self {
        Self {
            interval_ms,
            last_fire: now,
        }
    }

    /// True when the interval has elapsed; resets the reference point to
    /// `now` on fire
    pub fn fire(&mut self, now: Timestamp) -> bool {
        if now.saturating_sub(self.last_fire) >= self.interval_ms {
            self.last_fire = now;
            true
        } else {
            false
        }
    }

    /// Configured interval in milliseconds
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{FixedTime, TimeSource};

    #[test]
    fn fires_after_interval() {
        let mut clock = FixedTime::new(0);
        let mut timer = IntervalTimer::new(1000, clock.now());

        clock.advance(999);
        assert!(!timer.fire(clock.now()));

        clock.advance(1);
        assert!(timer.fire(clock.now()));

        // Reference point reset: not again until another full interval
        assert!(!timer.fire(clock.now()));
    }

    #[test]
    fn drift_is_additive_not_bursty() {
        let mut clock = FixedTime::new(0);
        let mut timer = IntervalTimer::new(1000, clock.now());

        // Checked 300ms late: fires once, then needs a full interval
        // from the late check, no catch-up burst
        clock.advance(1300);
        assert!(timer.fire(clock.now()));
        clock.advance(999);
        assert!(!timer.fire(clock.now()));
        clock.advance(1);
        assert!(timer.fire(clock.now()));
    }

    #[test]
    fn independent_timers_share_one_clock() {
        let mut clock = FixedTime::new(0);
        let mut fast = IntervalTimer::new(800, clock.now());
        let mut slow = IntervalTimer::new(15_000, clock.now());

        clock.advance(800);
        assert!(fast.fire(clock.now()));
        assert!(!slow.fire(clock.now()));

        clock.set(15_000);
        assert!(fast.fire(clock.now()));
        assert!(slow.fire(clock.now()));
    }
}
