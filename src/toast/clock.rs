// SPDX-License-Identifier: MPL-2.0
//! Time sources for toast expiry.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source consulted when toasts are created and ticked.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Virtual time that only moves when [`advance`](ManualClock::advance) is called.
///
/// Clones share the same timeline, so a test can keep one handle and give
/// another to the manager.
#[derive(Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("elapsed", &self.elapsed.get())
            .finish()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

/// A pending auto-dismiss, stored on the record it belongs to.
///
/// Dropping the record drops the schedule, so a manual dismiss can never be
/// followed by a late expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledDismiss {
    deadline: Instant,
}

impl ScheduledDismiss {
    /// Schedules a dismissal `after` from `now`.
    ///
    /// `None` for a zero duration, or one too long to be represented as an
    /// `Instant`; both mean the toast never expires.
    #[must_use]
    pub fn after(now: Instant, after: Duration) -> Option<Self> {
        if after.is_zero() {
            return None;
        }
        now.checked_add(after).map(|deadline| Self { deadline })
    }

    #[must_use]
    pub fn deadline(self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn is_due(self, now: Instant) -> bool {
        now >= self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_on_advance() {
        let clock = ManualClock::new();
        let start = clock.now();
        assert_eq!(clock.now(), start);

        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now() - start, Duration::from_millis(250));
    }

    #[test]
    fn clones_share_the_timeline() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(Duration::from_secs(1));
        assert_eq!(clock.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn zero_duration_schedules_nothing() {
        assert!(ScheduledDismiss::after(Instant::now(), Duration::ZERO).is_none());
    }

    #[test]
    fn unrepresentable_duration_schedules_nothing() {
        assert!(ScheduledDismiss::after(Instant::now(), Duration::MAX).is_none());
    }

    #[test]
    fn schedule_is_due_exactly_at_deadline() {
        let clock = ManualClock::new();
        let schedule = ScheduledDismiss::after(clock.now(), Duration::from_millis(1000))
            .expect("non-zero duration");

        clock.advance(Duration::from_millis(999));
        assert!(!schedule.is_due(clock.now()));
        clock.advance(Duration::from_millis(1));
        assert!(schedule.is_due(clock.now()));
    }
}
