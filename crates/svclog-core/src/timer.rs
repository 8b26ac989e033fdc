//! Time source and cancellable debounce timer
//!
//! Everything runs on one logical thread, so the timer owns no thread or
//! callback. It records a deadline and a payload, and the owner polls it with
//! the current time. Scheduling again replaces the pending entry, so at most
//! one payload is ever pending.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Today's calendar date (UTC)
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock for tests and simulations
///
/// Clones share the same instant, so a test can keep one handle and advance
/// the clock a controller was built with.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: i64) {
        self.advance(Duration::milliseconds(ms));
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Single-slot debounce timer
#[derive(Debug, Clone)]
pub struct DebounceTimer<T> {
    pending: Option<(DateTime<Utc>, T)>,
}

impl<T> Default for DebounceTimer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> DebounceTimer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to become due at `deadline`
    ///
    /// Replaces any pending payload. Returns true if one was replaced.
    pub fn schedule(&mut self, payload: T, deadline: DateTime<Utc>) -> bool {
        self.pending.replace((deadline, payload)).is_some()
    }

    /// Cancel the pending payload, handing it back if there was one
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the payload if its deadline has been reached
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.cancel(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(start());
        let handle = clock.clone();
        handle.advance_ms(1500);

        assert_eq!(clock.now(), start() + Duration::milliseconds(1500));
        assert_eq!(clock.today(), "2024-03-01".parse().unwrap());
    }

    #[test]
    fn test_not_due_before_deadline() {
        let mut timer = DebounceTimer::new();
        timer.schedule("a", start() + Duration::milliseconds(500));

        assert_eq!(timer.take_due(start() + Duration::milliseconds(499)), None);
        assert!(timer.is_pending());
        assert_eq!(timer.take_due(start() + Duration::milliseconds(500)), Some("a"));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_payload_and_deadline() {
        let mut timer = DebounceTimer::new();
        assert!(!timer.schedule(1, start() + Duration::milliseconds(500)));
        assert!(timer.schedule(2, start() + Duration::milliseconds(800)));

        assert_eq!(timer.take_due(start() + Duration::milliseconds(600)), None);
        assert_eq!(timer.take_due(start() + Duration::milliseconds(800)), Some(2));
    }

    #[test]
    fn test_cancel_returns_payload() {
        let mut timer = DebounceTimer::new();
        timer.schedule("x", start());

        assert_eq!(timer.cancel(), Some("x"));
        assert_eq!(timer.cancel(), None);
        assert_eq!(timer.take_due(start()), None);
    }
}
