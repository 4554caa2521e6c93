//! Debounce utility for the editing-surface boundary.
//!
//! # Responsibility
//! - Coalesce rapid repeated triggers (keystrokes) into one settled value.
//! - Give consumers an explicit cancel for teardown.
//!
//! # Invariants
//! - At most one value is pending at a time; a newer push replaces the
//!   older value and restarts the quiet period.
//! - A value never settles before the full quiet period has elapsed since
//!   the last push.
//! - Cancellation on teardown drops the pending value; in-flight edits are
//!   discarded, not flushed.

use std::time::{Duration, Instant};

/// Quiet period applied to editor saves and search input.
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Holds one pending value until a quiet period elapses after the last
/// push.
///
/// Designed for a single-threaded event loop: the consumer pushes on every
/// trigger and polls from its tick, so no timer thread is needed.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `value`, replacing any pending value and restarting the
    /// quiet period.
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.delay));
    }

    /// Returns the settled value once the quiet period has elapsed with no
    /// newer push, else `None`.
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    /// Drops the pending value, returning it so a caller that wants
    /// flush-on-teardown semantics could still commit it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn poll_at(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.cancel(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use std::time::{Duration, Instant};

    #[test]
    fn nothing_settles_before_the_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        debouncer.push("draft");
        assert_eq!(debouncer.poll(), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn only_the_last_pushed_value_settles() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        debouncer.push("first");
        debouncer.push("second");
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(debouncer.poll(), Some("second"));
        assert_eq!(debouncer.poll(), None);
    }

    #[test]
    fn a_new_push_restarts_the_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(60));
        debouncer.push("first");
        std::thread::sleep(Duration::from_millis(30));
        debouncer.push("second");
        // 30ms into the original window, 0ms into the restarted one.
        assert_eq!(debouncer.poll_at(Instant::now() + Duration::from_millis(30)), None);
        assert_eq!(
            debouncer.poll_at(Instant::now() + Duration::from_millis(70)),
            Some("second")
        );
    }

    #[test]
    fn cancel_drops_and_returns_the_pending_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        debouncer.push("unsaved");
        assert_eq!(debouncer.cancel(), Some("unsaved"));
        assert!(!debouncer.is_pending());
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(debouncer.poll(), None);
    }
}
