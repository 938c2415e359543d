//! Debounce and throttle timer wrappers
//!
//! Stateful wrappers with explicit cancel semantics, driven by the caller's
//! event loop rather than by threads or timers. A [`Debouncer`] holds at most
//! one pending value and a deadline; scheduling again cancels and reschedules,
//! so a newer call always supersedes a pending one. The caller polls with its
//! current clock reading, which keeps every test deterministic.

use std::time::{Duration, Instant};

/// Quiet period for the menu search input.
pub const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Coalesces rapid events into one delivery per quiet period.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Replaces any pending value and re-arms the deadline at
    /// `now + quiet_period`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.quiet_period,
        });
    }

    /// Drops the pending value, returning it for callers that want to apply
    /// it immediately instead.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Delivers the pending value once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref()?.deadline <= now {
            self.cancel()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The instant the pending value becomes deliverable, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}

/// Lets an event through at most once per interval.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_allowed: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_allowed: None,
        }
    }

    /// Returns true when the event may fire, recording the firing time.
    pub fn allow(&mut self, now: Instant) -> bool {
        match self.last_allowed {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_allowed = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debouncer_waits_out_the_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule("pasta", start);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), Some("pasta"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_newer_schedule_supersedes_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule("pa", start);
        debouncer.schedule("pasta", start + Duration::from_millis(200));

        // The first deadline has passed but was superseded
        assert_eq!(debouncer.poll(start + Duration::from_millis(350)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("pasta")
        );
    }

    #[test]
    fn test_cancel_returns_the_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(SEARCH_QUIET_PERIOD);

        debouncer.schedule("tira", start);
        assert_eq!(debouncer.cancel(), Some("tira"));
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_poll_without_schedule_is_none() {
        let mut debouncer: Debouncer<String> = Debouncer::new(SEARCH_QUIET_PERIOD);
        assert_eq!(debouncer.poll(Instant::now()), None);
        assert_eq!(debouncer.next_deadline(), None);
    }

    #[test]
    fn test_throttle_blocks_within_interval() {
        let start = Instant::now();
        let mut throttle = Throttle::new(Duration::from_millis(100));

        assert!(throttle.allow(start));
        assert!(!throttle.allow(start + Duration::from_millis(50)));
        assert!(throttle.allow(start + Duration::from_millis(100)));
        assert!(!throttle.allow(start + Duration::from_millis(150)));
    }
}
