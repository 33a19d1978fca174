//! One-second countdown primitive.
//!
//! The countdown has no thread and no clock of its own. Whoever owns it calls
//! [`Countdown::tick`] once per elapsed second; the tick that brings the
//! remaining time to zero reports expiry and deactivates the countdown.
//!
//! ```text
//! start(n) -> tick x n -> expired (inactive)
//!         \-> cancel() -> inactive, no expiry
//! ```

use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: u64,
    active: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a new countdown, replacing any running one.
    pub fn start(&mut self, duration_secs: u64) {
        if self.active {
            trace!(remaining = self.remaining_secs, "countdown replaced");
        }
        self.remaining_secs = duration_secs;
        self.active = true;
    }

    /// Set the displayed time without starting. A later `tick` does nothing.
    pub fn prime(&mut self, duration_secs: u64) {
        self.remaining_secs = duration_secs;
        self.active = false;
    }

    /// Stop without expiring. Returns the seconds that were left.
    ///
    /// Safe to call when nothing is running.
    pub fn cancel(&mut self) -> u64 {
        self.active = false;
        self.remaining_secs
    }

    /// Advance by one elapsed second.
    ///
    /// Returns `true` exactly once per `start`, on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.active = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_once_per_tick_and_expires_once() {
        let mut c = Countdown::new();
        c.start(3);
        assert_eq!(c.remaining_secs(), 3);

        assert!(!c.tick());
        assert_eq!(c.remaining_secs(), 2);
        assert!(!c.tick());
        assert_eq!(c.remaining_secs(), 1);
        assert!(c.tick());
        assert_eq!(c.remaining_secs(), 0);
        assert!(!c.is_active());

        // Further ticks never expire again.
        assert!(!c.tick());
        assert!(!c.tick());
    }

    #[test]
    fn cancel_suppresses_expiry() {
        let mut c = Countdown::new();
        c.start(1);
        assert_eq!(c.cancel(), 1);
        assert!(!c.tick());
        assert_eq!(c.remaining_secs(), 1);
    }

    #[test]
    fn cancel_when_idle_is_noop() {
        let mut c = Countdown::new();
        assert_eq!(c.cancel(), 0);
        assert!(!c.is_active());
    }

    #[test]
    fn restart_replaces_running_countdown() {
        let mut c = Countdown::new();
        c.start(2);
        c.tick();
        c.start(5);
        assert_eq!(c.remaining_secs(), 5);
        for _ in 0..4 {
            assert!(!c.tick());
        }
        assert!(c.tick());
    }

    #[test]
    fn primed_countdown_holds_until_started() {
        let mut c = Countdown::new();
        c.prime(4);
        assert_eq!(c.remaining_secs(), 4);
        assert!(!c.is_active());
        assert!(!c.tick());
        assert_eq!(c.remaining_secs(), 4);

        c.start(c.remaining_secs());
        assert!(!c.tick());
        assert_eq!(c.remaining_secs(), 3);
    }

    #[test]
    fn zero_duration_expires_on_first_tick() {
        let mut c = Countdown::new();
        c.start(0);
        assert!(c.is_active());
        assert!(c.tick());
    }
}
