//! Single-slot render scheduler.
//!
//! Input edits are debounced: each edit replaces the pending deadline, so a
//! burst of typing coalesces into one render. Explicit updates and resizes
//! bypass the delay. The scheduler owns no timer; the caller passes `now`
//! and asks how long it may sleep.

use std::time::{Duration, Instant};

use crate::constants::DEBOUNCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    Immediate,
    At(Instant),
}

#[derive(Debug, Clone)]
pub struct RenderScheduler {
    delay: Duration,
    pending: Pending,
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new(DEBOUNCE)
    }
}

impl RenderScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Pending::Idle,
        }
    }

    /// An input changed: cancel any pending debounce and restart it.
    pub fn input_changed(&mut self, now: Instant) {
        if self.pending != Pending::Immediate {
            self.pending = Pending::At(now + self.delay);
        }
    }

    /// Update button or resize: render on the next poll.
    pub fn render_now(&mut self) {
        self.pending = Pending::Immediate;
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending != Pending::Idle
    }

    /// Returns `true` once when the pending render is due, clearing it.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.pending {
            Pending::Idle => false,
            Pending::Immediate => true,
            Pending::At(deadline) => now >= deadline,
        };
        if due {
            self.pending = Pending::Idle;
        }
        due
    }

    /// How long until the pending render is due, if one is pending.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        match self.pending {
            Pending::Idle => None,
            Pending::Immediate => Some(Duration::ZERO),
            Pending::At(deadline) => Some(deadline.saturating_duration_since(now)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_idle_never_fires() {
        let mut s = RenderScheduler::default();
        let t0 = Instant::now();
        assert!(!s.is_pending());
        assert!(!s.poll(t0 + 1000 * MS));
        assert_eq!(s.time_until_due(t0), None);
    }

    #[test]
    fn test_debounce_waits_for_quiet_period() {
        let mut s = RenderScheduler::default();
        let t0 = Instant::now();
        s.input_changed(t0);
        assert!(!s.poll(t0 + 149 * MS));
        assert_eq!(s.time_until_due(t0 + 100 * MS), Some(50 * MS));
        assert!(s.poll(t0 + 150 * MS));
        // Fires once only.
        assert!(!s.poll(t0 + 300 * MS));
    }

    #[test]
    fn test_burst_of_edits_coalesces() {
        let mut s = RenderScheduler::default();
        let t0 = Instant::now();
        let mut fired = 0;
        for i in 0..10 {
            let t = t0 + i * 100 * MS;
            s.input_changed(t);
            if s.poll(t + 50 * MS) {
                fired += 1;
            }
        }
        assert_eq!(fired, 0);
        assert!(s.poll(t0 + 900 * MS + 150 * MS));
    }

    #[test]
    fn test_render_now_bypasses_debounce() {
        let mut s = RenderScheduler::default();
        let t0 = Instant::now();
        s.input_changed(t0);
        s.render_now();
        assert_eq!(s.time_until_due(t0), Some(Duration::ZERO));
        assert!(s.poll(t0));
        assert!(!s.is_pending());
    }

    #[test]
    fn test_edit_after_render_now_does_not_delay_it() {
        let mut s = RenderScheduler::default();
        let t0 = Instant::now();
        s.render_now();
        s.input_changed(t0);
        assert!(s.poll(t0));
    }
}
