// Copyright 2025 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-shot dismissal deadline.

/// An owned, cancellable, single-shot deadline.
///
/// The timer only stores the deadline. The host's event loop is asked for a wakeup
/// separately, and [`DismissTimer::take_due`] decides whether that wakeup fires.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DismissTimer {
    deadline: Option<u64>,
}

impl DismissTimer {
    /// An unarmed timer.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm for `now + delay`, replacing any earlier deadline. Returns the deadline.
    pub fn arm(&mut self, now: u64, delay: u64) -> u64 {
        let deadline = now.saturating_add(delay);
        self.deadline = Some(deadline);
        deadline
    }

    /// Disarm. Returns `true` if the timer was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Pending deadline.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while armed.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarm and return `true` if the deadline has passed at `now`.
    pub fn take_due(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let mut timer = DismissTimer::new();
        assert_eq!(timer.arm(1_000, 200), 1_200);
        assert!(!timer.take_due(1_199));
        assert!(timer.is_armed());
        assert!(timer.take_due(1_200));
        assert!(!timer.take_due(5_000));
    }

    #[test]
    fn rearming_replaces_deadline() {
        let mut timer = DismissTimer::new();
        timer.arm(0, 200);
        timer.arm(100, 200);
        assert_eq!(timer.deadline(), Some(300));
        assert!(!timer.take_due(250));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = DismissTimer::new();
        timer.arm(0, 10);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.take_due(u64::MAX));
    }
}
