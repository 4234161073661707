//! Timer slot: the engine's single pending "next step".
//!
//! The engine never holds more than one timer. Arming the slot for a new
//! phase drops whatever was armed before, and [`TimerSlot::cancel`] empties
//! it for good on teardown.

use std::time::Duration;

/// The phase a pending timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Initial delay before the first cycle.
    Start,
    /// Reveal the next character of the current line.
    Reveal,
    /// Pause after a completed line.
    LinePause,
    /// Hold on the completed text before clearing it.
    Cooldown,
    /// Blank interval before the next cycle.
    Restart,
}

/// A timer due at `deadline` on the engine clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    /// Which step fires.
    pub kind: TimerKind,
    /// Engine-clock instant at which it fires.
    pub deadline: Duration,
}

/// Holds at most one pending timer.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<Timer>,
    closed: bool,
}

impl TimerSlot {
    /// An empty, open slot.
    pub const fn new() -> Self {
        Self {
            pending: None,
            closed: false,
        }
    }

    /// Arm the slot, replacing any pending timer.
    ///
    /// Returns the timer that was replaced. A cancelled slot ignores the
    /// request and returns `None`.
    pub fn arm(&mut self, kind: TimerKind, deadline: Duration) -> Option<Timer> {
        if self.closed {
            return None;
        }
        let replaced = self.pending.replace(Timer { kind, deadline });
        if let Some(old) = replaced {
            tracing::trace!(old = ?old.kind, new = ?kind, "replaced pending timer");
        }
        replaced
    }

    /// The pending timer, if any.
    #[inline]
    pub const fn peek(&self) -> Option<Timer> {
        self.pending
    }

    /// Remove and return the pending timer if it is due at `now`.
    pub fn take_due(&mut self, now: Duration) -> Option<Timer> {
        match self.pending {
            Some(timer) if timer.deadline <= now => self.pending.take(),
            _ => None,
        }
    }

    /// Drop the pending timer and refuse any future ones.
    pub fn cancel(&mut self) -> Option<Timer> {
        self.closed = true;
        self.pending.take()
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[inline]
    pub const fn is_cancelled(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_arm_replaces_pending() {
        let mut slot = TimerSlot::new();
        assert!(slot.arm(TimerKind::Reveal, MS * 10).is_none());
        let old = slot.arm(TimerKind::LinePause, MS * 20).unwrap();
        assert_eq!(old.kind, TimerKind::Reveal);
        assert_eq!(slot.peek().unwrap().kind, TimerKind::LinePause);
    }

    #[test]
    fn test_take_due_respects_deadline() {
        let mut slot = TimerSlot::new();
        slot.arm(TimerKind::Start, MS * 5);
        assert!(slot.take_due(MS * 4).is_none());
        assert_eq!(slot.take_due(MS * 5).unwrap().kind, TimerKind::Start);
        assert!(slot.peek().is_none());
    }

    #[test]
    fn test_cancel_closes_slot() {
        let mut slot = TimerSlot::new();
        slot.arm(TimerKind::Reveal, MS);
        assert!(slot.cancel().is_some());
        assert!(slot.is_cancelled());
        slot.arm(TimerKind::Reveal, MS);
        assert!(slot.peek().is_none());
    }
}
