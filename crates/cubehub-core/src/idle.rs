// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Debounced idle deadline that starts the auto-solve.

use std::time::Duration;

use crate::time::Timestamp;

/// Cancellable delayed trigger. The last reset wins.
#[derive(Debug, Clone)]
pub struct IdleTrigger {
    quiet: Duration,
    deadline: Option<Timestamp>,
}

impl IdleTrigger {
    /// Disarmed trigger with the given quiet interval.
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Cancels any pending deadline, then arms a new one at `now + quiet`
    /// when `armed` (the ledger holds at least one move).
    pub fn reset(&mut self, now: Timestamp, armed: bool) {
        self.deadline = armed.then(|| now + self.quiet);
    }

    /// Cancels the pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Arms the trigger at an absolute time, replacing any pending deadline.
    pub fn rearm_at(&mut self, at: Timestamp) {
        self.deadline = Some(at);
    }

    /// Pending deadline, if armed.
    pub const fn deadline(&self) -> Option<Timestamp> {
        self.deadline
    }

    /// Consumes the deadline if it is at or before `now`.
    pub fn fire_if_due(&mut self, now: Timestamp) -> Option<Timestamp> {
        match self.deadline {
            Some(at) if at <= now => {
                self.deadline = None;
                Some(at)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_supersedes_previous_deadline() {
        let mut idle = IdleTrigger::new(Duration::from_millis(5_000));
        idle.reset(Timestamp::from_millis(0), true);
        idle.reset(Timestamp::from_millis(3_000), true);
        assert_eq!(idle.fire_if_due(Timestamp::from_millis(5_000)), None);
        assert_eq!(
            idle.fire_if_due(Timestamp::from_millis(8_000)),
            Some(Timestamp::from_millis(8_000))
        );
        assert_eq!(idle.deadline(), None);
    }

    #[test]
    fn reset_with_empty_ledger_disarms() {
        let mut idle = IdleTrigger::new(Duration::from_millis(5_000));
        idle.reset(Timestamp::ZERO, true);
        idle.reset(Timestamp::from_millis(10), false);
        assert_eq!(idle.deadline(), None);
        idle.reset(Timestamp::from_millis(20), true);
        idle.cancel();
        assert_eq!(idle.fire_if_due(Timestamp::from_millis(u64::MAX)), None);
    }

    #[test]
    fn rearm_moves_a_consumed_deadline_later() {
        let mut idle = IdleTrigger::new(Duration::from_millis(5_000));
        idle.reset(Timestamp::ZERO, true);
        assert!(idle.fire_if_due(Timestamp::from_millis(5_000)).is_some());
        idle.rearm_at(Timestamp::from_millis(5_250));
        assert_eq!(idle.fire_if_due(Timestamp::from_millis(5_100)), None);
        assert_eq!(
            idle.fire_if_due(Timestamp::from_millis(5_250)),
            Some(Timestamp::from_millis(5_250))
        );
    }
}
