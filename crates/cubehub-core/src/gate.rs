// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-flight animation lock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CubeError;
use crate::time::Timestamp;

/// Origin of a rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// A user click; recorded in the ledger.
    User,
    /// An undo step; never recorded.
    Replay,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Hold {
    kind: MoveKind,
    release_at: Timestamp,
}

/// At most one rotation animates at a time.
///
/// Acquiring fixes the release time (`now + duration`); there is no early
/// release and no cancellation.
#[derive(Debug, Clone)]
pub struct AnimationGate {
    duration: Duration,
    hold: Option<Hold>,
}

impl AnimationGate {
    /// Free gate with a fixed animation `duration`.
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            hold: None,
        }
    }

    /// Takes the gate for a rotation of `kind` starting at `now`.
    ///
    /// Returns the release time, or [`CubeError::AnimationInProgress`] when the
    /// gate is already held.
    pub fn try_acquire(&mut self, kind: MoveKind, now: Timestamp) -> Result<Timestamp, CubeError> {
        if self.hold.is_some() {
            return Err(CubeError::AnimationInProgress);
        }
        let release_at = now + self.duration;
        self.hold = Some(Hold { kind, release_at });
        Ok(release_at)
    }

    /// Kind of the rotation currently holding the gate.
    pub fn holder(&self) -> Option<MoveKind> {
        self.hold.map(|h| h.kind)
    }

    /// When the current hold ends.
    pub fn deadline(&self) -> Option<Timestamp> {
        self.hold.map(|h| h.release_at)
    }

    /// True while a rotation is animating.
    pub const fn is_held(&self) -> bool {
        self.hold.is_some()
    }

    /// Releases the gate if its deadline is at or before `now`.
    ///
    /// Returns the kind of the finished rotation and its release time.
    pub fn release_if_due(&mut self, now: Timestamp) -> Option<(MoveKind, Timestamp)> {
        match self.hold {
            Some(hold) if hold.release_at <= now => {
                self.hold = None;
                Some((hold.kind, hold.release_at))
            }
            _ => None,
        }
    }

    /// Drops any hold without signalling completion (used on restart).
    pub(crate) fn clear(&mut self) {
        self.hold = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_rejected_until_release() {
        let mut gate = AnimationGate::new(Duration::from_millis(350));
        let t0 = Timestamp::from_millis(100);
        assert_eq!(
            gate.try_acquire(MoveKind::User, t0),
            Ok(Timestamp::from_millis(450))
        );
        assert_eq!(
            gate.try_acquire(MoveKind::User, t0),
            Err(CubeError::AnimationInProgress)
        );
        assert_eq!(gate.release_if_due(Timestamp::from_millis(449)), None);
        assert_eq!(
            gate.release_if_due(Timestamp::from_millis(449 + 1)),
            Some((MoveKind::User, Timestamp::from_millis(450)))
        );
        assert!(!gate.is_held());
        assert!(gate.try_acquire(MoveKind::Replay, t0).is_ok());
        assert_eq!(gate.holder(), Some(MoveKind::Replay));
    }

    #[test]
    fn late_release_reports_the_original_deadline() {
        let mut gate = AnimationGate::new(Duration::from_millis(350));
        gate.try_acquire(MoveKind::Replay, Timestamp::ZERO).unwrap();
        let released = gate.release_if_due(Timestamp::from_millis(10_000));
        assert_eq!(released, Some((MoveKind::Replay, Timestamp::from_millis(350))));
    }
}
