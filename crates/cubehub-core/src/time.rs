// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::fmt;
use std::ops::Add;
use std::time::Duration;

/// Point on the session timeline, in whole milliseconds since the session
/// started.
///
/// The engine never reads a wall clock. Callers pass timestamps explicitly, so
/// tests drive time by hand and drivers map real time onto this newtype.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    ms: u64,
}

impl Timestamp {
    /// Session start.
    pub const ZERO: Self = Self { ms: 0 };

    /// Creates a timestamp from milliseconds since session start.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self { ms }
    }

    /// Milliseconds since session start.
    #[must_use]
    pub const fn as_millis(&self) -> u64 {
        self.ms
    }

    /// Time elapsed since `earlier`, saturating at zero.
    #[must_use]
    pub const fn since(&self, earlier: Self) -> Duration {
        Duration::from_millis(self.ms.saturating_sub(earlier.ms))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        let delta = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Self {
            ms: self.ms.saturating_add(delta),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{}ms", self.ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_since_are_inverse() {
        let t0 = Timestamp::from_millis(1_000);
        let t1 = t0 + Duration::from_millis(350);
        assert_eq!(t1.as_millis(), 1_350);
        assert_eq!(t1.since(t0), Duration::from_millis(350));
        assert_eq!(t0.since(t1), Duration::ZERO);
    }

    #[test]
    fn add_saturates() {
        let t = Timestamp::from_millis(u64::MAX - 1) + Duration::from_secs(10);
        assert_eq!(t.as_millis(), u64::MAX);
        assert_eq!(Timestamp::ZERO.to_string(), "t+0ms");
    }
}
