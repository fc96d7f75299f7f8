// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Speedcubing stopwatch and solve statistics.
//!
//! Callers pass `Instant`s in, so the stopwatch never reads the clock itself.

use std::time::{Duration, Instant};

/// Number of solves an average-of-five looks at.
pub const AO5_WINDOW: usize = 5;

/// Start/stop timer for a single solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
}

impl Stopwatch {
    /// Stopped stopwatch.
    pub const fn new() -> Self {
        Self { started: None }
    }

    /// True between [`Self::start`] and [`Self::stop`].
    pub const fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Starts timing at `now`. Restarting a running stopwatch resets it.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Time on the display at `now`; zero when stopped.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started
            .map_or(Duration::ZERO, |start| now.saturating_duration_since(start))
    }

    /// Stops timing and returns the final time, or `None` if it was not
    /// running.
    pub fn stop(&mut self, now: Instant) -> Option<Duration> {
        self.started
            .take()
            .map(|start| now.saturating_duration_since(start))
    }
}

/// Finished solve times, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveLog {
    solves: Vec<Duration>,
}

impl SolveLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finished solve.
    pub fn record(&mut self, time: Duration) {
        self.solves.push(time);
    }

    /// All solves in the order they were recorded.
    pub fn solves(&self) -> &[Duration] {
        &self.solves
    }

    /// Fastest solve so far.
    pub fn best(&self) -> Option<Duration> {
        self.solves.iter().min().copied()
    }

    /// Average of the last five solves; see [`average_of_five`].
    pub fn average_of_five(&self) -> Option<Duration> {
        average_of_five(&self.solves)
    }
}

/// Mean of the middle three of the last five entries, dropping the best and
/// the worst. `None` with fewer than five.
pub fn average_of_five(solves: &[Duration]) -> Option<Duration> {
    let start = solves.len().checked_sub(AO5_WINDOW)?;
    let mut last: Vec<Duration> = solves[start..].to_vec();
    last.sort_unstable();
    let middle: Duration = last[1..AO5_WINDOW - 1].iter().sum();
    Some(middle / 3)
}

/// Renders `MM:SS.CC` (minutes, seconds, centiseconds; truncated, not
/// rounded). Minutes keep growing past 99.
pub fn format_time(time: Duration) -> String {
    let ms = time.as_millis();
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let centis = (ms % 1_000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}
