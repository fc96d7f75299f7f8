// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Engine builders and move-script helpers for tests.

use cubehub_core::{
    parse_sequence, Activation, CubeEngine, EngineConfig, Move, RenderPort, Timestamp,
};

use crate::render::RecordingRenderPort;

/// Shorthand for a timestamp in milliseconds.
pub const fn ms(value: u64) -> Timestamp {
    Timestamp::from_millis(value)
}

/// Builder for creating test engines with common configurations.
///
/// # Example
///
/// ```
/// use cubehub_dry_tests::EngineTestBuilder;
///
/// let (engine, render) = EngineTestBuilder::new().with_animation_ms(100).build();
/// assert!(engine.is_home());
/// assert_eq!(render.transform_count(), 27);
/// ```
#[derive(Debug, Clone)]
pub struct EngineTestBuilder {
    config: EngineConfig,
}

impl Default for EngineTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineTestBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Override the animation duration.
    pub const fn with_animation_ms(mut self, animation_ms: u64) -> Self {
        self.config.animation_ms = animation_ms;
        self
    }

    /// Override the idle quiet interval.
    pub const fn with_idle_ms(mut self, idle_timeout_ms: u64) -> Self {
        self.config.idle_timeout_ms = idle_timeout_ms;
        self
    }

    /// Configuration the builder will use.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build an engine wired to a [`RecordingRenderPort`], returning a second
    /// handle onto the same recorder.
    ///
    /// # Panics
    /// If the configured values are invalid.
    #[allow(clippy::panic)]
    pub fn build(self) -> (CubeEngine<RecordingRenderPort>, RecordingRenderPort) {
        let render = RecordingRenderPort::new();
        let engine = CubeEngine::new(self.config, render.clone())
            .unwrap_or_else(|err| panic!("test engine config rejected: {err}"));
        (engine, render)
    }
}

/// Plays whitespace-separated notation as user clicks, one every `gap_ms`
/// starting at `start`, and returns the time of the last click.
///
/// # Panics
/// On malformed notation, or when a click is dropped because `gap_ms` is
/// shorter than the animation.
#[allow(clippy::panic)]
pub fn play_script<R: RenderPort>(
    engine: &mut CubeEngine<R>,
    script: &str,
    start: Timestamp,
    gap_ms: u64,
) -> Timestamp {
    let moves = parse_sequence(script).unwrap_or_else(|err| panic!("bad script: {err}"));
    play_moves(engine, &moves, start, gap_ms)
}

/// [`play_script`] over already-parsed moves. Primed moves are played by
/// passing their explicit turn, so they are recorded exactly as given.
///
/// # Panics
/// When a click is dropped.
pub fn play_moves<R: RenderPort>(
    engine: &mut CubeEngine<R>,
    moves: &[Move],
    start: Timestamp,
    gap_ms: u64,
) -> Timestamp {
    let mut now = start;
    for (i, mv) in moves.iter().enumerate() {
        now = ms(start.as_millis() + gap_ms * i as u64);
        let outcome = if *mv == Move::click(mv.face) {
            engine.on_face_activated(mv.face, now)
        } else {
            engine
                .apply(mv.face, Some(mv.turn), now)
                .map_or(Activation::Dropped, Activation::Rotated)
        };
        assert_eq!(outcome, Activation::Rotated(*mv), "move {i} ({mv}) at {now}");
    }
    now
}
