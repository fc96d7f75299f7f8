// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Headless sessions: click a move list, then let the idle trigger unwind it.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use cubehub_core::{
    Activation, CubeEngine, CubieId, EngineConfig, FaceLabel, GridCoord, Move, RenderPort,
    Sticker, Timestamp, Transform, Turn,
};
use cubehub_math::Prng;
use serde::Serialize;
use tokio::time::{sleep_until, Instant};
use tracing::{info, instrument, trace};

/// How the session clock advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Jump straight to each deadline.
    Virtual,
    /// Sleep until each deadline on the tokio clock.
    Realtime,
}

/// Render sink for a terminal: counts pushes and traces them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceRenderPort {
    /// Pose pushes.
    pub transforms: usize,
    /// Sticker pushes.
    pub stickers: usize,
}

impl RenderPort for TraceRenderPort {
    fn set_visual_transform(&mut self, cubie: CubieId, transform: &Transform) {
        self.transforms += 1;
        trace!(%cubie, translation = ?transform.translation().to_array(), "pose");
    }

    fn set_sticker(&mut self, cubie: CubieId, face: FaceLabel, sticker: &Sticker) {
        self.stickers += 1;
        trace!(%cubie, %face, ?sticker, "sticker");
    }
}

/// What happened during a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    /// Moves the user clicked, in order.
    pub played: Vec<Move>,
    /// Undo steps the auto-solve applied, in order.
    pub replayed: Vec<Move>,
    /// Session time when the cube came to rest, in milliseconds.
    pub finished_ms: u64,
    /// Cube back in its starting pose.
    pub solved: bool,
    /// Front face, top row first; `.` where no glyph is shown.
    pub front: Vec<String>,
    /// Render traffic.
    pub render: TraceRenderPort,
}

/// `count` pseudo-random clicks, reproducible from `seed`.
pub fn scramble(count: usize, seed: u64) -> Vec<Move> {
    let mut prng = Prng::from_seed_u64(seed);
    (0..count)
        .map(|_| {
            let face = FaceLabel::ALL[prng.next_index(FaceLabel::ALL.len())];
            let click = Move::click(face);
            if prng.next_bool() {
                click
            } else {
                click.inverse()
            }
        })
        .collect()
}

/// Clicks `moves` one animation apart, then advances until nothing is
/// pending: the idle trigger fires and the ledger unwinds.
#[instrument(skip(config, moves), fields(moves = moves.len()))]
pub async fn run_session(
    config: EngineConfig,
    moves: &[Move],
    pace: Pace,
) -> Result<SessionReport> {
    let mut engine = CubeEngine::new(config, TraceRenderPort::default())
        .context("could not build the cube")?;
    let origin = Instant::now();
    let gap = engine.config().animation_ms;

    let mut now = Timestamp::ZERO;
    for (i, mv) in moves.iter().enumerate() {
        now = Timestamp::from_millis(gap * i as u64);
        wait_until(pace, origin, now).await;
        let outcome = if mv.turn == Move::click(mv.face).turn {
            engine.on_face_activated(mv.face, now)
        } else {
            engine
                .apply(mv.face, Some(mv.turn), now)
                .map_or(Activation::Dropped, Activation::Rotated)
        };
        if outcome != Activation::Rotated(*mv) {
            bail!("move {i} ({mv}) was not applied: {outcome:?}");
        }
    }
    info!(played = moves.len(), %now, "moves played; waiting for the auto-solve");

    let mut replayed = Vec::new();
    while let Some(at) = engine.next_deadline() {
        wait_until(pace, origin, at).await;
        let before = engine.ledger().as_slice().to_vec();
        engine.advance(at);
        now = at;
        let kept = engine.ledger().len();
        replayed.extend(before[kept..].iter().rev().map(|m| m.inverse()));
    }

    Ok(SessionReport {
        played: moves.to_vec(),
        replayed,
        finished_ms: now.as_millis(),
        solved: engine.is_home(),
        front: front_face(&engine),
        render: *engine.render(),
    })
}

async fn wait_until(pace: Pace, origin: Instant, at: Timestamp) {
    if pace == Pace::Realtime {
        sleep_until(origin + Duration::from_millis(at.as_millis())).await;
    }
}

/// Glyphs on the `z = +1` layer's front stickers as three rows.
pub fn front_face<R: RenderPort>(engine: &CubeEngine<R>) -> Vec<String> {
    [1_i8, 0, -1]
        .iter()
        .map(|&y| {
            (-1_i8..=1)
                .map(|x| {
                    engine
                        .registry()
                        .at(GridCoord::new(x, y, 1))
                        .and_then(|c| c.sticker(FaceLabel::F).glyph)
                        .unwrap_or('.')
                })
                .collect::<String>()
        })
        .collect()
}

/// Turns written as notation, e.g. `R U' F`.
pub fn notation(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Count of quarter turns in each direction, for the summary line.
pub fn turn_balance(moves: &[Move]) -> (usize, usize) {
    let positive = moves.iter().filter(|m| m.turn == Turn::Positive).count();
    (positive, moves.len() - positive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubehub_core::parse_sequence;

    #[test]
    fn scramble_is_reproducible_per_seed() {
        assert_eq!(scramble(25, 7), scramble(25, 7));
        assert_ne!(scramble(25, 7), scramble(25, 8));
        assert_eq!(scramble(0, 7), Vec::new());
    }

    #[tokio::test]
    async fn virtual_session_unwinds_in_reverse() {
        let moves = parse_sequence("R U'").unwrap();
        let report = run_session(EngineConfig::default(), &moves, Pace::Virtual)
            .await
            .unwrap();
        assert_eq!(notation(&report.replayed), "U R'");
        assert!(report.solved);
        // Last click at 350 ms, idle at 5350 ms, two replays of 350 ms.
        assert_eq!(report.finished_ms, 6_050);
        assert_eq!(report.front, vec!["CUB", "EHU", "B.."]);
        // Initial publish, two clicks and two replays of nine cubies.
        assert_eq!(report.render.transforms, 27 + 4 * 9);
    }

    #[tokio::test]
    async fn scrambled_session_always_solves() {
        let config = EngineConfig {
            animation_ms: 10,
            idle_timeout_ms: 100,
            ..EngineConfig::default()
        };
        let moves = scramble(40, 1234);
        let report = run_session(config, &moves, Pace::Virtual).await.unwrap();
        assert!(report.solved);
        assert_eq!(report.replayed.len(), 40);
        let expected: Vec<Move> = moves.iter().rev().map(|m| m.inverse()).collect();
        assert_eq!(report.replayed, expected);
    }

    #[tokio::test]
    async fn empty_session_finishes_immediately() {
        let report = run_session(EngineConfig::default(), &[], Pace::Virtual)
            .await
            .unwrap();
        assert_eq!(report.finished_ms, 0);
        assert!(report.replayed.is_empty());
        assert_eq!(report.front, vec!["...", "...", "..."]);
    }

    #[test]
    fn balance_counts_directions() {
        let moves = parse_sequence("F F B").unwrap();
        assert_eq!(turn_balance(&moves), (2, 1));
    }
}
