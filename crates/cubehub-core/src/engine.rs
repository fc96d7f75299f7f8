// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The cube engine: one explicit owner for every piece of session state.
//!
//! Rotations, the ledger, the animation gate, the idle trigger and the logo
//! all live on [`CubeEngine`]. Time never advances on its own; the caller
//! passes a [`Timestamp`] to every entry point and the engine settles every
//! deadline that is due at that instant before doing anything else.

use cubehub_geom::Turn;
use tracing::{debug, info, instrument, warn};

use crate::config::EngineConfig;
use crate::cubie::StickerRef;
use crate::error::CubeError;
use crate::face::FaceLabel;
use crate::gate::{AnimationGate, MoveKind};
use crate::idle::IdleTrigger;
use crate::layer::resolve;
use crate::ledger::{Move, MoveLedger};
use crate::logo::LogoOverlay;
use crate::registry::CubieRegistry;
use crate::render_port::RenderPort;
use crate::rotation::rotate_layer;
use crate::time::Timestamp;

/// Observable engine state, derived from the gate and the auto-solve flag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing animating; user input is accepted.
    Idle,
    /// A rotation of the given kind holds the gate.
    Animating(MoveKind),
    /// Auto-solve is active and the next undo step is pending.
    AutoSolving,
}

/// Outcome of a user activation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The layer turned and the move was recorded.
    Rotated(Move),
    /// Another rotation was still animating; nothing changed.
    Dropped,
    /// The sticker has no colour; nothing changed.
    Inert,
}

/// Cube session state machine.
#[derive(Debug)]
pub struct CubeEngine<R: RenderPort> {
    config: EngineConfig,
    registry: CubieRegistry,
    ledger: MoveLedger,
    gate: AnimationGate,
    idle: IdleTrigger,
    logo: LogoOverlay,
    auto_solving: bool,
    render: R,
}

impl<R: RenderPort> CubeEngine<R> {
    /// Validates `config`, builds the cube and publishes it to `render`.
    ///
    /// # Errors
    /// [`CubeError::InvalidConfiguration`] when `config` fails validation.
    #[instrument(skip(render))]
    pub fn new(config: EngineConfig, mut render: R) -> Result<Self, CubeError> {
        config.validate()?;
        let registry = CubieRegistry::initialize(config.spacing)?;
        registry.publish(&mut render);
        info!(spacing = config.spacing, "cube initialised");
        Ok(Self {
            gate: AnimationGate::new(config.animation_duration()),
            idle: IdleTrigger::new(config.idle_timeout()),
            config,
            registry,
            ledger: MoveLedger::new(),
            logo: LogoOverlay::new(),
            auto_solving: false,
            render,
        })
    }

    /// User clicked (or otherwise activated) the layer named by `face`.
    ///
    /// Settles due deadlines, resets the idle trigger, then turns the layer in
    /// its click direction and clears the logo. A request that arrives while a
    /// rotation is animating is dropped.
    pub fn on_face_activated(&mut self, face: FaceLabel, now: Timestamp) -> Activation {
        self.advance(now);
        self.idle.reset(now, !self.ledger.is_empty());
        match self.start_rotation(face, None, MoveKind::User, now) {
            Ok(mv) => Activation::Rotated(mv),
            Err(err) => {
                debug!(%face, %now, %err, "activation dropped");
                Activation::Dropped
            }
        }
    }

    /// User activated a concrete sticker.
    ///
    /// Uncoloured stickers are ignored outright. A coloured sticker turns the
    /// layer named by the face it was painted for.
    pub fn on_sticker_activated(&mut self, sticker: StickerRef, now: Timestamp) -> Activation {
        if self
            .registry
            .cubie(sticker.cubie)
            .sticker(sticker.face)
            .is_inert()
        {
            return Activation::Inert;
        }
        self.on_face_activated(sticker.face, now)
    }

    /// User move in an explicit direction.
    ///
    /// `turn` defaults to the face's click direction. The move is recorded,
    /// clears the logo and rearms the idle trigger exactly like a click. Undo
    /// steps are only ever started by the auto-solve.
    ///
    /// # Errors
    /// [`CubeError::AnimationInProgress`] while another rotation holds the
    /// gate.
    pub fn apply(
        &mut self,
        face: FaceLabel,
        turn: Option<Turn>,
        now: Timestamp,
    ) -> Result<Move, CubeError> {
        self.advance(now);
        self.start_rotation(face, turn, MoveKind::User, now)
    }

    /// Starts auto-solve immediately instead of waiting for the idle timeout.
    ///
    /// Returns `false` (and does nothing) when the ledger is empty or the
    /// engine is not idle.
    #[instrument(level = "debug", skip(self))]
    pub fn solve_now(&mut self, now: Timestamp) -> bool {
        self.advance(now);
        self.begin_auto_solve(now)
    }

    /// Processes every deadline at or before `now`, each at its own time.
    ///
    /// A gate release that coincides with the idle deadline is handled first.
    pub fn advance(&mut self, now: Timestamp) {
        loop {
            let gate_due = self.gate.deadline().filter(|at| *at <= now);
            let idle_due = self.idle.deadline().filter(|at| *at <= now);
            match (gate_due, idle_due) {
                (None, None) => break,
                (Some(gate_at), Some(idle_at)) if idle_at < gate_at => self.fire_idle(idle_at),
                (Some(gate_at), _) => {
                    if let Some((kind, at)) = self.gate.release_if_due(gate_at) {
                        self.finish_animation(kind, at);
                    }
                }
                (None, Some(idle_at)) => self.fire_idle(idle_at),
            }
        }
    }

    /// Advances through every pending deadline, starting no earlier than
    /// `from`, until nothing is scheduled. Returns the time of the last one.
    pub fn run_until_settled(&mut self, from: Timestamp) -> Timestamp {
        let mut now = from;
        self.advance(now);
        while let Some(at) = self.next_deadline() {
            now = now.max(at);
            self.advance(now);
        }
        now
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Timestamp> {
        match (self.gate.deadline(), self.idle.deadline()) {
            (Some(gate), Some(idle)) => Some(gate.min(idle)),
            (gate, idle) => gate.or(idle),
        }
    }

    /// Rebuilds the cube in its solved state and forgets the session.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.registry.reinitialize();
        self.ledger.clear();
        self.gate.clear();
        self.idle.cancel();
        self.logo = LogoOverlay::new();
        self.auto_solving = false;
        self.registry.publish(&mut self.render);
        info!("cube restarted");
    }

    /// Current state.
    pub fn state(&self) -> EngineState {
        match self.gate.holder() {
            Some(kind) => EngineState::Animating(kind),
            None if self.auto_solving => EngineState::AutoSolving,
            None => EngineState::Idle,
        }
    }

    /// Moves still reversible by auto-solve.
    pub const fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    /// The cubies.
    pub const fn registry(&self) -> &CubieRegistry {
        &self.registry
    }

    /// Validated configuration the engine runs with.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The render sink.
    pub const fn render(&self) -> &R {
        &self.render
    }

    /// Mutable access to the render sink.
    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// Consumes the engine, returning the render sink.
    pub fn into_render(self) -> R {
        self.render
    }

    /// True when every cubie sits at its starting pose.
    pub fn is_home(&self) -> bool {
        self.registry.is_home()
    }

    /// True while the logo is on the front face.
    pub const fn logo_shown(&self) -> bool {
        self.logo.is_shown()
    }

    /// True while auto-solve is replaying the ledger.
    pub const fn is_auto_solving(&self) -> bool {
        self.auto_solving
    }

    fn start_rotation(
        &mut self,
        face: FaceLabel,
        turn: Option<Turn>,
        kind: MoveKind,
        now: Timestamp,
    ) -> Result<Move, CubeError> {
        let release_at = self.gate.try_acquire(kind, now)?;
        let turn = turn.unwrap_or(resolve(face).click_turn);
        let mv = Move::new(face, turn);
        if kind == MoveKind::User && self.logo.is_shown() {
            self.logo.clear(&mut self.registry, &mut self.render);
        }
        rotate_layer(&mut self.registry, &mut self.render, face, turn);
        if kind == MoveKind::User {
            self.ledger.record(mv);
            self.idle.reset(now, true);
        }
        debug!(%mv, ?kind, %now, %release_at, "rotation started");
        Ok(mv)
    }

    fn finish_animation(&mut self, kind: MoveKind, at: Timestamp) {
        debug!(?kind, %at, "gate released");
        if kind == MoveKind::Replay && self.auto_solving {
            self.step_auto_solve(at);
        }
    }

    /// An idle deadline that lands mid-animation waits for the gate.
    fn fire_idle(&mut self, at: Timestamp) {
        if self.idle.fire_if_due(at).is_none() {
            return;
        }
        if !self.auto_solving {
            if let Some(release_at) = self.gate.deadline() {
                self.idle.rearm_at(release_at);
                debug!(%at, %release_at, "idle timeout deferred until the gate opens");
                return;
            }
        }
        if !self.begin_auto_solve(at) {
            debug!(%at, state = ?self.state(), "idle timeout ignored");
        }
    }

    fn begin_auto_solve(&mut self, now: Timestamp) -> bool {
        if self.auto_solving || self.gate.is_held() || self.ledger.is_empty() {
            return false;
        }
        self.auto_solving = true;
        self.idle.cancel();
        info!(moves = self.ledger.len(), %now, "auto-solve started");
        self.step_auto_solve(now);
        true
    }

    fn step_auto_solve(&mut self, now: Timestamp) {
        let Some(mv) = self.ledger.pop() else {
            self.auto_solving = false;
            self.idle.cancel();
            self.logo.show(&mut self.registry, &mut self.render);
            info!(%now, "auto-solve finished");
            return;
        };
        let undo = mv.inverse();
        if let Err(err) = self.start_rotation(undo.face, Some(undo.turn), MoveKind::Replay, now) {
            warn!(%mv, %err, "undo step could not start; auto-solve abandoned");
            self.ledger.record(mv);
            self.auto_solving = false;
        }
    }
}
