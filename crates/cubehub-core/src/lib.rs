// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! cubehub-core: state and layer-rotation engine for a 3×3×3 puzzle cube.
//!
//! The engine owns 27 cubies on the integer lattice `{-1,0,1}³`, turns whole
//! layers by exact quarter turns, records user moves, and after a quiet
//! period replays their inverses until the cube is solved again. Rendering
//! sits behind [`RenderPort`]; time is passed in explicitly as [`Timestamp`].
#![forbid(unsafe_code)]

mod config;
mod cubie;
mod engine;
mod error;
mod face;
mod gate;
mod idle;
mod layer;
mod ledger;
mod logo;
mod registry;
mod render_port;
mod rotation;
mod time;

pub use config::{EngineConfig, DEFAULT_ANIMATION_MS, DEFAULT_IDLE_TIMEOUT_MS, DEFAULT_SPACING};
pub use cubie::{Cubie, CubieId, Sticker, StickerRef, CUBIE_COUNT};
pub use engine::{Activation, CubeEngine, EngineState};
pub use error::CubeError;
pub use face::{FaceLabel, StickerColor};
pub use gate::{AnimationGate, MoveKind};
pub use idle::IdleTrigger;
pub use layer::{resolve, select_layer, LayerSpec};
pub use ledger::{parse_sequence, Move, MoveLedger};
pub use logo::{glyph_at, LogoOverlay, LOGO_GLYPHS};
pub use registry::CubieRegistry;
pub use render_port::{NullRenderPort, RenderPort};
pub use rotation::{rotate_layer, LayerRotation};
pub use time::Timestamp;

pub use cubehub_geom::{Axis, GridCoord, Transform, Turn};
