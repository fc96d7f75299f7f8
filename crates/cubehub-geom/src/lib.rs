// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometry primitives for CubeHub.

This crate provides:
- Principal axes (`Axis`) and signed quarter turns (`Turn`).
- Affine transforms restricted to translations and quarter-turn rotations
  (`Transform`).
- The integer lattice `{-1,0,1}³` (`GridCoord`) and the one reconciliation
  function that maps a transform back onto it.

Design notes:
- Deterministic: rotations are built from exact `0/±1` entries, never from
  `sin`/`cos`, so integer translations stay integers forever.
- Float32 throughout.
"]

/// Integer lattice coordinates and transform reconciliation.
pub mod lattice;
/// Foundational geometric types.
pub mod types;

pub use lattice::{GridCoord, LATTICE_TOLERANCE};
pub use types::axis::{Axis, InvalidTurn, Turn};
pub use types::transform::Transform;
