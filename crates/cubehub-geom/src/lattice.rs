// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::fmt;

use cubehub_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::axis::Axis;
use crate::types::transform::Transform;

/// Largest drift, in lattice units, that reconciliation can absorb.
///
/// A translation component further than this from its integer would round to
/// the wrong cell. Quarter-turn composition is exact, so observed drift is
/// `0.0`; the bound documents what rounding tolerates, not what happens.
pub const LATTICE_TOLERANCE: f32 = 0.5;

/// Logical position of a cubie on the `{-1,0,1}³` lattice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// Left (`-1`) to right (`+1`).
    pub x: i8,
    /// Down (`-1`) to up (`+1`).
    pub y: i8,
    /// Back (`-1`) to front (`+1`).
    pub z: i8,
}

impl GridCoord {
    /// The inert core.
    pub const CENTER: Self = Self::new(0, 0, 0);

    /// Creates a coordinate. No range check; see [`Self::is_on_lattice`].
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// All 27 lattice points, `x` outermost, then `y`, then `z`.
    pub fn all() -> impl Iterator<Item = Self> {
        (-1..=1).flat_map(|x| {
            (-1..=1).flat_map(move |y| (-1..=1).map(move |z| Self::new(x, y, z)))
        })
    }

    /// Component along `axis`.
    pub const fn along(&self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// True when every component lies in `{-1, 0, 1}`.
    pub const fn is_on_lattice(&self) -> bool {
        self.x >= -1 && self.x <= 1 && self.y >= -1 && self.y <= 1 && self.z >= -1 && self.z <= 1
    }

    /// World-space centre of this cell for the given spacing.
    pub fn to_world(&self, spacing: f32) -> Vec3 {
        Vec3::new(f32::from(self.x), f32::from(self.y), f32::from(self.z)).scale(spacing)
    }

    /// Initial placement transform: a pure translation to [`Self::to_world`].
    pub fn placement(&self, spacing: f32) -> Transform {
        let [x, y, z] = self.to_world(spacing).to_array();
        Transform::translate(x, y, z)
    }

    /// Maps a transform back onto the lattice.
    ///
    /// Divides the translation by `spacing` and rounds each component to the
    /// nearest integer. This is the only place continuous poses become
    /// discrete coordinates; see [`LATTICE_TOLERANCE`].
    pub fn reconcile(transform: &Transform, spacing: f32) -> Self {
        let t = transform.translation();
        Self::new(
            round_component(t.x(), spacing),
            round_component(t.y(), spacing),
            round_component(t.z(), spacing),
        )
    }

    /// Largest per-axis distance, in lattice units, between the transform's
    /// translation and the cell it reconciles to.
    pub fn drift(transform: &Transform, spacing: f32) -> f32 {
        let t = transform.translation().scale(1.0 / spacing);
        let cell = Self::reconcile(transform, spacing);
        Axis::ALL
            .iter()
            .map(|axis| (t.component(axis.index()) - f32::from(cell.along(*axis))).abs())
            .fold(0.0, f32::max)
    }
}

fn round_component(value: f32, spacing: f32) -> i8 {
    (value / spacing).round() as i8
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
