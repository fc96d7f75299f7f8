// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use cubehub_math::{Mat4, Vec3};

use super::axis::{Axis, Turn};

/// Affine transform made of translations and quarter-turn rotations.
///
/// Conventions:
/// - Wraps a column-major [`Mat4`]; the translation lives in the last column.
/// - Rotations are about principal axes through the world origin.
/// - `compose(a, b)` is the matrix product `a · b`: applied to a point it
///   performs `b` first, then `a`. Composition is associative but not
///   commutative.
///
/// Determinism:
/// - Every constructor emits only `0`, `±1` and caller-supplied translation
///   entries, so composing quarter turns with integer translations never
///   leaves the integers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
        }
    }

    /// Pure translation.
    #[must_use]
    pub const fn translate(dx: f32, dy: f32, dz: f32) -> Self {
        Self {
            matrix: Mat4::translation(dx, dy, dz),
        }
    }

    /// Pure rotation of `turn` about `axis` through the world origin.
    #[must_use]
    pub const fn rotate_axis(axis: Axis, turn: Turn) -> Self {
        Self {
            matrix: axis.rotation(turn),
        }
    }

    /// Returns `a · b`: the transform that applies `b`, then `a`.
    ///
    /// Rotating a placed cubie about the world origin is
    /// `compose(rotation, placement)`.
    #[must_use]
    pub fn compose(a: &Self, b: &Self) -> Self {
        Self {
            matrix: a.matrix.multiply(&b.matrix),
        }
    }

    /// Translation component.
    #[must_use]
    pub const fn translation(&self) -> Vec3 {
        self.matrix.translation_part()
    }

    /// Underlying column-major matrix.
    #[must_use]
    pub const fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Column-major matrix entries, ready for a `matrix3d(..)` style upload.
    #[must_use]
    pub const fn to_array(&self) -> [f32; 16] {
        self.matrix.to_array()
    }

    /// Element-wise equality within `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.matrix.approx_eq(&other.matrix, tolerance)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
