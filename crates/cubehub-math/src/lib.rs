// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic math helpers for the cube engine: vectors, column-major
//! matrices with exact quarter-turn rotations, and a seedable PRNG.
//!
//! All operations round to `f32`. Quarter-turn builders never go through
//! `sin`/`cos`, so integer-valued inputs stay integer-valued under any number
//! of compositions.
#![forbid(unsafe_code)]

use std::f32::consts::TAU;

mod mat4;
mod prng;
mod vec3;

pub use mat4::Mat4;
pub use prng::Prng;
pub use vec3::Vec3;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Exact `(sin, cos)` of `quarter_turns * 90°`.
///
/// Any integer is accepted; the value is reduced modulo four.
pub const fn quarter_sin_cos(quarter_turns: i32) -> (f32, f32) {
    match quarter_turns.rem_euclid(4) {
        0 => (0.0, 1.0),
        1 => (1.0, 0.0),
        2 => (0.0, -1.0),
        _ => (-1.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_sin_cos_wraps_negative_turns() {
        assert_eq!(quarter_sin_cos(-1), quarter_sin_cos(3));
        assert_eq!(quarter_sin_cos(-4), (0.0, 1.0));
        assert_eq!(quarter_sin_cos(5), (1.0, 0.0));
    }

    #[test]
    fn quarter_sin_cos_agrees_with_libm_within_rounding() {
        for turns in -4..=4 {
            let (s, c) = quarter_sin_cos(turns);
            let (ls, lc) = deg_to_rad(90.0 * turns as f32).sin_cos();
            assert!((s - ls).abs() < 1e-5, "sin mismatch at {turns}");
            assert!((c - lc).abs() < 1e-5, "cos mismatch at {turns}");
        }
    }
}
