// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Face → layer resolution and layer membership.

use cubehub_geom::{Axis, Turn};

use crate::cubie::{Cubie, CubieId};
use crate::face::FaceLabel;

/// Everything needed to rotate the layer a face names.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LayerSpec {
    /// Rotation axis.
    pub axis: Axis,
    /// Coordinate the layer's cubies share on `axis`.
    pub layer: i8,
    /// Turn applied when the face is clicked directly. Undo replays pass
    /// an explicit turn instead.
    pub click_turn: Turn,
}

/// Fixed face table, not derived from geometry.
pub const fn resolve(face: FaceLabel) -> LayerSpec {
    let (axis, layer, click_turn) = match face {
        FaceLabel::R => (Axis::X, 1, Turn::Negative),
        FaceLabel::L => (Axis::X, -1, Turn::Positive),
        FaceLabel::U => (Axis::Y, 1, Turn::Negative),
        FaceLabel::D => (Axis::Y, -1, Turn::Positive),
        FaceLabel::F => (Axis::Z, 1, Turn::Positive),
        FaceLabel::B => (Axis::Z, -1, Turn::Negative),
    };
    LayerSpec {
        axis,
        layer,
        click_turn,
    }
}

/// Ids of every cubie whose coordinate on `axis` equals `layer`.
///
/// Always nine cubies for `layer ∈ {-1, 0, 1}` on a settled cube.
pub fn select_layer(cubies: &[Cubie], axis: Axis, layer: i8) -> Vec<CubieId> {
    cubies
        .iter()
        .filter(|c| c.coord().along(axis) == layer)
        .map(Cubie::id)
        .collect()
}
