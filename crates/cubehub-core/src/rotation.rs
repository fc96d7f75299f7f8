// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Layer rotation and coordinate reconciliation.
//!
//! This module knows nothing about timing; [`crate::CubeEngine`] wraps it
//! with the animation gate and the ledger.

use cubehub_geom::{GridCoord, Transform, Turn, LATTICE_TOLERANCE};
use tracing::debug;

use crate::cubie::CubieId;
use crate::face::FaceLabel;
use crate::layer::{resolve, select_layer};
use crate::registry::CubieRegistry;
use crate::render_port::RenderPort;

/// What a single layer rotation touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRotation {
    /// Face whose layer turned.
    pub face: FaceLabel,
    /// Turn actually applied.
    pub turn: Turn,
    /// Cubies that moved, in registry order.
    pub moved: Vec<CubieId>,
}

/// Rotates the layer named by `face` by `turn`.
///
/// Each selected cubie gets `rotation · transform`, the new pose is pushed to
/// `render`, and its lattice coordinate is reconciled from the new
/// translation. Every reconciliation finishes before this returns, so the
/// next selection always sees a settled lattice.
pub fn rotate_layer<R: RenderPort + ?Sized>(
    registry: &mut CubieRegistry,
    render: &mut R,
    face: FaceLabel,
    turn: Turn,
) -> LayerRotation {
    let spec = resolve(face);
    let moved = select_layer(registry.cubies(), spec.axis, spec.layer);
    let rotation = Transform::rotate_axis(spec.axis, turn);
    let spacing = registry.spacing();

    for id in &moved {
        let cubie = registry.cubie_mut(*id);
        let next = Transform::compose(&rotation, &cubie.transform);
        render.set_visual_transform(*id, &next);
        cubie.transform = next;
        cubie.coord = GridCoord::reconcile(&next, spacing);
        debug_assert!(
            GridCoord::drift(&next, spacing) < LATTICE_TOLERANCE,
            "{id} drifted off the lattice"
        );
    }

    debug!(%face, %turn, axis = %spec.axis, layer = spec.layer, moved = moved.len(), "layer rotated");
    LayerRotation { face, turn, moved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_port::NullRenderPort;
    use std::collections::HashSet;

    fn coords(registry: &CubieRegistry) -> Vec<GridCoord> {
        registry.cubies().iter().map(|c| c.coord()).collect()
    }

    #[test]
    fn rotation_moves_exactly_nine() {
        let mut registry = CubieRegistry::initialize(70.0).unwrap();
        let report = rotate_layer(&mut registry, &mut NullRenderPort, FaceLabel::R, Turn::Negative);
        assert_eq!(report.moved.len(), 9);
        let distinct: HashSet<_> = coords(&registry).into_iter().collect();
        assert_eq!(distinct.len(), 27);
    }

    #[test]
    fn layer_stays_on_its_plane() {
        let mut registry = CubieRegistry::initialize(70.0).unwrap();
        let report = rotate_layer(&mut registry, &mut NullRenderPort, FaceLabel::U, Turn::Negative);
        for id in report.moved {
            assert_eq!(registry.cubie(id).coord().y, 1);
        }
    }

    #[test]
    fn four_turns_restore_the_cube() {
        let mut registry = CubieRegistry::initialize(70.0).unwrap();
        for _ in 0..4 {
            rotate_layer(&mut registry, &mut NullRenderPort, FaceLabel::F, Turn::Positive);
        }
        assert!(registry.is_home());
    }

    #[test]
    fn corner_travels_as_right_hand_rule_predicts() {
        let mut registry = CubieRegistry::initialize(70.0).unwrap();
        let id = registry.at(GridCoord::new(1, 1, 1)).unwrap().id();
        // R clicks turn -90° about X: +Y goes to -Z.
        rotate_layer(&mut registry, &mut NullRenderPort, FaceLabel::R, Turn::Negative);
        assert_eq!(registry.cubie(id).coord(), GridCoord::new(1, 1, -1));
        assert!(!registry.is_home());
    }
}
