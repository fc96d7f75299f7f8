// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port the engine pushes visual updates through, so the core never depends
//! on a specific rendering layer (DOM, wgpu, terminal).

use cubehub_geom::Transform;

use crate::cubie::{CubieId, Sticker};
use crate::face::FaceLabel;

/// Write-only render boundary. The engine never reads back from it.
pub trait RenderPort {
    /// A cubie has a new pose.
    fn set_visual_transform(&mut self, cubie: CubieId, transform: &Transform);
    /// One sticker of a cubie changed appearance.
    fn set_sticker(&mut self, cubie: CubieId, face: FaceLabel, sticker: &Sticker);
}

/// Render port that discards every update (headless sessions).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderPort;

impl RenderPort for NullRenderPort {
    fn set_visual_transform(&mut self, _cubie: CubieId, _transform: &Transform) {}

    fn set_sticker(&mut self, _cubie: CubieId, _face: FaceLabel, _sticker: &Sticker) {}
}

impl<T: RenderPort + ?Sized> RenderPort for &mut T {
    fn set_visual_transform(&mut self, cubie: CubieId, transform: &Transform) {
        (**self).set_visual_transform(cubie, transform);
    }

    fn set_sticker(&mut self, cubie: CubieId, face: FaceLabel, sticker: &Sticker) {
        (**self).set_sticker(cubie, face, sticker);
    }
}
