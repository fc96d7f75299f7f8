// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Owner of the 27 cubies.

use cubehub_geom::GridCoord;

use crate::cubie::{Cubie, CubieId, CUBIE_COUNT};
use crate::error::CubeError;
use crate::face::FaceLabel;
use crate::render_port::RenderPort;

/// Tolerance used when comparing a transform against its initial placement.
const HOME_TOLERANCE: f32 = 1e-3;

/// Exclusive owner of the cubie list.
///
/// Cubies are created once, in lattice order (`x` outermost, then `y`, then
/// `z`), and only ever mutated in place afterwards. A cubie's id equals its
/// index in the list.
#[derive(Debug, Clone)]
pub struct CubieRegistry {
    spacing: f32,
    cubies: Vec<Cubie>,
}

impl CubieRegistry {
    /// Builds the 27 cubies on the lattice with `spacing` between centres.
    pub fn initialize(spacing: f32) -> Result<Self, CubeError> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(CubeError::InvalidConfiguration(format!(
                "spacing must be a positive finite number, got {spacing}"
            )));
        }
        Ok(Self {
            spacing,
            cubies: build_cubies(spacing),
        })
    }

    /// Discards every cubie and rebuilds the solved layout.
    pub fn reinitialize(&mut self) {
        self.cubies = build_cubies(self.spacing);
    }

    /// Distance between neighbouring cubie centres.
    pub const fn spacing(&self) -> f32 {
        self.spacing
    }

    /// All cubies, indexed by [`CubieId::index`].
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Cubie by id.
    pub fn cubie(&self, id: CubieId) -> &Cubie {
        &self.cubies[id.index()]
    }

    pub(crate) fn cubie_mut(&mut self, id: CubieId) -> &mut Cubie {
        &mut self.cubies[id.index()]
    }

    /// The cubie currently occupying `coord`, if any.
    pub fn at(&self, coord: GridCoord) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.coord == coord)
    }

    /// True when every cubie sits at home with its initial orientation.
    pub fn is_home(&self) -> bool {
        self.cubies.iter().all(|c| {
            c.coord == c.home
                && c
                    .transform
                    .approx_eq(&c.home.placement(self.spacing), HOME_TOLERANCE)
        })
    }

    /// Pushes every pose and sticker to the render layer.
    pub fn publish<R: RenderPort + ?Sized>(&self, render: &mut R) {
        for cubie in &self.cubies {
            render.set_visual_transform(cubie.id, &cubie.transform);
            for face in FaceLabel::ALL {
                render.set_sticker(cubie.id, face, cubie.sticker(face));
            }
        }
    }
}

fn build_cubies(spacing: f32) -> Vec<Cubie> {
    GridCoord::all()
        .enumerate()
        .filter_map(|(index, coord)| {
            CubieId::from_index(index).map(|id| Cubie::new(id, coord, spacing))
        })
        .collect()
}
