// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::fmt;

use cubehub_geom::{GridCoord, Transform};
use serde::{Deserialize, Serialize};

use crate::face::{FaceLabel, StickerColor};

/// Number of cubies in a 3×3×3 puzzle.
pub const CUBIE_COUNT: usize = 27;

/// Stable handle of a cubie, valid for the whole session.
///
/// Ids are assigned in lattice order at initialization and never change,
/// regardless of where the cubie travels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CubieId(u8);

impl CubieId {
    /// Returns the id for `index` if it names one of the 27 cubies.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CUBIE_COUNT).then(|| Self(index as u8))
    }

    /// Position of this cubie in the registry.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CubieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cubie#{}", self.0)
    }
}

/// Appearance of one face of a cubie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sticker {
    /// Colour class, `None` for an inert (black, interior) face.
    pub color: Option<StickerColor>,
    /// Overlay glyph; only ever set on front stickers by the logo overlay.
    pub glyph: Option<char>,
    /// Blinking highlight that accompanies a glyph.
    pub blink: bool,
}

impl Sticker {
    /// A coloured, unmarked sticker.
    pub const fn colored(color: StickerColor) -> Self {
        Self {
            color: Some(color),
            glyph: None,
            blink: false,
        }
    }

    /// An inert sticker.
    pub const fn inert() -> Self {
        Self {
            color: None,
            glyph: None,
            blink: false,
        }
    }

    /// True for interior faces that cannot be clicked.
    pub const fn is_inert(&self) -> bool {
        self.color.is_none()
    }
}

/// One rigid sub-block of the puzzle.
///
/// `transform` accumulates every rotation applied to the cubie; `coord` is
/// its reconciled lattice position. At rest they agree:
/// `coord == GridCoord::reconcile(&transform, spacing)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubie {
    pub(crate) id: CubieId,
    pub(crate) home: GridCoord,
    pub(crate) coord: GridCoord,
    pub(crate) transform: Transform,
    pub(crate) stickers: [Sticker; 6],
}

impl Cubie {
    pub(crate) fn new(id: CubieId, home: GridCoord, spacing: f32) -> Self {
        let stickers = FaceLabel::ALL.map(|face| {
            if faces_outward(home, face) {
                Sticker::colored(face.color())
            } else {
                Sticker::inert()
            }
        });
        Self {
            id,
            home,
            coord: home,
            transform: home.placement(spacing),
            stickers,
        }
    }

    /// Stable handle.
    pub const fn id(&self) -> CubieId {
        self.id
    }

    /// Lattice position at initialization.
    pub const fn home(&self) -> GridCoord {
        self.home
    }

    /// Current lattice position.
    pub const fn coord(&self) -> GridCoord {
        self.coord
    }

    /// Accumulated local-to-world transform.
    pub const fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Sticker on the cubie's local `face`.
    pub const fn sticker(&self, face: FaceLabel) -> &Sticker {
        &self.stickers[face.index()]
    }

    pub(crate) fn sticker_mut(&mut self, face: FaceLabel) -> &mut Sticker {
        &mut self.stickers[face.index()]
    }

    /// Number of coloured stickers (0 for the core, 1 for centres, 2 for
    /// edges, 3 for corners).
    pub fn colored_sticker_count(&self) -> usize {
        self.stickers.iter().filter(|s| !s.is_inert()).count()
    }
}

/// True when `face` of a cubie homed at `coord` points out of the puzzle.
const fn faces_outward(coord: GridCoord, face: FaceLabel) -> bool {
    match face {
        FaceLabel::U => coord.y == 1,
        FaceLabel::D => coord.y == -1,
        FaceLabel::F => coord.z == 1,
        FaceLabel::B => coord.z == -1,
        FaceLabel::L => coord.x == -1,
        FaceLabel::R => coord.x == 1,
    }
}

/// A concrete sticker: a cubie plus one of its local faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StickerRef {
    /// Owning cubie.
    pub cubie: CubieId,
    /// Local face of that cubie.
    pub face: FaceLabel,
}
