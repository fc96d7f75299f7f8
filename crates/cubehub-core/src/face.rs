// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CubeError;

/// Outward direction of a face, and by extension the layer it names.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaceLabel {
    /// Up (`y = +1`).
    U,
    /// Down (`y = -1`).
    D,
    /// Front (`z = +1`).
    F,
    /// Back (`z = -1`).
    B,
    /// Left (`x = -1`).
    L,
    /// Right (`x = +1`).
    R,
}

impl FaceLabel {
    /// All six faces in sticker-slot order.
    pub const ALL: [Self; 6] = [Self::U, Self::D, Self::F, Self::B, Self::L, Self::R];

    /// Slot of this face in per-cubie sticker arrays.
    pub const fn index(self) -> usize {
        match self {
            Self::U => 0,
            Self::D => 1,
            Self::F => 2,
            Self::B => 3,
            Self::L => 4,
            Self::R => 5,
        }
    }

    /// Canonical sticker colour of this face on a solved puzzle.
    pub const fn color(self) -> StickerColor {
        match self {
            Self::U => StickerColor::White,
            Self::D => StickerColor::Yellow,
            Self::F => StickerColor::Green,
            Self::B => StickerColor::Blue,
            Self::L => StickerColor::Orange,
            Self::R => StickerColor::Red,
        }
    }

    /// Single-letter notation.
    pub const fn as_char(self) -> char {
        match self {
            Self::U => 'U',
            Self::D => 'D',
            Self::F => 'F',
            Self::B => 'B',
            Self::L => 'L',
            Self::R => 'R',
        }
    }
}

impl fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for FaceLabel {
    type Error = CubeError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'U' => Ok(Self::U),
            'D' => Ok(Self::D),
            'F' => Ok(Self::F),
            'B' => Ok(Self::B),
            'L' => Ok(Self::L),
            'R' => Ok(Self::R),
            other => Err(CubeError::InvalidConfiguration(format!(
                "malformed face label {other:?}"
            ))),
        }
    }
}

impl FromStr for FaceLabel {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(CubeError::InvalidConfiguration(format!(
                "malformed face label {s:?}"
            ))),
        }
    }
}

/// Colour class of a sticker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerColor {
    /// Up face.
    White,
    /// Down face.
    Yellow,
    /// Front face.
    Green,
    /// Back face.
    Blue,
    /// Left face.
    Orange,
    /// Right face.
    Red,
}

impl StickerColor {
    /// CSS-style class name used by the render layer.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::White => "color-white",
            Self::Yellow => "color-yellow",
            Self::Green => "color-green",
            Self::Blue => "color-blue",
            Self::Orange => "color-orange",
            Self::Red => "color-red",
        }
    }
}
