// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::fmt;

use cubehub_math::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three principal axes through the world origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left → right.
    X,
    /// Down → up.
    Y,
    /// Back → front (towards the viewer).
    Z,
}

impl Axis {
    /// All axes in `x, y, z` order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of this axis (`0`, `1` or `2`).
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Unit vector along the positive direction of this axis.
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::UNIT_X,
            Self::Y => Vec3::UNIT_Y,
            Self::Z => Vec3::UNIT_Z,
        }
    }

    /// Exact rotation matrix for `turn` about this axis.
    pub const fn rotation(self, turn: Turn) -> Mat4 {
        let quarters = turn.quarters();
        match self {
            Self::X => Mat4::rotation_x_quarters(quarters),
            Self::Y => Mat4::rotation_y_quarters(quarters),
            Self::Z => Mat4::rotation_z_quarters(quarters),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// A signed quarter turn: `+90°` or `-90°` about some axis.
///
/// Positive follows the right-hand rule about the positive axis. Angles other
/// than `±90°` are unrepresentable, which is what keeps the lattice exact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Turn {
    /// `+90°`.
    Positive,
    /// `-90°`.
    Negative,
}

impl Turn {
    /// Signed angle in degrees.
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Positive => 90,
            Self::Negative => -90,
        }
    }

    /// Signed number of quarter turns (`±1`).
    pub const fn quarters(self) -> i32 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }

    /// The turn that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}°", self.degrees())
    }
}

/// Rejected angle when converting degrees into a [`Turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rotation angle must be +90 or -90 degrees, got {0}")]
pub struct InvalidTurn(pub i32);

impl TryFrom<i32> for Turn {
    type Error = InvalidTurn;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            90 => Ok(Self::Positive),
            -90 => Ok(Self::Negative),
            other => Err(InvalidTurn(other)),
        }
    }
}

impl From<Turn> for i32 {
    fn from(turn: Turn) -> Self {
        turn.degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_an_involution() {
        for turn in [Turn::Positive, Turn::Negative] {
            assert_eq!(turn.inverse().inverse(), turn);
            assert_eq!(turn.inverse().degrees(), -turn.degrees());
        }
    }

    #[test]
    fn degrees_round_trip_through_try_from() {
        assert_eq!(Turn::try_from(90), Ok(Turn::Positive));
        assert_eq!(Turn::try_from(-90), Ok(Turn::Negative));
        assert_eq!(Turn::try_from(180), Err(InvalidTurn(180)));
    }

    #[test]
    fn turn_serializes_as_signed_degrees() {
        let json = serde_json::to_string(&Turn::Negative).unwrap();
        assert_eq!(json, "-90");
        let back: Turn = serde_json::from_str("90").unwrap();
        assert_eq!(back, Turn::Positive);
        assert!(serde_json::from_str::<Turn>("45").is_err());
    }

    #[test]
    fn rotation_then_inverse_is_identity() {
        for axis in Axis::ALL {
            let r = axis.rotation(Turn::Positive) * axis.rotation(Turn::Negative);
            assert_eq!(r.to_array(), Mat4::identity().to_array());
        }
    }

    #[test]
    fn axis_display_and_index() {
        assert_eq!(Axis::Y.to_string(), "y");
        assert_eq!(Axis::Z.index(), 2);
        assert_eq!(Axis::X.unit().to_array(), [1.0, 0.0, 0.0]);
        assert_eq!(Turn::Negative.to_string(), "-90°");
    }
}
