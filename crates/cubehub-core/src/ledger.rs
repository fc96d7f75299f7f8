// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Move record and the undo stack.

use std::fmt;
use std::str::FromStr;

use cubehub_geom::Turn;
use serde::{Deserialize, Serialize};

use crate::error::CubeError;
use crate::face::FaceLabel;
use crate::layer::resolve;

/// A rotation that was applied: which layer, and which way.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Layer that turned.
    pub face: FaceLabel,
    /// Signed quarter turn, serialized as `90` / `-90`.
    #[serde(rename = "angle")]
    pub turn: Turn,
}

impl Move {
    /// Creates a move.
    pub const fn new(face: FaceLabel, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// The move a direct click on `face` performs.
    pub const fn click(face: FaceLabel) -> Self {
        Self::new(face, resolve(face).click_turn)
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }
}

/// `R` for the click direction, `R'` for its inverse.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.turn == resolve(self.face).click_turn {
            write!(f, "{}", self.face)
        } else {
            write!(f, "{}'", self.face)
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (face, prime) = match text.strip_suffix('\'') {
            Some(face) => (face, true),
            None => (text, false),
        };
        let face: FaceLabel = face.parse().map_err(|_| {
            CubeError::InvalidConfiguration(format!("malformed move notation {s:?}"))
        })?;
        let click = Self::click(face);
        Ok(if prime { click.inverse() } else { click })
    }
}

/// Parses whitespace-separated notation such as `"R U R' U'"`.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, CubeError> {
    text.split_whitespace().map(str::parse).collect()
}

/// Last-in-first-out record of user moves still reversible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveLedger {
    moves: Vec<Move>,
}

impl MoveLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move. Inverse pairs are kept as two entries.
    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Removes and returns the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Number of reversible moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when nothing is left to undo.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in the order they were recorded.
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// The sequence that undoes the ledger, in replay order.
    pub fn undo_sequence(&self) -> Vec<Move> {
        self.moves.iter().rev().map(|m| m.inverse()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_round_trips() {
        for face in FaceLabel::ALL {
            let click = Move::click(face);
            assert_eq!(click.to_string().parse::<Move>().unwrap(), click);
            assert_eq!(click.inverse().to_string().parse::<Move>().unwrap(), click.inverse());
        }
        assert_eq!(Move::click(FaceLabel::R).to_string(), "R");
        assert_eq!(Move::click(FaceLabel::R).inverse().to_string(), "R'");
    }

    #[test]
    fn click_uses_table_direction() {
        assert_eq!(Move::click(FaceLabel::R).turn, Turn::Negative);
        assert_eq!(Move::click(FaceLabel::F).turn, Turn::Positive);
    }

    #[test]
    fn parse_sequence_rejects_junk() {
        let seq = parse_sequence("R U R' U'").unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq[2], Move::click(FaceLabel::R).inverse());
        assert!(matches!(
            parse_sequence("R Q"),
            Err(CubeError::InvalidConfiguration(_))
        ));
        assert!(parse_sequence("R''").is_err());
    }

    #[test]
    fn ledger_is_a_stack_and_keeps_inverse_pairs() {
        let mut ledger = MoveLedger::new();
        let r = Move::click(FaceLabel::R);
        ledger.record(r);
        ledger.record(r.inverse());
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.undo_sequence(), vec![r, r.inverse()]);
        assert_eq!(ledger.pop(), Some(r.inverse()));
        assert_eq!(ledger.pop(), Some(r));
        assert_eq!(ledger.pop(), None);
        assert!(ledger.is_empty());
    }

    #[test]
    fn ledger_serializes_as_face_angle_list() {
        let mut ledger = MoveLedger::new();
        ledger.record(Move::click(FaceLabel::U));
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"[{"face":"U","angle":-90}]"#);
        let back: MoveLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }
}
