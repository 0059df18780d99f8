use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Face;

/// Position of a sticker within a face, in the range `0..9`.
///
/// Positions are row-major as seen when facing the face:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pos(u8);

impl Pos {
    /// Center sticker, which never moves.
    pub const CENTER: Pos = Pos(4);

    /// All positions, in order.
    pub const ALL: [Pos; 9] = [
        Pos(0),
        Pos(1),
        Pos(2),
        Pos(3),
        Pos(4),
        Pos(5),
        Pos(6),
        Pos(7),
        Pos(8),
    ];

    /// Perimeter positions in clockwise order, starting from the top-left
    /// corner.
    pub const PERIMETER: [Pos; 8] = [
        Pos(0),
        Pos(1),
        Pos(2),
        Pos(5),
        Pos(8),
        Pos(7),
        Pos(6),
        Pos(3),
    ];

    /// Constructs a position, or returns `None` if `index` is out of range.
    pub const fn new(index: u8) -> Option<Self> {
        if index < 9 { Some(Pos(index)) } else { None }
    }

    /// Constructs a position from its row and column, each in `0..3`.
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Pos(row * 3 + col))
        } else {
            None
        }
    }

    /// Returns the position's index, in the range `0..9`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
    /// Returns the row, from top to bottom.
    pub const fn row(self) -> u8 {
        self.0 / 3
    }
    /// Returns the column, from left to right.
    pub const fn col(self) -> u8 {
        self.0 % 3
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<u8> for Pos {
    type Error = BadPos;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(BadPos(value))
    }
}

impl From<Pos> for u8 {
    fn from(pos: Pos) -> Self {
        pos.0
    }
}

/// Error returned when converting an out-of-range integer into a [`Pos`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("sticker position {0} out of range; expected 0..9")]
pub struct BadPos(pub u8);

/// Sticker color, in the range `0..6`.
///
/// In the solved state, face `f` is entirely color `f`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Color(u8);

impl Color {
    /// Returns the color that fills `face` in the solved state.
    pub const fn of_face(face: Face) -> Self {
        Color(face as u8)
    }

    /// Returns the color's index, in the range `0..6`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the face that this color belongs to in the solved state.
    pub fn home_face(self) -> Face {
        match Face::from_index(self.0) {
            Some(face) => face,
            None => unreachable!("color index is always in range"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Face> for Color {
    fn from(face: Face) -> Self {
        Self::of_face(face)
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl TryFrom<u8> for Color {
    type Error = BadColor;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Face::from_index(value) {
            Some(face) => Ok(Self::of_face(face)),
            None => Err(BadColor(value)),
        }
    }
}

/// Error returned when converting an out-of-range integer into a [`Color`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("color index {0} out of range; expected 0..6")]
pub struct BadColor(pub u8);
