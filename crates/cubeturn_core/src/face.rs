use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::Rgb;

/// One of the six faces of the cube.
///
/// The discriminant doubles as the face's index in the sticker grid and as the
/// color index that fills the face in the solved state.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    VariantArray,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Face {
    /// +Z
    Front = 0,
    /// -Z
    Back = 1,
    /// +X
    Right = 2,
    /// -X
    Left = 3,
    /// +Y
    Top = 4,
    /// -Y
    Bottom = 5,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<u8> for Face {
    type Error = BadFace;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or(BadFace(value))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face as u8
    }
}

impl FromStr for Face {
    type Err = ParseFaceError;

    /// Parses a face from its full name (`front`), its symbol (`F`), or the
    /// digit key that turns it (`1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(face) = Self::from_symbol(c).or_else(|| Self::from_key(c)) {
                return Ok(face);
            }
        }
        Self::ALL
            .iter()
            .copied()
            .find(|face| face.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFaceError(s.to_owned()))
    }
}

impl Face {
    /// All faces, in index order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
    ];

    /// Returns the face with the given index, or `None` if the index is out of
    /// range.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::VARIANTS.get(index as usize).copied()
    }

    /// Returns the index of the face, in the range `0..6`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the single-letter symbol for the face.
    pub fn symbol(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Top => 'U',
            Face::Bottom => 'D',
        }
    }
    fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.symbol() == c)
    }

    /// Returns the digit key that turns the face: `'1'` for the front through
    /// `'6'` for the bottom.
    pub fn key(self) -> char {
        (b'1' + self as u8) as char
    }
    /// Returns the face turned by a digit key, or `None` if the key does not
    /// turn a face.
    pub fn from_key(key: char) -> Option<Self> {
        let digit = key.to_digit(10)?;
        Self::from_index(u8::try_from(digit.checked_sub(1)?).ok()?)
    }

    /// Returns the face on the other side of the cube.
    pub fn opposite(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
        }
    }

    /// Returns the axis perpendicular to the face and the sign of the face's
    /// outward normal along that axis.
    pub fn axis(self) -> (Axis, i8) {
        match self {
            Face::Front => (Axis::Z, 1),
            Face::Back => (Axis::Z, -1),
            Face::Right => (Axis::X, 1),
            Face::Left => (Axis::X, -1),
            Face::Top => (Axis::Y, 1),
            Face::Bottom => (Axis::Y, -1),
        }
    }

    /// Returns whether the cubie at `[x, y, z]`, with each coordinate in
    /// `-1..=1`, belongs to the layer that moves when this face turns.
    pub fn contains_cubie(self, cubie: [i8; 3]) -> bool {
        let (axis, sign) = self.axis();
        cubie[axis as usize] == sign
    }

    /// Returns the default sticker color for the face.
    pub fn default_color(self) -> Rgb {
        let rgb = match self {
            Face::Front => [0xe6, 0x1a, 0x1a],
            Face::Back => [0xff, 0x99, 0x00],
            Face::Right => [0x1a, 0xcc, 0x1a],
            Face::Left => [0x1a, 0x1a, 0xe6],
            Face::Top => [0xf2, 0xf2, 0xf2],
            Face::Bottom => [0xff, 0xe6, 0x1a],
        };
        Rgb { rgb }
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Face {
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        use proptest::prelude::Strategy;

        proptest::sample::select(Face::ALL.to_vec()).boxed()
    }

    type Strategy = proptest::strategy::BoxedStrategy<Self>;
}

/// Cartesian axis in cubie space.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

/// Error returned when converting an out-of-range integer into a [`Face`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("face index {0} out of range; expected 0..6")]
pub struct BadFace(pub u8);

/// Error returned when parsing an unknown face name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown face {0:?}; expected a name like `front`, a symbol like `F`, or a key `1`..`6`")]
pub struct ParseFaceError(pub String);
