//! Sticker-level state engine for a 3x3x3 twisty cube.
//!
//! The cube is stored as six faces of nine stickers each. A face turn is an
//! atomic permutation of those stickers; nothing in this crate knows about
//! rendering or timing.

mod face;
mod rgb;
mod scramble;
mod state;
mod sticker;
#[cfg(test)]
mod tests;

pub use face::{Axis, BadFace, Face, ParseFaceError};
pub use rgb::Rgb;
pub use scramble::{DEFAULT_SCRAMBLE_SWAPS, ScrambleParams, ScrambleType, ScrambledCube};
pub use state::CubeState;
pub use sticker::{BadColor, BadPos, Color, Pos};
