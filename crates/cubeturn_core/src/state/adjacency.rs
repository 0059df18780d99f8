//! Fixed cube topology: which stickers on neighboring faces move when a face
//! turns.
//!
//! Each face's net is drawn as seen when looking straight at it, oriented so
//! that the top face's bottom row and the bottom face's top row both border
//! the front face, and the back face is seen from behind with the top face
//! above it.

use crate::{Face, Pos};

/// Strip of three stickers along the edge of a neighboring face.
pub(crate) type Strip = (Face, [Pos; 3]);

const fn pos(index: u8) -> Pos {
    match Pos::new(index) {
        Some(p) => p,
        None => panic!("sticker position out of range"),
    }
}

const fn strip(face: Face, [a, b, c]: [u8; 3]) -> Strip {
    (face, [pos(a), pos(b), pos(c)])
}

/// Neighboring strips for each face, indexed by [`Face::index()`].
///
/// During a clockwise turn, the stickers in strip `i` move into strip
/// `(i + 1) % 4`, keeping their order within the strip.
pub(crate) const ADJACENT_STRIPS: [[Strip; 4]; 6] = {
    use Face::*;
    [
        // Front
        [
            strip(Top, [6, 7, 8]),
            strip(Right, [0, 3, 6]),
            strip(Bottom, [2, 1, 0]),
            strip(Left, [8, 5, 2]),
        ],
        // Back
        [
            strip(Top, [0, 1, 2]),
            strip(Left, [6, 3, 0]),
            strip(Bottom, [8, 7, 6]),
            strip(Right, [2, 5, 8]),
        ],
        // Right
        [
            strip(Top, [2, 5, 8]),
            strip(Back, [6, 3, 0]),
            strip(Bottom, [2, 5, 8]),
            strip(Front, [2, 5, 8]),
        ],
        // Left
        [
            strip(Top, [0, 3, 6]),
            strip(Front, [0, 3, 6]),
            strip(Bottom, [0, 3, 6]),
            strip(Back, [8, 5, 2]),
        ],
        // Top
        [
            strip(Front, [0, 1, 2]),
            strip(Left, [0, 1, 2]),
            strip(Back, [0, 1, 2]),
            strip(Right, [0, 1, 2]),
        ],
        // Bottom
        [
            strip(Front, [6, 7, 8]),
            strip(Right, [6, 7, 8]),
            strip(Back, [6, 7, 8]),
            strip(Left, [6, 7, 8]),
        ],
    ]
};

/// Returns the four strips that move when `face` turns.
pub(crate) fn adjacent_strips(face: Face) -> &'static [Strip; 4] {
    &ADJACENT_STRIPS[face.index()]
}
