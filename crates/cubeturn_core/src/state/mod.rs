use std::fmt;

use serde::{Deserialize, Serialize};

mod adjacency;

use adjacency::adjacent_strips;

use crate::{Color, Face, Pos};

/// Source index for each destination index when a face turns clockwise.
///
/// ```text
/// 0 1 2    6 3 0
/// 3 4 5 -> 7 4 1
/// 6 7 8    8 5 2
/// ```
const CLOCKWISE_SOURCE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Logical state of a 3x3x3 cube: the color of each of its 54 stickers.
///
/// This is the only authority on what the cube looks like. Animations never
/// modify it; a turn is applied here in full at the moment it is requested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    /// Colors indexed by [`Face::index()`] and then [`Pos::index()`].
    stickers: [[Color; 9]; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self {
            stickers: Face::ALL.map(|face| [Color::of_face(face); 9]),
        }
    }
}

impl CubeState {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cube to the solved state, in which every sticker on face
    /// `f` has color `f`.
    pub fn reset(&mut self) {
        *self = Self::new();
        log::debug!("cube reset to solved state");
    }

    /// Returns the color of a sticker.
    pub fn sticker(&self, face: Face, pos: Pos) -> Color {
        self.stickers[face.index()][pos.index()]
    }

    /// Returns the colors of all nine stickers on a face, in position order.
    pub fn face_stickers(&self, face: Face) -> [Color; 9] {
        self.stickers[face.index()]
    }

    /// Iterates over every sticker on the cube along with its location.
    pub fn iter_stickers(&self) -> impl Iterator<Item = (Face, Pos, Color)> + '_ {
        itertools::iproduct!(Face::ALL, Pos::ALL)
            .map(|(face, pos)| (face, pos, self.sticker(face, pos)))
    }

    /// Turns a face clockwise by one quarter turn.
    ///
    /// This is the only way to change the cube that keeps it in a state
    /// reachable from the solved state.
    pub fn perform_turn(&mut self, face: Face) {
        self.rotate_face_clockwise(face);
        self.rotate_adjacent_edges(face);
        log::trace!("turned {face}");
    }

    /// Turns a face clockwise by `quarter_turns` quarter turns. Negative
    /// values turn counterclockwise.
    pub fn perform_turns(&mut self, face: Face, quarter_turns: i32) {
        for _ in 0..quarter_turns.rem_euclid(4) {
            self.perform_turn(face);
        }
    }

    /// Turns each face in sequence.
    pub fn apply_turns(&mut self, faces: impl IntoIterator<Item = Face>) {
        for face in faces {
            self.perform_turn(face);
        }
    }

    /// Rotates the stickers on `face` a quarter turn clockwise, leaving the
    /// center in place and every other face untouched.
    ///
    /// On its own this does not correspond to a physical move; use
    /// [`CubeState::perform_turn()`] instead.
    pub fn rotate_face_clockwise(&mut self, face: Face) {
        rotate_face_clockwise(&mut self.stickers, face);
    }

    /// Cycles the four strips of three stickers on the faces adjacent to
    /// `face`, as a clockwise turn of `face` would.
    ///
    /// On its own this does not correspond to a physical move; use
    /// [`CubeState::perform_turn()`] instead.
    pub fn rotate_adjacent_edges(&mut self, face: Face) {
        rotate_adjacent_edges(&mut self.stickers, face);
    }

    /// Exchanges the colors of two stickers.
    ///
    /// This is not a legal move and can leave the cube unsolvable.
    pub fn swap_stickers(&mut self, a: (Face, Pos), b: (Face, Pos)) {
        let color_a = self.sticker(a.0, a.1);
        let color_b = self.sticker(b.0, b.1);
        self.stickers[a.0.index()][a.1.index()] = color_b;
        self.stickers[b.0.index()][b.1.index()] = color_a;
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.stickers
            .iter()
            .all(|face| face.iter().all(|&color| color == face[Pos::CENTER.index()]))
    }

    /// Returns the number of stickers of each color, indexed by
    /// [`Color::index()`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for (_, _, color) in self.iter_stickers() {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Returns whether each color appears on exactly nine stickers. Turns and
    /// sticker swaps both preserve this, but a deserialized state might
    /// not.
    pub fn has_balanced_colors(&self) -> bool {
        self.color_counts() == [9; 6]
    }
}

fn rotate_face_clockwise<T: Copy>(grid: &mut [[T; 9]; 6], face: Face) {
    let old = grid[face.index()];
    grid[face.index()] = CLOCKWISE_SOURCE.map(|src| old[src]);
}

fn rotate_adjacent_edges<T: Copy>(grid: &mut [[T; 9]; 6], face: Face) {
    let strips = adjacent_strips(face);
    let carried = strips.map(|(f, positions)| positions.map(|p| grid[f.index()][p.index()]));
    for (i, values) in carried.into_iter().enumerate() {
        let (dst_face, dst_positions) = strips[(i + 1) % 4];
        for (pos, value) in dst_positions.into_iter().zip(values) {
            grid[dst_face.index()][pos.index()] = value;
        }
    }
}

impl fmt::Display for CubeState {
    /// Draws the cube as an unfolded net, with each sticker shown as the
    /// symbol of the face it belongs to when solved.
    ///
    /// ```text
    ///     UUU
    ///     UUU
    ///     UUU
    /// LLL FFF RRR BBB
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |face: Face, r: usize| -> String {
            self.stickers[face.index()][r * 3..r * 3 + 3]
                .iter()
                .map(|color| color.home_face().symbol())
                .collect()
        };
        for r in 0..3 {
            writeln!(f, "    {}", row(Face::Top, r))?;
        }
        for r in 0..3 {
            let [l, fr, ri, b] =
                [Face::Left, Face::Front, Face::Right, Face::Back].map(|face| row(face, r));
            writeln!(f, "{l} {fr} {ri} {b}")?;
        }
        for r in 0..3 {
            writeln!(f, "    {}", row(Face::Bottom, r))?;
        }
        Ok(())
    }
}
