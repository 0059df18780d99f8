//! Properties that hold across every sequence of turns.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{Color, CubeState, Face, Pos, ScrambleType};

fn turned(faces: &[Face]) -> CubeState {
    let mut cube = CubeState::new();
    cube.apply_turns(faces.iter().copied());
    cube
}

proptest! {
    #[test]
    fn proptest_turns_conserve_colors(faces: Vec<Face>) {
        let cube = turned(&faces);
        prop_assert_eq!(cube.color_counts(), [9; 6]);
    }

    #[test]
    fn proptest_turns_never_move_centers(faces: Vec<Face>) {
        let cube = turned(&faces);
        for face in Face::ALL {
            prop_assert_eq!(cube.sticker(face, Pos::CENTER), Color::of_face(face));
        }
    }

    #[test]
    fn proptest_four_turns_are_identity(faces: Vec<Face>, face: Face) {
        let mut cube = turned(&faces);
        let before = cube.clone();
        for _ in 0..4 {
            cube.perform_turn(face);
        }
        prop_assert_eq!(cube, before);
    }

    #[test]
    fn proptest_four_turns_are_identity_after_sticker_swaps(seed: u64, face: Face) {
        use rand::SeedableRng;

        let mut cube = CubeState::new();
        let mut rng = rand_chacha::ChaCha12Rng::seed_from_u64(seed);
        cube.scramble_with_rng(ScrambleType::default(), &mut rng);
        let before = cube.clone();
        cube.perform_turns(face, 4);
        prop_assert_eq!(&cube, &before);
        for _ in 0..4 {
            cube.perform_turn(face);
        }
        prop_assert_eq!(cube, before);
    }

    #[test]
    fn proptest_reset_always_solves(faces: Vec<Face>, seed: u64) {
        use rand::SeedableRng;

        let mut cube = turned(&faces);
        let mut rng = rand_chacha::ChaCha12Rng::seed_from_u64(seed);
        cube.scramble_with_rng(ScrambleType::default(), &mut rng);
        cube.reset();
        for face in Face::ALL {
            for pos in Pos::ALL {
                prop_assert_eq!(cube.sticker(face, pos), Color::of_face(face));
            }
        }
    }

    #[test]
    fn proptest_turns_are_undone_in_reverse(faces: Vec<Face>) {
        let mut cube = turned(&faces);
        for &face in faces.iter().rev() {
            cube.perform_turns(face, -1);
        }
        prop_assert!(cube.is_solved());
    }
}

#[test]
fn test_opposite_faces_commute() {
    for face in Face::ALL {
        let a = turned(&[face, face.opposite()]);
        let b = turned(&[face.opposite(), face]);
        assert_eq!(a, b, "{face:?} and its opposite do not commute");
    }
}

#[test]
fn test_adjacent_faces_do_not_commute() {
    let a = turned(&[Face::Right, Face::Top]);
    let b = turned(&[Face::Top, Face::Right]);
    assert_ne!(a, b);
}

#[test]
fn test_commutator_has_order_six() {
    // (R U R' U') repeated six times returns to solved, and no fewer
    // repetitions do.
    let mut cube = CubeState::new();
    for i in 1..=6 {
        cube.perform_turn(Face::Right);
        cube.perform_turn(Face::Top);
        cube.perform_turns(Face::Right, -1);
        cube.perform_turns(Face::Top, -1);
        assert_eq!(cube.is_solved(), i == 6, "after {i} repetitions");
    }
}

#[test]
fn test_right_top_has_order_105() {
    let mut cube = CubeState::new();
    let mut order = 0;
    loop {
        cube.apply_turns([Face::Right, Face::Top]);
        order += 1;
        if cube.is_solved() || order > 1000 {
            break;
        }
    }
    assert_eq!(order, 105);
}
