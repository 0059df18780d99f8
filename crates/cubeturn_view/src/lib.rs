//! Cube simulation state manager: couples the cube state with the visual turn
//! animation so that every frontend behaves the same way.

mod action;
mod animations;
mod simulation;

pub use action::{Action, ParseActionError};
pub use animations::{AnimationSnapshot, TurnAnimationState};
pub use simulation::CubeSimulation;
