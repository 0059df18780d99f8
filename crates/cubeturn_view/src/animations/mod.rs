mod turn;

pub use turn::{AnimationSnapshot, TurnAnimationState};
