use cubeturn_core::{Color, CubeState, Face, Pos, ScrambleParams, ScrambleType, ScrambledCube};
use cubeturn_prefs::{AnimationPreferences, Preferences};

use crate::Action;
use crate::animations::{AnimationSnapshot, TurnAnimationState};

/// Cube simulation, which owns the cube state and the turn animation.
///
/// Input handlers call [`CubeSimulation::trigger_turn()`] and friends; the
/// render loop calls [`CubeSimulation::tick()`] once per frame and then reads
/// [`CubeSimulation::sticker()`] and [`CubeSimulation::animation()`].
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    /// Latest cube state. Turns are applied here immediately.
    state: CubeState,
    /// Turn animation state.
    turn_anim: TurnAnimationState,
    /// Animation tuning.
    animation_prefs: AnimationPreferences,
    /// Scramble used by [`CubeSimulation::scramble()`].
    scramble_ty: ScrambleType,
    /// Parameters of the last scramble, or `None` if the cube has not been
    /// scrambled since it was last reset.
    scramble: Option<ScrambleParams>,
    /// Number of turns applied since the last reset or scramble.
    turn_count: u64,
}
impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new(&Preferences::default())
    }
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved cube.
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            state: CubeState::new(),
            turn_anim: TurnAnimationState::default(),
            animation_prefs: prefs.animation.clone(),
            scramble_ty: prefs.scramble.ty(),
            scramble: None,
            turn_count: 0,
        }
    }

    /// Returns the latest cube state.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns the color of a sticker.
    pub fn sticker(&self, face: Face, pos: Pos) -> Color {
        self.state.sticker(face, pos)
    }
    /// Returns the animation state for the current frame.
    pub fn animation(&self) -> AnimationSnapshot {
        self.turn_anim.snapshot()
    }
    /// Returns the full turn animation state.
    pub fn turn_anim(&self) -> &TurnAnimationState {
        &self.turn_anim
    }
    /// Returns the animation tuning in effect.
    pub fn animation_prefs(&self) -> &AnimationPreferences {
        &self.animation_prefs
    }
    /// Returns the parameters of the last scramble, if the cube has been
    /// scrambled since it was last reset.
    pub fn scramble_params(&self) -> Option<&ScrambleParams> {
        self.scramble.as_ref()
    }
    /// Returns the number of turns applied since the last reset or scramble.
    pub fn turn_count(&self) -> u64 {
        self.turn_count
    }

    /// Turns a face clockwise and starts its animation. Returns whether the
    /// turn happened.
    ///
    /// While a turn is animating, all further turns are dropped and the cube
    /// is left unchanged.
    pub fn trigger_turn(&mut self, face: Face) -> bool {
        if !self.turn_anim.trigger(face, &self.animation_prefs) {
            return false;
        }
        self.state.perform_turn(face);
        self.turn_count += 1;
        log::debug!("turned {face} (turn #{})", self.turn_count);
        true
    }

    /// Advances the animation by one frame. Returns whether the cube must be
    /// redrawn.
    pub fn tick(&mut self) -> bool {
        self.turn_anim.proceed(&self.animation_prefs)
    }

    /// Returns the cube to the solved state. Any turn animation in progress
    /// continues.
    pub fn reset(&mut self) {
        self.state.reset();
        self.scramble = None;
        self.turn_count = 0;
    }

    /// Scrambles the cube with fresh randomness.
    pub fn scramble(&mut self) {
        self.scramble_with(ScrambleParams::new(self.scramble_ty));
    }

    /// Scrambles the cube deterministically, starting from whatever state it
    /// is in, and returns the turns applied (if any).
    pub fn scramble_with(&mut self, params: ScrambleParams) -> Vec<Face> {
        let twists = self.state.scramble_with(&params);
        self.scramble = Some(params);
        self.turn_count = 0;
        twists
    }

    /// Replaces the cube with a freshly scrambled one.
    pub fn load_scrambled(&mut self, scrambled: ScrambledCube) {
        self.state = scrambled.state;
        self.scramble = Some(scrambled.params);
        self.turn_count = 0;
    }

    /// Applies an input action. Returns whether the cube changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Turn(face) => self.trigger_turn(face),
            Action::Scramble => {
                self.scramble();
                true
            }
            Action::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Runs the animation until it is idle. Returns the number of frames
    /// that took.
    pub fn finish_animation(&mut self) -> usize {
        let mut frames = 0;
        while self.tick() {
            frames += 1;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixed_params(ty: ScrambleType) -> ScrambleParams {
        let time = "2024-01-01T00:00:00.000Z".parse().expect("valid timestamp");
        ScrambleParams::with_seed(ty, time, "seed")
    }

    #[test]
    fn test_turn_is_applied_before_animation() {
        let mut sim = CubeSimulation::default();
        let mut expected = CubeState::new();
        expected.perform_turn(Face::Front);

        assert!(sim.trigger_turn(Face::Front));
        assert_eq!(sim.state(), &expected);
        assert!(sim.animation().is_rotating);
        assert_eq!(sim.animation().face, Some(Face::Front));
        assert_eq!(sim.animation().angle, 0.0);
    }

    #[test]
    fn test_turn_during_animation_is_dropped() {
        let mut sim = CubeSimulation::default();
        assert!(sim.trigger_turn(Face::Front));
        sim.tick();
        let state = sim.state().clone();
        let anim = sim.turn_anim().clone();

        assert!(!sim.trigger_turn(Face::Right));
        assert!(!sim.apply(Action::Turn(Face::Front)));
        assert_eq!(sim.state(), &state);
        assert_eq!(sim.turn_anim(), &anim);
        assert_eq!(sim.turn_count(), 1);
    }

    #[test]
    fn test_turn_after_animation_is_accepted() {
        let mut sim = CubeSimulation::default();
        assert!(sim.trigger_turn(Face::Top));
        let frames = sim.finish_animation();
        assert!(frames > 0);
        assert!(!sim.animation().is_rotating);
        assert_eq!(sim.animation().face, None);

        assert!(sim.trigger_turn(Face::Right));
        assert_eq!(sim.turn_count(), 2);
    }

    #[test]
    fn test_animation_does_not_touch_stickers() {
        let mut sim = CubeSimulation::default();
        sim.trigger_turn(Face::Left);
        let state = sim.state().clone();
        while sim.tick() {
            assert_eq!(sim.state(), &state);
        }
    }

    #[test]
    fn test_four_animated_turns_restore_cube() {
        let mut sim = CubeSimulation::default();
        for _ in 0..4 {
            assert!(sim.trigger_turn(Face::Bottom));
            sim.finish_animation();
        }
        assert!(sim.state().is_solved());
        assert_eq!(sim.turn_anim().angle(), 0.0);
    }

    #[test]
    fn test_reset_and_scramble() {
        let mut sim = CubeSimulation::default();
        sim.scramble_with(fixed_params(ScrambleType::Twists(20)));
        assert!(sim.scramble_params().is_some());
        assert!(sim.state().has_balanced_colors());

        assert!(sim.apply(Action::Reset));
        assert!(sim.state().is_solved());
        assert!(sim.scramble_params().is_none());
        for face in Face::ALL {
            for pos in Pos::ALL {
                assert_eq!(sim.sticker(face, pos), Color::of_face(face));
            }
        }
    }

    #[test]
    fn test_scramble_uses_preferences() {
        let mut prefs = Preferences::default();
        prefs.scramble.method = cubeturn_prefs::ScrambleMethod::Twists;
        prefs.scramble.length = 10;
        let mut sim = CubeSimulation::new(&prefs);
        assert!(sim.apply(Action::Scramble));
        assert_eq!(
            sim.scramble_params().map(|p| p.ty),
            Some(ScrambleType::Twists(10)),
        );
        // Legal turns never unbalance the colors.
        assert!(sim.state().has_balanced_colors());
    }

    #[test]
    fn test_load_scrambled() {
        let mut sim = CubeSimulation::default();
        sim.trigger_turn(Face::Front);
        let scrambled = CubeState::new_scrambled(fixed_params(ScrambleType::default()));
        let expected = scrambled.state.clone();
        sim.load_scrambled(scrambled);
        assert_eq!(sim.state(), &expected);
        assert_eq!(sim.turn_count(), 0);
    }
}
