use cubeturn_core::Face;
use cubeturn_prefs::AnimationPreferences;
use serde::Serialize;

/// State of the visual animation for the most recent turn.
///
/// The cube state has already changed by the time the animation starts, so
/// this carries no authority over the stickers. It only tells a renderer which
/// layer to draw rotated and by how much.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TurnAnimationState {
    /// Face whose layer is turning, or `None` if idle.
    face: Option<Face>,
    /// Current visual angle, in degrees.
    angle: f32,
    /// Angle that `angle` is easing toward, in degrees.
    target_angle: f32,
}
impl TurnAnimationState {
    /// Starts animating a turn of `face`. Returns `false` and does nothing if
    /// any face is already animating.
    pub fn trigger(&mut self, face: Face, prefs: &AnimationPreferences) -> bool {
        if let Some(current) = self.face {
            log::debug!("ignoring turn of {face} while {current} is animating");
            return false;
        }
        self.face = Some(face);
        self.target_angle += prefs.degrees_per_turn;
        true
    }

    /// Steps the animation forward by one frame. Returns whether the cube
    /// should be redrawn.
    pub fn proceed(&mut self, prefs: &AnimationPreferences) -> bool {
        let Some(face) = self.face else {
            return false;
        };

        let diff = self.target_angle - self.angle;
        if diff.abs() > prefs.epsilon {
            self.angle += diff * prefs.damping;
            log::trace!("{face} at {:.3}° of {:.3}°", self.angle, self.target_angle);
        } else {
            if prefs.normalize_angles {
                self.target_angle = self.target_angle.rem_euclid(360.0);
            }
            self.angle = self.target_angle;
            self.face = None;
            log::trace!("{face} settled at {:.3}°", self.angle);
        }
        true
    }

    /// Returns the face whose layer is turning, or `None` if idle.
    pub fn face(&self) -> Option<Face> {
        self.face
    }
    /// Returns whether a turn is animating.
    pub fn is_rotating(&self) -> bool {
        self.face.is_some()
    }
    /// Returns the current visual angle, in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }
    /// Returns the angle that the animation is easing toward, in degrees.
    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }
    /// Returns the signed angle still to travel, in degrees.
    ///
    /// Because the stickers are already in their final places, a renderer
    /// should draw the turning layer rotated by the negation of this.
    pub fn remaining_angle(&self) -> f32 {
        self.target_angle - self.angle
    }

    /// Returns a copy of the state for a renderer.
    pub fn snapshot(&self) -> AnimationSnapshot {
        AnimationSnapshot {
            face: self.face,
            angle: self.angle,
            remaining_angle: self.remaining_angle(),
            is_rotating: self.is_rotating(),
        }
    }
}

/// Animation state read by a renderer once per frame.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct AnimationSnapshot {
    /// Face whose layer is turning, or `None` if idle.
    pub face: Option<Face>,
    /// Current visual angle, in degrees.
    pub angle: f32,
    /// Signed angle still to travel, in degrees.
    pub remaining_angle: f32,
    /// Whether a turn is animating.
    pub is_rotating: bool,
}
impl AnimationSnapshot {
    /// Returns whether the cubie at `[x, y, z]` should be drawn rotated.
    pub fn is_cubie_turning(&self, cubie: [i8; 3]) -> bool {
        self.face.is_some_and(|face| face.contains_cubie(cubie))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn ticks_until_idle(anim: &mut TurnAnimationState, prefs: &AnimationPreferences) -> usize {
        let mut ticks = 0;
        while anim.is_rotating() && ticks < 10_000 {
            anim.proceed(prefs);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_idle_by_default() {
        let mut anim = TurnAnimationState::default();
        assert!(!anim.is_rotating());
        assert_eq!(anim.face(), None);
        assert!(!anim.proceed(&AnimationPreferences::default()));
        assert_eq!(anim.angle(), 0.0);
    }

    #[test]
    fn test_trigger_starts_rotation() {
        let prefs = AnimationPreferences::default();
        let mut anim = TurnAnimationState::default();
        assert!(anim.trigger(Face::Right, &prefs));
        assert!(anim.is_rotating());
        assert_eq!(anim.face(), Some(Face::Right));
        assert_eq!(anim.target_angle(), 90.0);
        assert_eq!(anim.remaining_angle(), 90.0);
    }

    #[test]
    fn test_first_tick_eases_by_damping() {
        let prefs = AnimationPreferences::default();
        let mut anim = TurnAnimationState::default();
        anim.trigger(Face::Front, &prefs);
        assert!(anim.proceed(&prefs));
        assert!((anim.angle() - 13.5).abs() < 1e-4);
    }

    #[test]
    fn test_converges_in_bounded_ticks() {
        let prefs = AnimationPreferences::default();
        let mut anim = TurnAnimationState::default();
        anim.trigger(Face::Top, &prefs);

        // 90 * 0.85^n drops below 0.1 after about 42 ticks, plus one tick to
        // snap.
        let ticks = ticks_until_idle(&mut anim, &prefs);
        assert!((40..=46).contains(&ticks), "took {ticks} ticks");
        assert!(!anim.is_rotating());
        assert_eq!(anim.angle(), anim.target_angle());
        assert_eq!(anim.remaining_angle(), 0.0);
    }

    #[test]
    fn test_not_converged_early() {
        let prefs = AnimationPreferences::default();
        let mut anim = TurnAnimationState::default();
        anim.trigger(Face::Top, &prefs);
        for _ in 0..10 {
            anim.proceed(&prefs);
        }
        assert!(anim.is_rotating());
        assert!(anim.remaining_angle() > prefs.epsilon);
    }

    #[test]
    fn test_angles_wrap_after_full_rotation() {
        let prefs = AnimationPreferences::default();
        let mut anim = TurnAnimationState::default();
        for _ in 0..4 {
            assert!(anim.trigger(Face::Left, &prefs));
            ticks_until_idle(&mut anim, &prefs);
        }
        assert_eq!(anim.target_angle(), 0.0);
        assert_eq!(anim.angle(), 0.0);

        assert!(anim.trigger(Face::Left, &prefs));
        assert_eq!(anim.target_angle(), 90.0);
    }

    #[test]
    fn test_angles_accumulate_without_normalization() {
        let prefs = AnimationPreferences {
            normalize_angles: false,
            ..Default::default()
        };
        let mut anim = TurnAnimationState::default();
        for _ in 0..5 {
            anim.trigger(Face::Back, &prefs);
            ticks_until_idle(&mut anim, &prefs);
        }
        assert_eq!(anim.target_angle(), 450.0);
        assert_eq!(anim.angle(), 450.0);
    }

    #[test]
    fn test_snapshot_selects_turning_layer() {
        let prefs = AnimationPreferences::default();
        let mut anim = TurnAnimationState::default();
        assert!(!anim.snapshot().is_cubie_turning([0, 1, 1]));

        anim.trigger(Face::Bottom, &prefs);
        let snapshot = anim.snapshot();
        assert!(snapshot.is_rotating);
        assert!(snapshot.is_cubie_turning([1, -1, 0]));
        assert!(!snapshot.is_cubie_turning([1, 0, 0]));
    }

    proptest! {
        #[test]
        fn proptest_second_trigger_is_ignored(
            first in proptest::sample::select(Face::ALL.to_vec()),
            second in proptest::sample::select(Face::ALL.to_vec()),
            ticks in 0_usize..30,
        ) {
            let prefs = AnimationPreferences::default();
            let mut anim = TurnAnimationState::default();
            prop_assert!(anim.trigger(first, &prefs));
            for _ in 0..ticks {
                anim.proceed(&prefs);
            }
            prop_assume!(anim.is_rotating());

            let before = anim.clone();
            prop_assert!(!anim.trigger(second, &prefs));
            prop_assert_eq!(anim, before);
        }
    }
}
