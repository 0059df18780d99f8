use eyre::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Tuning for the visual turn animation.
///
/// None of these affect the cube state, which changes the instant a turn is
/// triggered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Angle that the turning layer sweeps through per turn, in degrees.
    pub degrees_per_turn: f32,
    /// Fraction of the remaining angle covered each frame, in `(0, 1]`.
    pub damping: f32,
    /// Remaining angle, in degrees, below which the animation snaps to its
    /// target and stops.
    pub epsilon: f32,
    /// Whether to wrap the angle into `0..360` once a turn finishes.
    pub normalize_angles: bool,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            degrees_per_turn: 90.0,
            damping: 0.15,
            epsilon: 0.1,
            normalize_angles: true,
        }
    }
}
impl AnimationPreferences {
    /// Returns an error if the animation would never finish.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.damping > 0.0 && self.damping <= 1.0,
            "animation damping must be in (0, 1]; got {}",
            self.damping,
        );
        ensure!(
            self.epsilon > 0.0,
            "animation epsilon must be positive; got {}",
            self.epsilon,
        );
        ensure!(
            self.degrees_per_turn.is_finite(),
            "degrees per turn must be finite; got {}",
            self.degrees_per_turn,
        );
        Ok(())
    }
}
