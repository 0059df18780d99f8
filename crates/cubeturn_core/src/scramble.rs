use std::io::Write;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::{CubeState, Face, Pos};

/// Number of sticker swaps in a default scramble.
pub const DEFAULT_SCRAMBLE_SWAPS: u32 = 50;

/// Parameters to deterministically scramble a cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Type of scramble to generate.
    pub ty: ScrambleType,
    /// Time when the scramble was requested, to the millisecond.
    pub time: DateTime<Utc>,
    /// Random seed, probably sourced from the OS.
    pub seed: String,
}
impl ScrambleParams {
    /// Generates new scramble parameters based on the current time and a
    /// random number.
    pub fn new(ty: ScrambleType) -> Self {
        let time = Utc::now().trunc_subsecs(3);
        let seed = format!("{}_{}", time_string(time), rand::rng().random::<u64>());
        Self { ty, time, seed }
    }

    /// Constructs scramble parameters from a user-chosen seed, which always
    /// produce the same scramble.
    pub fn with_seed(ty: ScrambleType, time: DateTime<Utc>, seed: impl Into<String>) -> Self {
        let time = time.trunc_subsecs(3);
        let seed = seed.into();
        Self { ty, time, seed }
    }

    /// Returns the random number generator determined by the time and seed.
    #[allow(clippy::unwrap_used)] // writing to a hasher is infallible
    pub fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.write_all(time_string(self.time).as_bytes()).unwrap();
        sha256.write_all(&self.seed.len().to_le_bytes()).unwrap();
        sha256.write_all(self.seed.as_bytes()).unwrap();
        let digest: [u8; 32] = sha256.finalize().into();
        rand_chacha::ChaCha12Rng::from_seed(digest)
    }
}

/// Type of scramble to generate.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScrambleType {
    /// Swap the colors of random pairs of stickers.
    ///
    /// Each swap picks two stickers independently and uniformly at random
    /// (possibly the same sticker, possibly a center). The result generally
    /// cannot be solved with legal turns.
    StickerSwaps(u32),
    /// Apply random legal turns. The result can always be solved.
    Twists(u32),
}
impl Default for ScrambleType {
    fn default() -> Self {
        Self::StickerSwaps(DEFAULT_SCRAMBLE_SWAPS)
    }
}

/// Output of scrambling a cube.
#[derive(Serialize, Debug, Clone)]
pub struct ScrambledCube {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Turns applied, in order. Empty for a sticker-swap scramble.
    pub twists: Vec<Face>,
    /// State of the cube after scrambling.
    pub state: CubeState,
}

impl CubeState {
    /// Scrambles the cube with fresh randomness using the default scramble:
    /// 50 random sticker swaps.
    pub fn scramble(&mut self) {
        let params = ScrambleParams::new(ScrambleType::default());
        self.scramble_with(&params);
    }

    /// Scrambles the cube deterministically and returns the turns applied.
    pub fn scramble_with(&mut self, params: &ScrambleParams) -> Vec<Face> {
        log::debug!("scrambling with {:?} (seed {:?})", params.ty, params.seed);
        self.scramble_with_rng(params.ty, &mut params.rng())
    }

    /// Scrambles the cube using `rng` and returns the turns applied, if any.
    pub fn scramble_with_rng(&mut self, ty: ScrambleType, rng: &mut impl Rng) -> Vec<Face> {
        let mut twists = vec![];
        match ty {
            ScrambleType::StickerSwaps(n) => {
                for _ in 0..n {
                    let a = random_sticker(rng);
                    let b = random_sticker(rng);
                    self.swap_stickers(a, b);
                }
            }
            ScrambleType::Twists(n) => {
                for _ in 0..n {
                    let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
                    self.perform_turn(face);
                    twists.push(face);
                }
            }
        }
        twists
    }

    /// Constructs a new cube scrambled according to `params`.
    pub fn new_scrambled(params: ScrambleParams) -> ScrambledCube {
        let mut state = Self::new();
        let twists = state.scramble_with(&params);
        ScrambledCube {
            params,
            twists,
            state,
        }
    }
}

fn random_sticker(rng: &mut impl Rng) -> (Face, Pos) {
    let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
    let pos = Pos::ALL[rng.random_range(0..Pos::ALL.len())];
    (face, pos)
}

/// Formats a scramble time as RFC 3339 with millisecond precision, which is
/// the form hashed into the seed.
fn time_string(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
