//! User preferences.
//!
//! Preferences are layered: the embedded defaults, then an optional YAML
//! file, then environment variables such as `CUBETURN_ANIMATION__DAMPING`.

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use cubeturn_core::{Face, Rgb, ScrambleType};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

mod animations;

pub use animations::AnimationPreferences;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "CUBETURN";

lazy_static! {
    /// Preferences from the embedded `default.yaml`.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Turn animation tuning.
    pub animation: AnimationPreferences,
    /// Scramble to use when none is specified.
    pub scramble: ScramblePreferences,
    /// Sticker color for each face.
    pub colors: ColorPreferences,
}
impl Preferences {
    /// Loads preferences, layering the file at `path` (if any) and then the
    /// environment over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = path {
            log::debug!("loading preferences from {}", path.display());
            builder = builder.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let prefs: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .wrap_err("error loading preferences")?;
        prefs.animation.validate()?;
        Ok(prefs)
    }

    /// Parses preferences from a YAML string, filling in anything missing
    /// from the defaults.
    pub fn from_yaml(s: &str) -> Result<Self> {
        let prefs: Self = serde_norway::from_str(s).wrap_err("error parsing preferences")?;
        prefs.animation.validate()?;
        Ok(prefs)
    }

    /// Serializes preferences to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).wrap_err("error serializing preferences")
    }

    /// Saves preferences to a YAML file, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        std::fs::write(path, self.to_yaml()?)
            .wrap_err_with(|| format!("error saving preferences to {}", path.display()))?;
        log::debug!("saved preferences to {}", path.display());
        Ok(())
    }
}

/// Default scramble settings.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScramblePreferences {
    /// How to mix up the cube.
    pub method: ScrambleMethod,
    /// Number of sticker swaps or turns.
    pub length: u32,
}
impl Default for ScramblePreferences {
    fn default() -> Self {
        Self {
            method: ScrambleMethod::StickerSwaps,
            length: cubeturn_core::DEFAULT_SCRAMBLE_SWAPS,
        }
    }
}
impl ScramblePreferences {
    /// Returns the scramble type described by these preferences.
    pub fn ty(self) -> ScrambleType {
        match self.method {
            ScrambleMethod::StickerSwaps => ScrambleType::StickerSwaps(self.length),
            ScrambleMethod::Twists => ScrambleType::Twists(self.length),
        }
    }
}

/// Scramble method. See [`ScrambleType`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ScrambleMethod {
    StickerSwaps,
    Twists,
}

/// Sticker color for each face.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ColorPreferences {
    pub front: Rgb,
    pub back: Rgb,
    pub right: Rgb,
    pub left: Rgb,
    pub top: Rgb,
    pub bottom: Rgb,
}
impl Default for ColorPreferences {
    fn default() -> Self {
        Self {
            front: Face::Front.default_color(),
            back: Face::Back.default_color(),
            right: Face::Right.default_color(),
            left: Face::Left.default_color(),
            top: Face::Top.default_color(),
            bottom: Face::Bottom.default_color(),
        }
    }
}
impl ColorPreferences {
    /// Returns the color for stickers that belong to `face`.
    pub fn get(&self, face: Face) -> Rgb {
        match face {
            Face::Front => self.front,
            Face::Back => self.back,
            Face::Right => self.right,
            Face::Left => self.left,
            Face::Top => self.top,
            Face::Bottom => self.bottom,
        }
    }
}
