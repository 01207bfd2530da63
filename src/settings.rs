//! Game tunables
//!
//! Defaults reproduce the stock game. An optional RON file can override any
//! subset of fields:
//!
//! ```ron
//! (
//!     physics: (gravity: 0.6),
//!     skin: (player: Some("sprites/hero.png")),
//!     audio: (coin_sound: None),
//! )
//! ```

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const GAME_TITLE: &str = "Platformer Adventure";

/// Settings file picked up from the working directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "platformer.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Motion constants, in pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub player_speed: f32,
    /// Vertical velocity applied by a jump (negative is up)
    pub jump_power: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            player_speed: 5.0,
            jump_power: -15.0,
            gravity: 0.8,
        }
    }
}

/// Optional images for each sprite kind. `None` keeps the flat shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSkin {
    pub player: Option<PathBuf>,
    pub platform: Option<PathBuf>,
    pub coin: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Played on coin pickup
    pub coin_sound: Option<PathBuf>,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            coin_sound: Some(PathBuf::from("sounds/coin.wav")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsSettings,
    pub coin_value: u32,
    pub target_fps: u32,
    pub skin: SpriteSkin,
    pub audio: AudioSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsSettings::default(),
            coin_value: 10,
            target_fps: 60,
            skin: SpriteSkin::default(),
            audio: AudioSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_ron(text: &str, path: &Path) -> Result<Self, SettingsError> {
        let settings: Settings = ron::from_str(text)
            .map_err(|source| SettingsError::Parse { path: path.to_path_buf(), source })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::Io { path: path.to_path_buf(), source })?;
        Self::from_ron(&text, path)
    }

    /// Load `path` if given, else `platformer.ron` if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_SETTINGS_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let p = &self.physics;
        if !(p.player_speed.is_finite() && p.player_speed >= 0.0) {
            return Err(SettingsError::Invalid { field: "physics.player_speed", reason: "must be a non-negative number" });
        }
        if !(p.jump_power.is_finite() && p.jump_power <= 0.0) {
            return Err(SettingsError::Invalid { field: "physics.jump_power", reason: "must be zero or negative (up)" });
        }
        if !(p.gravity.is_finite() && p.gravity > 0.0) {
            return Err(SettingsError::Invalid { field: "physics.gravity", reason: "must be positive" });
        }
        if self.target_fps == 0 {
            return Err(SettingsError::Invalid { field: "target_fps", reason: "must be at least 1" });
        }
        Ok(())
    }
}
