//! Audio output detection and sound cue playback
//!
//! Native: cpal is asked for a default output device once at startup. If
//! there is none the whole process runs silent; the asset cache then skips
//! sound I/O entirely.
//!
//! Playback goes through macroquad's audio, fed from the cached bytes.

use std::path::Path;
use macroquad::audio::{load_sound_from_bytes, play_sound_once, Sound};
use thiserror::Error;

use super::AssetCache;

#[derive(Debug, Error)]
pub enum AudioInitError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("no default audio output device")]
    NoOutputDevice,
    #[cfg(target_arch = "wasm32")]
    #[error("audio output is not supported on this platform")]
    Unsupported,
}

/// The output device found at startup
#[derive(Debug, Clone)]
pub struct AudioDevice {
    name: String,
}

impl AudioDevice {
    /// Look for a usable output device.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn probe() -> Result<Self, AudioInitError> {
        use cpal::traits::{DeviceTrait, HostTrait};

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioInitError::NoOutputDevice)?;
        let name = device.name().unwrap_or_else(|_| "unknown device".to_string());
        Ok(Self { name })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn probe() -> Result<Self, AudioInitError> {
        Err(AudioInitError::Unsupported)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Playable sound effects, prepared once at startup
#[derive(Default)]
pub struct SoundBank {
    coin: Option<Sound>,
}

impl SoundBank {
    /// Pull the coin cue through the cache and hand it to the audio backend.
    /// Any failure along the way leaves the cue silent.
    pub async fn load(assets: &mut AssetCache, coin_sound: Option<&Path>) -> Self {
        let coin = match coin_sound {
            Some(path) => Self::prepare(assets, path).await,
            None => None,
        };
        Self { coin }
    }

    async fn prepare(assets: &mut AssetCache, path: &Path) -> Option<Sound> {
        let handle = assets.get_sound(path)?;
        match load_sound_from_bytes(handle.bytes()).await {
            Ok(sound) => Some(sound),
            Err(e) => {
                tracing::warn!(path = %path.display(), "audio backend rejected sound: {e}");
                None
            }
        }
    }

    pub fn play_coin(&self) {
        if let Some(sound) = &self.coin {
            play_sound_once(sound);
        }
    }
}
