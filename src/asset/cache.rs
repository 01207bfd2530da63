//! Asset Cache - load-once access to images and sounds
//!
//! Constructed once by the frame driver and passed by reference to whoever
//! needs art or audio. Nothing is ever evicted.
//!
//! Failures never propagate to callers:
//! - a missing or undecodable image yields the shared placeholder
//! - a missing or unplayable sound yields `None` (silence)
//!
//! Failed paths are remembered so a bad path is only read (and warned
//! about) once. The placeholder itself is never stored under the requested
//! path, and [`AssetCache::forget`] drops both kinds of entry so the next
//! request goes back to disk.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::handle::{ImageHandle, SoundHandle};
use super::loader::{load_image, load_sound};

pub struct AssetCache {
    /// Relative request paths are resolved against this directory
    root: PathBuf,
    images: HashMap<PathBuf, ImageHandle>,
    sounds: HashMap<PathBuf, SoundHandle>,
    failed_images: HashSet<PathBuf>,
    failed_sounds: HashSet<PathBuf>,
    placeholder: ImageHandle,
    /// False when the audio device could not be opened at startup
    sound_enabled: bool,
}

impl AssetCache {
    pub fn new(root: impl Into<PathBuf>, sound_enabled: bool) -> Self {
        Self {
            root: root.into(),
            images: HashMap::new(),
            sounds: HashMap::new(),
            failed_images: HashSet::new(),
            failed_sounds: HashSet::new(),
            placeholder: ImageHandle::placeholder(),
            sound_enabled,
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        // join() keeps absolute paths as-is
        self.root.join(path)
    }

    /// Get an image, loading it on first request.
    ///
    /// Never fails: returns the placeholder if the file is missing or
    /// cannot be decoded.
    pub fn get_image(&mut self, path: impl AsRef<Path>) -> ImageHandle {
        let path = path.as_ref();
        if let Some(image) = self.images.get(path) {
            return image.clone();
        }
        if self.failed_images.contains(path) {
            return self.placeholder.clone();
        }

        match load_image(&self.resolve(path)) {
            Ok(image) => {
                tracing::debug!(path = %path.display(), w = image.width(), h = image.height(), "image loaded");
                self.images.insert(path.to_path_buf(), image.clone());
                image
            }
            Err(e) => {
                tracing::warn!("image unavailable, using placeholder: {e}");
                self.failed_images.insert(path.to_path_buf());
                self.placeholder.clone()
            }
        }
    }

    /// Get a sound, loading it on first request.
    ///
    /// Returns `None` without touching the disk when sound is disabled, and
    /// `None` when the file is missing or not a playable format.
    pub fn get_sound(&mut self, path: impl AsRef<Path>) -> Option<SoundHandle> {
        if !self.sound_enabled {
            return None;
        }

        let path = path.as_ref();
        if let Some(sound) = self.sounds.get(path) {
            return Some(sound.clone());
        }
        if self.failed_sounds.contains(path) {
            return None;
        }

        match load_sound(&self.resolve(path)) {
            Ok(sound) => {
                tracing::debug!(path = %path.display(), format = ?sound.format(), "sound loaded");
                self.sounds.insert(path.to_path_buf(), sound.clone());
                Some(sound)
            }
            Err(e) => {
                tracing::warn!("sound unavailable, staying silent: {e}");
                self.failed_sounds.insert(path.to_path_buf());
                None
            }
        }
    }

    /// Drop any cached result (success or failure) for `path`.
    pub fn forget(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.images.remove(path);
        self.sounds.remove(path);
        self.failed_images.remove(path);
        self.failed_sounds.remove(path);
    }

    #[cfg(test)]
    pub fn is_placeholder(&self, image: &ImageHandle) -> bool {
        image.ptr_eq(&self.placeholder)
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Number of successfully loaded images
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Number of successfully loaded sounds
    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::handle::{SoundFormat, PLACEHOLDER_FILL};
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str, w: u32, h: u32) {
        let img = RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255]));
        img.save(dir.join(name)).unwrap();
    }

    fn write_wav(dir: &Path, name: &str) {
        let mut bytes = b"RIFF".to_vec();
        bytes.extend_from_slice(&36u32.to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        std::fs::write(dir.join(name), bytes).unwrap();
    }

    #[test]
    fn test_missing_image_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = AssetCache::new(dir.path(), true);

        let img = cache.get_image("does/not/exist.png");
        assert_eq!((img.width(), img.height()), (32, 32));
        assert_eq!(img.pixel(10, 10), PLACEHOLDER_FILL);
        assert!(cache.is_placeholder(&img));
        assert_eq!(cache.image_count(), 0);
    }

    #[test]
    fn test_image_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "player.png", 30, 40);
        let mut cache = AssetCache::new(dir.path(), true);

        let first = cache.get_image("player.png");
        assert_eq!((first.width(), first.height()), (30, 40));
        assert!(!cache.is_placeholder(&first));

        // Deleting the file does not matter once it is cached
        std::fs::remove_file(dir.path().join("player.png")).unwrap();
        let second = cache.get_image("player.png");
        assert!(first.ptr_eq(&second));
        assert_eq!(cache.image_count(), 1);
    }

    #[test]
    fn test_undecodable_image_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"definitely not a png").unwrap();
        let mut cache = AssetCache::new(dir.path(), true);

        let img = cache.get_image("broken.png");
        assert!(cache.is_placeholder(&img));
    }

    #[test]
    fn test_failure_is_remembered_until_forgotten() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = AssetCache::new(dir.path(), true);

        let first = cache.get_image("late.png");
        assert!(cache.is_placeholder(&first));

        // File appears later: the remembered failure still wins...
        write_png(dir.path(), "late.png", 8, 8);
        let second = cache.get_image("late.png");
        assert!(cache.is_placeholder(&second));

        // ...until the cache is told to forget it
        cache.forget("late.png");
        let img = cache.get_image("late.png");
        assert!(!cache.is_placeholder(&img));
        assert_eq!(img.width(), 8);
    }

    #[test]
    fn test_sound_loaded_and_cached() {
        let dir = tempfile::tempdir().unwrap();
        write_wav(dir.path(), "coin.wav");
        let mut cache = AssetCache::new(dir.path(), true);

        let first = cache.get_sound("coin.wav").unwrap();
        assert_eq!(first.format(), SoundFormat::Wav);
        let second = cache.get_sound("coin.wav").unwrap();
        assert!(first.ptr_eq(&second));
        assert_eq!(cache.sound_count(), 1);
    }

    #[test]
    fn test_missing_or_bad_sound_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("noise.mp3"), b"ID3\x03garbage").unwrap();
        let mut cache = AssetCache::new(dir.path(), true);

        assert!(cache.get_sound("missing.wav").is_none());
        assert!(cache.get_sound("noise.mp3").is_none());
        assert_eq!(cache.sound_count(), 0);
    }

    #[test]
    fn test_disabled_audio_never_loads() {
        let dir = tempfile::tempdir().unwrap();
        write_wav(dir.path(), "coin.wav");
        let mut cache = AssetCache::new(dir.path(), false);

        assert!(!cache.sound_enabled());
        assert!(cache.get_sound("coin.wav").is_none());
        assert_eq!(cache.sound_count(), 0);
    }
}
