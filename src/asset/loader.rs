//! Uncached image and sound loading
//!
//! These functions always touch the filesystem; [`AssetCache`](super::AssetCache)
//! sits in front of them.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::handle::{ImageHandle, SoundFormat, SoundHandle};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unrecognised sound format in {} (expected WAV or Ogg)", .0.display())]
    UnknownSoundFormat(PathBuf),
}

fn read_file(path: &Path) -> Result<Vec<u8>, AssetError> {
    std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => AssetError::NotFound(path.to_path_buf()),
        _ => AssetError::Io { path: path.to_path_buf(), source },
    })
}

/// Read and decode an image file into RGBA8.
pub fn load_image(path: &Path) -> Result<ImageHandle, AssetError> {
    let bytes = read_file(path)?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|source| AssetError::Decode { path: path.to_path_buf(), source })?;
    Ok(ImageHandle::new(decoded.to_rgba8()))
}

/// Read a sound file and check that it is a container we can play.
pub fn load_sound(path: &Path) -> Result<SoundHandle, AssetError> {
    let bytes = read_file(path)?;
    let format = SoundFormat::sniff(&bytes)
        .ok_or_else(|| AssetError::UnknownSoundFormat(path.to_path_buf()))?;
    Ok(SoundHandle::new(bytes, format))
}
