//! Shared handles to decoded images and sound data
//!
//! Handles are cheap to clone (reference counted) and compare by identity,
//! which is what the renderer keys its GPU texture cache on.

use std::rc::Rc;
use image::{Rgba, RgbaImage};

/// Edge length of the fallback image
pub const PLACEHOLDER_SIZE: u32 = 32;

/// Fill of the fallback image: loud magenta so missing art is obvious
pub const PLACEHOLDER_FILL: [u8; 4] = [255, 0, 255, 255];

/// 1px border around the fallback image
pub const PLACEHOLDER_BORDER: [u8; 4] = [0, 0, 0, 255];

/// A decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct ImageHandle(Rc<RgbaImage>);

impl ImageHandle {
    pub fn new(image: RgbaImage) -> Self {
        Self(Rc::new(image))
    }

    /// The magenta-with-black-border stand-in for images that failed to load.
    pub fn placeholder() -> Self {
        let last = PLACEHOLDER_SIZE - 1;
        let image = RgbaImage::from_fn(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, |x, y| {
            if x == 0 || y == 0 || x == last || y == last {
                Rgba(PLACEHOLDER_BORDER)
            } else {
                Rgba(PLACEHOLDER_FILL)
            }
        });
        Self::new(image)
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Raw RGBA8 pixels, row-major
    pub fn pixels(&self) -> &[u8] {
        self.0.as_raw()
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.0.get_pixel(x, y).0
    }

    /// Identity key, stable for the lifetime of the handle
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    #[cfg(test)]
    pub fn ptr_eq(&self, other: &ImageHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Container formats the audio backend can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundFormat {
    Wav,
    Ogg,
}

impl SoundFormat {
    /// Identify a sound file by its magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WAVE" {
            Some(SoundFormat::Wav)
        } else if bytes.starts_with(b"OggS") {
            Some(SoundFormat::Ogg)
        } else {
            None
        }
    }
}

/// Encoded sound file contents, validated by format sniffing
#[derive(Debug, Clone)]
pub struct SoundHandle {
    bytes: Rc<[u8]>,
    format: SoundFormat,
}

impl SoundHandle {
    pub fn new(bytes: Vec<u8>, format: SoundFormat) -> Self {
        Self { bytes: bytes.into(), format }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> SoundFormat {
        self.format
    }

    #[cfg(test)]
    pub fn ptr_eq(&self, other: &SoundHandle) -> bool {
        Rc::ptr_eq(&self.bytes, &other.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_look() {
        let img = ImageHandle::placeholder();
        assert_eq!((img.width(), img.height()), (32, 32));
        assert_eq!(img.pixel(0, 0), PLACEHOLDER_BORDER);
        assert_eq!(img.pixel(31, 16), PLACEHOLDER_BORDER);
        assert_eq!(img.pixel(16, 16), PLACEHOLDER_FILL);
        assert_eq!(img.pixels().len(), 32 * 32 * 4);
    }

    #[test]
    fn test_clones_share_identity() {
        let a = ImageHandle::placeholder();
        let b = a.clone();
        let c = ImageHandle::placeholder();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.id(), b.id());
        assert!(!a.ptr_eq(&c));
    }

    #[test]
    fn test_sniff() {
        let mut wav = b"RIFF\0\0\0\0WAVEfmt ".to_vec();
        assert_eq!(SoundFormat::sniff(&wav), Some(SoundFormat::Wav));
        wav[8] = b'X';
        assert_eq!(SoundFormat::sniff(&wav), None);

        assert_eq!(SoundFormat::sniff(b"OggS\0\x02"), Some(SoundFormat::Ogg));
        assert_eq!(SoundFormat::sniff(b"ID3"), None);
        assert_eq!(SoundFormat::sniff(b""), None);
    }
}
