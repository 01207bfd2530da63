//! Asset loading
//!
//! ```text
//! AssetCache ── get_image(path) ──> ImageHandle   (placeholder on failure)
//!            └─ get_sound(path) ──> Option<SoundHandle>   (None on failure
//!                                                         or when muted)
//! ```
//!
//! Paths are relative to the asset root given on the command line
//! (`assets/` by default).

mod audio;
mod cache;
mod handle;
mod loader;

pub use audio::{AudioDevice, SoundBank};
pub use cache::AssetCache;
pub use handle::ImageHandle;
