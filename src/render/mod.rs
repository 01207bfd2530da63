//! Rendering targets

mod screen;
mod surface;
#[cfg(test)]
pub mod recording;

pub use screen::ScreenSurface;
pub use surface::{rgb, rgba, Surface};
