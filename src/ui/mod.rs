//! Menu layer
//!
//! Immediate-mode style: each menu keeps a little state (hover, animation)
//! and draws straight to a [`crate::render::Surface`] every frame.

mod button;
mod menu;
mod particles;
pub mod theme;

pub use menu::{MainMenu, MenuAction, PauseMenu};
