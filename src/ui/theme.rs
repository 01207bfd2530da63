//! UI Theme - Shared colors and styling constants for the menus

use macroquad::prelude::Color;

use crate::render::{rgb, rgba};

// =============================================================================
// Backgrounds
// =============================================================================

/// Main menu background
pub const MENU_BG: Color = rgb(40, 40, 40);

/// Drawn over the frozen game scene while paused (black, half opacity)
pub const PAUSE_OVERLAY: Color = rgba(0, 0, 0, 128);

/// Drifting background dots
pub const PARTICLE_COLOR: Color = rgb(100, 100, 100);
pub const PARTICLE_RADIUS: f32 = 2.0;
pub const PARTICLE_COUNT: usize = 50;

// =============================================================================
// Text
// =============================================================================

pub const TEXT_COLOR: Color = rgb(255, 255, 255);
pub const TITLE_SHADOW: Color = rgb(30, 30, 30);

/// Shadow is drawn this many pixels right and down of the title
pub const TITLE_SHADOW_OFFSET: f32 = 4.0;

pub const FONT_SIZE_TITLE: f32 = 74.0;
pub const FONT_SIZE_BUTTON: f32 = 32.0;

/// Title center height
pub const TITLE_Y: f32 = 150.0;

// =============================================================================
// Buttons
// =============================================================================

pub const BUTTON_COLOR: Color = rgb(70, 70, 70);
pub const BUTTON_HOVER: Color = rgb(100, 100, 100);
pub const BUTTON_RADIUS: f32 = 12.0;
pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

/// Top of the first button, then one row per button
pub const BUTTON_TOP: f32 = 250.0;
pub const BUTTON_SPACING: f32 = 70.0;

/// Hover grow animation: scale eases toward the target by this fraction per frame
pub const BUTTON_HOVER_SCALE: f32 = 1.1;
pub const BUTTON_EASE: f32 = 0.2;
