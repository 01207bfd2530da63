//! Drawing target abstraction
//!
//! Everything the game and menus draw goes through [`Surface`]. The window
//! implementation lives in [`super::ScreenSurface`]; tests record calls.

use macroquad::color::Color;

use crate::asset::ImageHandle;
use crate::game::Rect;

pub trait Surface {
    /// Fill the whole target
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);

    /// Stretch `image` over `dest`
    fn draw_image(&mut self, image: &ImageHandle, dest: Rect);

    /// Text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);

    /// Text centered on (cx, cy)
    fn draw_text_centered(&mut self, text: &str, cx: f32, cy: f32, size: f32, color: Color);
}

/// 8-bit RGB(A) to a macroquad color
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    rgba(r, g, b, 255)
}

pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
}
