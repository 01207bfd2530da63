//! Clickable menu button with a hover grow animation

use crate::game::Rect;
use crate::render::Surface;
use super::theme::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Unscaled bounds
    pub rect: Rect,
    pub label: String,
    hovered: bool,
    scale: f32,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self { rect, label: label.into(), hovered: false, scale: 1.0 }
    }

    /// Track the pointer and step the scale animation. Call once per frame.
    pub fn update(&mut self, mouse: (f32, f32)) {
        self.hovered = self.rect.contains(mouse.0, mouse.1);
        let target = if self.hovered { BUTTON_HOVER_SCALE } else { 1.0 };
        self.scale += (target - self.scale) * BUTTON_EASE;
    }

    /// Click test against the unscaled bounds
    pub fn hit(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }

    #[cfg(test)]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[cfg(test)]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let rect = self.rect.scaled(self.scale);
        let color = if self.hovered { BUTTON_HOVER } else { BUTTON_COLOR };
        surface.fill_rounded_rect(rect, BUTTON_RADIUS, color);
        surface.draw_text_centered(&self.label, rect.center_x(), rect.center_y(), FONT_SIZE_BUTTON, TEXT_COLOR);
    }
}
