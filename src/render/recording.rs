//! Surface that records draw calls, for tests

use macroquad::color::Color;

use super::Surface;
use crate::asset::ImageHandle;
use crate::game::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect(Rect, Color),
    RoundedRect(Rect, f32, Color),
    Circle { x: f32, y: f32, radius: f32, color: Color },
    Image { id: usize, dest: Rect },
    Text { text: String, x: f32, y: f32, size: f32, color: Color, centered: bool },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundedRect(rect, radius, color));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color });
    }

    fn draw_image(&mut self, image: &ImageHandle, dest: Rect) {
        self.commands.push(DrawCommand::Image { id: image.id(), dest });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, size, color, centered: false });
    }

    fn draw_text_centered(&mut self, text: &str, cx: f32, cy: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x: cx, y: cy, size, color, centered: true });
    }
}
