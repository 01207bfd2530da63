use macroquad::color::Color;

use crate::render::{rgb, Surface};
use super::rect::Rect;
use super::sprite::{SkinImages, Sprite, TickContext};

pub const PLATFORM_COLOR: Color = rgb(0, 255, 0);

/// Static level geometry. Never moves once placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: u32, height: u32) -> Self {
        Self { rect: Rect::new(x, y, width as f32, height as f32) }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Sprite for Platform {
    fn update(&mut self, _ctx: &TickContext) {}

    fn bounding_box(&self) -> Rect {
        self.rect
    }

    fn draw(&self, surface: &mut dyn Surface, skin: &SkinImages) {
        match &skin.platform {
            Some(image) => surface.draw_image(image, self.rect),
            None => surface.fill_rect(self.rect, PLATFORM_COLOR),
        }
    }
}
