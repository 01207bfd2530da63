//! Window surface backed by macroquad's immediate-mode drawing

use std::collections::HashMap;
use macroquad::prelude::*;

use super::Surface;
use crate::asset::ImageHandle;
use crate::game::Rect as GameRect;

/// Draws straight to the window. Images are uploaded to the GPU the first
/// time they are drawn and kept for the life of the surface.
#[derive(Default)]
pub struct ScreenSurface {
    textures: HashMap<usize, (ImageHandle, Texture2D)>,
}

impl ScreenSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn texture_for(&mut self, image: &ImageHandle) -> &Texture2D {
        // The handle is held alongside the texture so the id can't be reused
        let (_, texture) = self.textures.entry(image.id()).or_insert_with(|| {
            let tex = Texture2D::from_rgba8(image.width() as u16, image.height() as u16, image.pixels());
            tex.set_filter(FilterMode::Nearest);
            (image.clone(), tex)
        });
        texture
    }
}

impl Surface for ScreenSurface {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, rect: GameRect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn fill_rounded_rect(&mut self, rect: GameRect, radius: f32, color: Color) {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, radius, color);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        draw_circle(x, y, radius, color);
    }

    fn draw_image(&mut self, image: &ImageHandle, dest: GameRect) {
        let texture = self.texture_for(image);
        draw_texture_ex(
            texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(dest.w, dest.h)),
                ..Default::default()
            },
        );
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        // macroquad positions text by baseline
        let dims = measure_text(text, None, size as u16, 1.0);
        draw_text_ex(
            text,
            x.round(),
            (y + dims.offset_y).round(),
            TextParams {
                font_size: size as u16,
                color,
                ..Default::default()
            },
        );
    }

    fn draw_text_centered(&mut self, text: &str, cx: f32, cy: f32, size: f32, color: Color) {
        let dims = measure_text(text, None, size as u16, 1.0);
        let x = cx - dims.width * 0.5;
        let y = cy - dims.height * 0.5;
        self.draw_text(text, x, y, size, color);
    }
}

fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    let r = r.min(w * 0.5).min(h * 0.5);
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}
