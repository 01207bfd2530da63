//! Collectible coins

use macroquad::color::Color;

use crate::render::{rgb, Surface};
use super::rect::Rect;
use super::sprite::{SkinImages, Sprite, TickContext};

pub const COIN_SIZE: f32 = 20.0;
pub const COIN_COLOR: Color = rgb(255, 255, 0);

/// Phase advance per tick
const PHASE_STEP: f32 = 0.2;
/// Peak bob distance in pixels
const BOB_HEIGHT: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    x: f32,
    y: f32,
    phase: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, phase: 0.0 }
    }

    #[cfg(test)]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Draw-only vertical offset. The bounding box stays at the anchor.
    pub fn bob_offset(&self) -> f32 {
        (self.phase.sin().abs() * BOB_HEIGHT).floor()
    }
}

impl Sprite for Coin {
    fn update(&mut self, _ctx: &TickContext) {
        self.phase += PHASE_STEP;
    }

    fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, COIN_SIZE, COIN_SIZE)
    }

    fn draw(&self, surface: &mut dyn Surface, skin: &SkinImages) {
        let rect = self.bounding_box().offset(0.0, self.bob_offset());
        match &skin.coin {
            Some(image) => surface.draw_image(image, rect),
            None => surface.fill_circle(rect.center_x(), rect.center_y(), COIN_SIZE * 0.5, COIN_COLOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PhysicsSettings;

    #[test]
    fn test_phase_and_bob() {
        let physics = PhysicsSettings::default();
        let ctx = TickContext { platforms: &[], physics: &physics };
        let mut coin = Coin::new(350.0, 350.0);
        assert_eq!(coin.bob_offset(), 0.0);

        for _ in 0..8 {
            coin.update(&ctx);
        }
        // phase 1.6: |sin| ~ 0.9996 → 4
        assert!((coin.phase() - 1.6).abs() < 1e-4);
        assert_eq!(coin.bob_offset(), 4.0);

        for _ in 0..100 {
            coin.update(&ctx);
            assert!((0.0..=5.0).contains(&coin.bob_offset()));
        }
    }

    #[test]
    fn test_bob_does_not_move_bounding_box() {
        let physics = PhysicsSettings::default();
        let ctx = TickContext { platforms: &[], physics: &physics };
        let mut coin = Coin::new(150.0, 250.0);
        for _ in 0..5 {
            coin.update(&ctx);
        }
        assert_eq!(coin.bounding_box(), Rect::new(150.0, 250.0, 20.0, 20.0));
    }
}
