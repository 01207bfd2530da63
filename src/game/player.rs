//! The player character

use macroquad::color::Color;

use crate::error::GameError;
use crate::render::{rgb, Surface};
use crate::settings::PhysicsSettings;
use super::collision::move_and_collide;
use super::rect::Rect;
use super::sprite::{SkinImages, Sprite, TickContext};

pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
pub const PLAYER_COLOR: Color = rgb(0, 0, 255);

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    /// Velocity in pixels per tick (positive y is down)
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    score: u32,
    speed: f32,
    jump_power: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, physics: &PhysicsSettings) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            score: 0,
            speed: physics.player_speed,
            jump_power: physics.jump_power,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x;
        self.y = rect.y;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Only takes effect when standing on something.
    pub fn jump(&mut self) {
        if self.on_ground {
            self.vy = self.jump_power;
        }
    }

    pub fn move_left(&mut self) {
        self.vx = -self.speed;
    }

    pub fn move_right(&mut self) {
        self.vx = self.speed;
    }

    pub fn stop(&mut self) {
        self.vx = 0.0;
    }

    pub fn award(&mut self, points: u32) -> Result<(), GameError> {
        self.score = self
            .score
            .checked_add(points)
            .ok_or(GameError::ScoreOverflow { score: self.score, points })?;
        Ok(())
    }
}

impl Sprite for Player {
    fn update(&mut self, ctx: &TickContext) {
        let was_on_ground = self.on_ground;
        let hit = move_and_collide(self, ctx.platforms, ctx.physics);
        if hit.grounded && !was_on_ground {
            tracing::trace!(x = self.x, y = self.y, "landed");
        }
        if hit.hit_ceiling {
            tracing::trace!(x = self.x, y = self.y, "bumped ceiling");
        }
        if hit.hit_wall {
            tracing::trace!(x = self.x, y = self.y, "blocked by wall");
        }
    }

    fn bounding_box(&self) -> Rect {
        self.rect()
    }

    fn draw(&self, surface: &mut dyn Surface, skin: &SkinImages) {
        match &skin.player {
            Some(image) => surface.draw_image(image, self.rect()),
            None => surface.fill_rect(self.rect(), PLAYER_COLOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(400.0, 500.0, &PhysicsSettings::default())
    }

    #[test]
    fn test_jump_needs_ground() {
        let mut p = player();
        p.jump();
        assert_eq!(p.vy, 0.0);

        p.on_ground = true;
        p.jump();
        assert_eq!(p.vy, -15.0);
    }

    #[test]
    fn test_horizontal_intent_overrides() {
        let mut p = player();
        p.move_left();
        assert_eq!(p.vx, -5.0);
        p.move_right();
        assert_eq!(p.vx, 5.0);
        p.stop();
        assert_eq!(p.vx, 0.0);
    }

    #[test]
    fn test_award_overflow_is_an_error() {
        let mut p = player();
        p.award(10).unwrap();
        assert_eq!(p.score(), 10);

        p.score = u32::MAX - 5;
        assert!(matches!(p.award(10), Err(GameError::ScoreOverflow { .. })));
        assert_eq!(p.score(), u32::MAX - 5);
    }
}
