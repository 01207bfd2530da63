//! Game World
//!
//! One play session: the player, the level's platforms and the coins still
//! waiting to be picked up. Owned by the app for the life of the process.
//!
//! A tick runs in a fixed order:
//! 1. held-key movement intent
//! 2. sprite updates (coin animation)
//! 3. player update (gravity + collision)
//! 4. coin pickup → score + CoinCollected events

use macroquad::color::{Color, WHITE};

use crate::error::GameError;
use crate::input::HeldKeys;
use crate::render::{rgb, Surface};
use crate::settings::{PhysicsSettings, Settings};
use super::coin::Coin;
use super::entity::Entity;
use super::event::{CoinCollected, EventQueue};
use super::group::SpriteGroup;
use super::level::{COIN_POSITIONS, PLATFORM_LIST, PLAYER_SPAWN};
use super::platform::Platform;
use super::player::Player;
use super::sprite::{SkinImages, Sprite, TickContext};

pub const SKY_COLOR: Color = rgb(100, 100, 255);
pub const SCORE_POS: (f32, f32) = (10.0, 10.0);
pub const SCORE_FONT_SIZE: f32 = 36.0;

pub struct World {
    player: Player,
    /// Static for the whole session, never despawned
    platforms: Vec<Platform>,
    /// Only uncollected coins live here
    coins: SpriteGroup<Coin>,
    /// Coins picked up this tick, removed after the overlap scan
    despawn_queue: Vec<Entity>,
    pub events: EventQueue<CoinCollected>,
    physics: PhysicsSettings,
    coin_value: u32,
}

impl World {
    /// A fresh session on the built-in level
    pub fn new(settings: &Settings) -> Self {
        let (px, py) = PLAYER_SPAWN;
        let platforms = PLATFORM_LIST.iter().map(|&(x, y, w, h)| Platform::new(x, y, w, h)).collect();
        let mut coins = SpriteGroup::new();
        for (x, y) in COIN_POSITIONS {
            coins.spawn(Coin::new(x, y));
        }

        Self {
            player: Player::new(px, py, &settings.physics),
            platforms,
            coins,
            despawn_queue: Vec::new(),
            events: EventQueue::new(),
            physics: settings.physics,
            coin_value: settings.coin_value,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn coins(&self) -> &SpriteGroup<Coin> {
        &self.coins
    }

    pub fn tick(&mut self, held: HeldKeys) -> Result<(), GameError> {
        if held.left {
            self.player.move_left();
        } else if held.right {
            self.player.move_right();
        } else {
            self.player.stop();
        }

        let ctx = TickContext { platforms: &self.platforms, physics: &self.physics };

        for coin in self.coins.sprites_mut() {
            coin.update(&ctx);
        }
        self.player.update(&ctx);

        self.collect_coins()
    }

    fn collect_coins(&mut self) -> Result<(), GameError> {
        let hitbox = self.player.bounding_box();
        self.despawn_queue.extend(
            self.coins
                .iter()
                .filter(|(_, coin)| coin.bounding_box().overlaps(&hitbox))
                .map(|(entity, _)| entity),
        );

        if self.despawn_queue.is_empty() {
            return Ok(());
        }
        for entity in self.despawn_queue.drain(..) {
            let Some(coin) = self.coins.despawn(entity) else {
                continue;
            };
            self.player.award(self.coin_value)?;
            let rect = coin.bounding_box();
            tracing::debug!(score = self.player.score(), "coin collected at ({}, {})", rect.x, rect.y);
            self.events.send(CoinCollected { coin: entity, value: self.coin_value, x: rect.x, y: rect.y });
        }
        if self.coins.is_empty() {
            tracing::info!(score = self.player.score(), "all coins collected");
        }
        Ok(())
    }

    /// Sky, platforms, coins, player, then the score on top
    pub fn draw(&self, surface: &mut dyn Surface, skin: &SkinImages) {
        surface.clear(SKY_COLOR);
        for platform in &self.platforms {
            platform.draw(surface, skin);
        }
        for coin in self.coins.sprites() {
            coin.draw(surface, skin);
        }
        self.player.draw(surface, skin);

        let score = format!("Score: {}", self.player.score());
        surface.draw_text(&score, SCORE_POS.0, SCORE_POS.1, SCORE_FONT_SIZE, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::coin::COIN_COLOR;
    use crate::game::player::PLAYER_COLOR;
    use crate::render::recording::{DrawCommand, RecordingSurface};

    fn world() -> World {
        World::new(&Settings::default())
    }

    fn idle() -> HeldKeys {
        HeldKeys::default()
    }

    #[test]
    fn test_new_session_layout() {
        let w = world();
        assert_eq!((w.player().x, w.player().y), (400.0, 500.0));
        assert_eq!(w.player().score(), 0);
        assert_eq!(w.platforms().len(), 4);
        assert_eq!(w.coins().len(), 3);
    }

    #[test]
    fn test_player_falls_onto_ground() {
        let mut w = world();
        for _ in 0..30 {
            w.tick(idle()).unwrap();
        }
        assert!(w.player().on_ground);
        assert_eq!(w.player().rect().bottom(), 560.0);
    }

    #[test]
    fn test_held_keys_move_player() {
        let mut w = world();
        w.tick(HeldKeys { left: true, right: false }).unwrap();
        assert_eq!(w.player().x, 395.0);
        w.tick(HeldKeys { left: false, right: true }).unwrap();
        assert_eq!(w.player().x, 400.0);
        // Left wins when both are held
        w.tick(HeldKeys { left: true, right: true }).unwrap();
        assert_eq!(w.player().x, 395.0);
        w.tick(idle()).unwrap();
        assert_eq!(w.player().vx, 0.0);
        assert_eq!(w.player().x, 395.0);
    }

    #[test]
    fn test_coin_overlap_scores_once() {
        let mut w = world();
        // Put the player on top of the first coin (350, 350)
        w.player_mut().x = 345.0;
        w.player_mut().y = 340.0;
        w.tick(idle()).unwrap();

        assert_eq!(w.player().score(), 10);
        assert_eq!(w.coins().len(), 2);
        let events: Vec<_> = w.events.drain().collect();
        assert_eq!(events.len(), 1);
        assert_eq!((events[0].x, events[0].y), (350.0, 350.0));
        assert_eq!(events[0].value, 10);

        // Still overlapping the now-empty spot: nothing more
        w.player_mut().y = 340.0;
        w.player_mut().vy = 0.0;
        w.tick(idle()).unwrap();
        assert_eq!(w.player().score(), 10);
        assert!(w.events.is_empty());
    }

    #[test]
    fn test_two_coins_in_one_tick() {
        let mut w = world();
        let extra = w.coins.spawn(Coin::new(360.0, 355.0));
        w.player_mut().x = 345.0;
        w.player_mut().y = 340.0;
        w.tick(idle()).unwrap();

        assert_eq!(w.player().score(), 20);
        assert_eq!(w.coins().len(), 2);
        let events: Vec<_> = w.events.drain().collect();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.value == 10));
        assert!(events.iter().any(|e| e.coin == extra));
        assert_ne!(events[0].coin, events[1].coin);
    }

    #[test]
    fn test_score_monotone_over_full_clear() {
        let mut w = world();
        let mut last = 0;
        for (x, y) in COIN_POSITIONS {
            w.player_mut().x = x;
            w.player_mut().y = y;
            w.player_mut().vy = 0.0;
            w.tick(idle()).unwrap();
            assert!(w.player().score() >= last);
            last = w.player().score();
        }
        assert_eq!(w.player().score(), 30);
        assert!(w.coins().is_empty());
    }

    #[test]
    fn test_custom_coin_value() {
        let settings = Settings { coin_value: 25, ..Settings::default() };
        let mut w = World::new(&settings);
        w.player_mut().x = 345.0;
        w.player_mut().y = 340.0;
        w.tick(idle()).unwrap();
        assert_eq!(w.player().score(), 25);
    }

    #[test]
    fn test_draw_order() {
        let w = world();
        let mut surface = RecordingSurface::new();
        w.draw(&mut surface, &SkinImages::default());

        let cmds = &surface.commands;
        assert_eq!(cmds[0], DrawCommand::Clear(SKY_COLOR));
        assert!(matches!(&cmds[1..5], [DrawCommand::Rect(..), DrawCommand::Rect(..), DrawCommand::Rect(..), DrawCommand::Rect(..)]));
        for cmd in &cmds[5..8] {
            assert!(matches!(cmd, DrawCommand::Circle { color, radius, .. } if *color == COIN_COLOR && *radius == 10.0));
        }
        assert!(matches!(cmds[8], DrawCommand::Rect(_, color) if color == PLAYER_COLOR));
        assert_eq!(
            cmds[9],
            DrawCommand::Text { text: "Score: 0".into(), x: 10.0, y: 10.0, size: 36.0, color: WHITE, centered: false }
        );
        assert_eq!(cmds.len(), 10);
    }
}
