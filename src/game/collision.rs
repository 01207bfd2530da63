//! Collision System
//!
//! Axis-separated box resolution against static platforms. The player
//! moves horizontally first and is pushed out of anything it entered, then
//! gravity is applied and the same is done vertically. Because each pass
//! only moves along one axis the push-out direction is never ambiguous.

use crate::settings::PhysicsSettings;
use super::platform::Platform;
use super::player::Player;

/// Result of a collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionResult {
    /// Landed on a platform this tick
    pub grounded: bool,
    /// Pushed back horizontally
    pub hit_wall: bool,
    /// Bumped a platform from below
    pub hit_ceiling: bool,
}

/// Move the player one tick and resolve overlaps.
///
/// Platforms are visited in order; if several overlap on the same axis the
/// last one wins.
pub fn move_and_collide(player: &mut Player, platforms: &[Platform], physics: &PhysicsSettings) -> CollisionResult {
    let mut result = CollisionResult::default();

    // Horizontal
    player.x += player.vx;
    let mut rect = player.rect();
    for platform in platforms {
        let solid = platform.rect();
        if !rect.overlaps(&solid) {
            continue;
        }
        if player.vx > 0.0 {
            rect.set_right(solid.left());
            result.hit_wall = true;
        } else if player.vx < 0.0 {
            rect.x = solid.right();
            result.hit_wall = true;
        }
    }
    player.set_rect(rect);

    // Vertical: gravity always accumulates, a landing zeroes it again
    player.vy += physics.gravity;
    player.y += player.vy;
    player.on_ground = false;
    let mut rect = player.rect();
    for platform in platforms {
        let solid = platform.rect();
        if !rect.overlaps(&solid) {
            continue;
        }
        if player.vy > 0.0 {
            rect.set_bottom(solid.top());
            player.on_ground = true;
            player.vy = 0.0;
            result.grounded = true;
        } else if player.vy < 0.0 {
            rect.y = solid.bottom();
            player.vy = 0.0;
            result.hit_ceiling = true;
        }
    }
    player.set_rect(rect);

    result
}
