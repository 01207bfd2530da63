//! The single built-in level

use crate::settings::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// (x, y, width, height), ground first
pub const PLATFORM_LIST: [(f32, f32, u32, u32); 4] = [
    (0.0, SCREEN_HEIGHT - 40.0, SCREEN_WIDTH as u32, 40),
    (300.0, 400.0, 200, 20),
    (100.0, 300.0, 200, 20),
    (500.0, 200.0, 200, 20),
];

/// Top-left corner of each coin
pub const COIN_POSITIONS: [(f32, f32); 3] = [(350.0, 350.0), (150.0, 250.0), (550.0, 150.0)];

pub const PLAYER_SPAWN: (f32, f32) = (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 100.0);
