//! Game Module
//!
//! The simulation side of the platformer:
//! - Entity: generational handles for everything placed in the world
//! - SpriteGroup: sparse storage of one sprite kind, keyed by entity
//! - Sprite: shared update / bounding box / draw capability
//! - World: one play session (player, platforms, coins, score)
//! - Event: decoupled notifications (coin pickups) drained by the frame driver
//!
//! Nothing in here touches the window directly; drawing goes through
//! [`crate::render::Surface`] and input arrives as plain structs.

pub mod coin;
pub mod collision;
pub mod entity;
pub mod event;
pub mod group;
pub mod level;
pub mod platform;
pub mod player;
pub mod rect;
pub mod sprite;
pub mod world;

pub use event::CoinCollected;
pub use rect::Rect;
pub use sprite::SkinImages;
pub use world::World;
