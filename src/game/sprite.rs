//! The capability every drawable game object shares

use crate::asset::{AssetCache, ImageHandle};
use crate::render::Surface;
use crate::settings::{PhysicsSettings, SpriteSkin};
use super::platform::Platform;
use super::rect::Rect;

/// What a sprite may look at during its per-tick update
pub struct TickContext<'a> {
    pub platforms: &'a [Platform],
    pub physics: &'a PhysicsSettings,
}

pub trait Sprite {
    /// Advance one tick
    fn update(&mut self, ctx: &TickContext);

    /// Box used for collision and pickup tests
    fn bounding_box(&self) -> Rect;

    fn draw(&self, surface: &mut dyn Surface, skin: &SkinImages);
}

/// Images resolved from a [`SpriteSkin`]. A missing file still gives an
/// image (the placeholder); an unset path keeps the flat shape.
#[derive(Debug, Clone, Default)]
pub struct SkinImages {
    pub player: Option<ImageHandle>,
    pub platform: Option<ImageHandle>,
    pub coin: Option<ImageHandle>,
}

impl SkinImages {
    pub fn load(skin: &SpriteSkin, assets: &mut AssetCache) -> Self {
        let mut resolve = |path: &Option<std::path::PathBuf>| path.as_ref().map(|p| assets.get_image(p));
        Self {
            player: resolve(&skin.player),
            platform: resolve(&skin.platform),
            coin: resolve(&skin.coin),
        }
    }
}
