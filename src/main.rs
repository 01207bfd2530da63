//! Platformer Adventure: run, jump, collect coins
//!
//! A single-screen 2D platformer:
//! - Main menu with drifting background particles
//! - Gravity and box collision against static platforms
//! - Coins worth points, score in the corner
//! - Escape pauses over the frozen scene

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod asset;
mod error;
mod game;
mod input;
mod render;
mod settings;
mod timing;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use app::{App, Flow};
use asset::{AssetCache, AudioDevice, SoundBank};
use input::InputState;
use render::ScreenSurface;
use settings::{Settings, GAME_TITLE, SCREEN_HEIGHT, SCREEN_WIDTH};
use timing::FrameLimiter;

#[derive(Debug, Parser)]
#[command(name = "platformer", version = VERSION, about = "Run, jump, collect coins")]
struct Cli {
    /// RON settings file (defaults to ./platformer.ron when present)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Disable sound even if an output device is available
    #[arg(long)]
    mute: bool,

    /// Directory that image and sound paths are relative to
    #[arg(long, default_value = "assets")]
    asset_root: PathBuf,
}

fn window_conf() -> Conf {
    Conf {
        window_title: GAME_TITLE.to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("platformer=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("{e:#}");
    }
    tracing::info!("shutting down");
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load_or_default(cli.settings.as_deref()).context("loading settings")?;

    let sound_enabled = if cli.mute {
        tracing::info!("sound muted from the command line");
        false
    } else {
        match AudioDevice::probe() {
            Ok(device) => {
                tracing::info!(device = device.name(), "audio output ready");
                true
            }
            Err(e) => {
                tracing::warn!("sound disabled: {e}");
                false
            }
        }
    };

    let mut assets = AssetCache::new(&cli.asset_root, sound_enabled);
    let sounds = SoundBank::load(&mut assets, settings.audio.coin_sound.as_deref()).await;

    let mut app = App::new(&settings, &mut assets, &mut ::rand::thread_rng()).context("starting game")?;
    tracing::info!(
        images = assets.image_count(),
        sounds = assets.sound_count(),
        sound = assets.sound_enabled(),
        "assets ready"
    );
    let mut input = InputState::new();
    let mut surface = ScreenSurface::new();
    let limiter = FrameLimiter::new(settings.target_fps);

    tracing::info!(version = VERSION, fps = settings.target_fps, "=== {GAME_TITLE} ===");

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        let frame = input.poll();
        if app.frame(&frame).context("game update")? == Flow::Exit {
            break;
        }

        for pickup in app.drain_events() {
            tracing::trace!(coin = ?pickup.coin, value = pickup.value, x = pickup.x, y = pickup.y, "pickup cue");
            sounds.play_coin();
        }

        app.draw(&mut surface);

        limiter.wait(frame_start);
        next_frame().await;
    }

    tracing::info!(
        score = app.world().player().score(),
        coins_left = app.world().coins().len(),
        "final score"
    );
    Ok(())
}
