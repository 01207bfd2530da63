//! Application state and scene switching
//!
//! Three scenes, exactly one active. Only the active scene sees input, gets
//! updated and draws. The play session lives across scene switches: pausing
//! or going back to the menu never resets it.

use rand::Rng;

use crate::asset::AssetCache;
use crate::error::GameError;
use crate::game::{CoinCollected, SkinImages, World};
use crate::input::{FrameInput, InputEvent, Key};
use crate::render::Surface;
use crate::settings::Settings;
use crate::ui::{MainMenu, MenuAction, PauseMenu};

/// The available scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneState {
    Menu = 0,
    Playing = 1,
    Paused = 2,
}

impl SceneState {
    pub fn label(&self) -> &'static str {
        match self {
            SceneState::Menu => "Menu",
            SceneState::Playing => "Playing",
            SceneState::Paused => "Paused",
        }
    }

    /// Where `trigger` takes this scene
    pub fn next(self, trigger: Trigger) -> Transition {
        use SceneState::*;
        match (self, trigger) {
            (_, Trigger::WindowClose) => Transition::Exit,
            (Menu, Trigger::Menu(MenuAction::Start)) => Transition::Goto(Playing),
            (Menu, Trigger::Menu(MenuAction::Quit)) => Transition::Exit,
            (Playing, Trigger::Escape) => Transition::Goto(Paused),
            (Paused, Trigger::Escape) => Transition::Goto(Playing),
            (Paused, Trigger::Menu(MenuAction::Resume)) => Transition::Goto(Playing),
            (Paused, Trigger::Menu(MenuAction::Menu)) => Transition::Goto(Menu),
            _ => Transition::Stay,
        }
    }
}

/// Inputs that can switch scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Escape,
    Menu(MenuAction),
    WindowClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Goto(SceneState),
    Exit,
}

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App {
    state: SceneState,
    world: World,
    main_menu: MainMenu,
    pause_menu: PauseMenu,
    skin: SkinImages,
}

impl App {
    pub fn new(settings: &Settings, assets: &mut AssetCache, rng: &mut impl Rng) -> Result<Self, GameError> {
        settings.validate()?;
        Ok(Self {
            state: SceneState::Menu,
            world: World::new(settings),
            main_menu: MainMenu::new(rng),
            pause_menu: PauseMenu::new(),
            skin: SkinImages::load(&settings.skin, assets),
        })
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Handle this frame's input, then update the active scene.
    pub fn frame(&mut self, input: &FrameInput) -> Result<Flow, GameError> {
        for event in &input.events {
            let Some(trigger) = self.dispatch(event) else {
                continue;
            };
            match self.state.next(trigger) {
                Transition::Stay => {}
                Transition::Goto(next) => {
                    tracing::info!("scene {} -> {}", self.state.label(), next.label());
                    self.state = next;
                }
                Transition::Exit => {
                    tracing::info!("exit requested from {}", self.state.label());
                    return Ok(Flow::Exit);
                }
            }
        }

        match self.state {
            SceneState::Menu => self.main_menu.update(input.mouse),
            SceneState::Playing => self.world.tick(input.held)?,
            SceneState::Paused => self.pause_menu.update(input.mouse),
        }
        Ok(Flow::Continue)
    }

    /// Route one event to the active scene. Returns a trigger if it may
    /// switch scenes.
    fn dispatch(&mut self, event: &InputEvent) -> Option<Trigger> {
        match (self.state, event) {
            (_, InputEvent::Quit) => Some(Trigger::WindowClose),
            (SceneState::Playing | SceneState::Paused, InputEvent::KeyDown(Key::Escape)) => Some(Trigger::Escape),
            (SceneState::Playing, InputEvent::KeyDown(Key::Space)) => {
                self.world.player_mut().jump();
                None
            }
            (SceneState::Menu, _) => self.main_menu.handle_event(event).map(Trigger::Menu),
            (SceneState::Paused, _) => self.pause_menu.handle_event(event).map(Trigger::Menu),
            _ => None,
        }
    }

    /// Coin pickups since the last call
    pub fn drain_events(&mut self) -> impl Iterator<Item = CoinCollected> + '_ {
        self.world.events.drain()
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        match self.state {
            SceneState::Menu => self.main_menu.draw(surface),
            SceneState::Playing => self.world.draw(surface, &self.skin),
            SceneState::Paused => {
                self.world.draw(surface, &self.skin);
                self.pause_menu.draw(surface);
            }
        }
    }
}
