//! Main menu and pause menu
//!
//! Both menus follow the same contract: `update` once per frame with the
//! pointer position, `handle_event` for each input event (returns the
//! chosen action, if any), `draw` when active.

use rand::Rng;

use crate::game::Rect;
use crate::input::{InputEvent, MouseButton};
use crate::render::Surface;
use crate::settings::{GAME_TITLE, SCREEN_HEIGHT, SCREEN_WIDTH};
use super::button::Button;
use super::particles::Particles;
use super::theme::*;

/// What a menu button asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Quit,
    Resume,
    Menu,
}

/// A menu row; `None` draws and animates but never fires
type Entry = (Button, Option<MenuAction>);

/// Buttons stacked down the middle of the screen, first at `BUTTON_TOP`
fn button_column(entries: &[(&str, Option<MenuAction>)]) -> Vec<Entry> {
    let x = SCREEN_WIDTH / 2.0 - BUTTON_WIDTH / 2.0;
    entries
        .iter()
        .enumerate()
        .map(|(i, (label, action))| {
            let y = BUTTON_TOP + i as f32 * BUTTON_SPACING;
            (Button::new(Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT), *label), *action)
        })
        .collect()
}

/// Left clicks hit-test against the click position
fn clicked(buttons: &[Entry], event: &InputEvent) -> Option<MenuAction> {
    match *event {
        InputEvent::MouseDown { button: MouseButton::Left, x, y } => buttons
            .iter()
            .find(|(button, _)| button.hit(x, y))
            .and_then(|(_, action)| *action),
        _ => None,
    }
}

fn draw_buttons(buttons: &[Entry], surface: &mut dyn Surface) {
    for (button, _) in buttons {
        button.draw(surface);
    }
}

pub struct MainMenu {
    buttons: Vec<Entry>,
    particles: Particles,
}

impl MainMenu {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            buttons: button_column(&[
                ("Start Game", Some(MenuAction::Start)),
                ("Options", None),
                ("Quit", Some(MenuAction::Quit)),
            ]),
            particles: Particles::scatter(PARTICLE_COUNT, SCREEN_WIDTH, SCREEN_HEIGHT, rng),
        }
    }

    pub fn handle_event(&self, event: &InputEvent) -> Option<MenuAction> {
        clicked(&self.buttons, event)
    }

    pub fn update(&mut self, mouse: (f32, f32)) {
        for (button, _) in &mut self.buttons {
            button.update(mouse);
        }
        self.particles.update();
    }

    #[cfg(test)]
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter().map(|(button, _)| button)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(MENU_BG);
        self.particles.draw(surface);

        let cx = SCREEN_WIDTH / 2.0;
        surface.draw_text_centered(
            GAME_TITLE,
            cx + TITLE_SHADOW_OFFSET,
            TITLE_Y + TITLE_SHADOW_OFFSET,
            FONT_SIZE_TITLE,
            TITLE_SHADOW,
        );
        surface.draw_text_centered(GAME_TITLE, cx, TITLE_Y, FONT_SIZE_TITLE, TEXT_COLOR);

        draw_buttons(&self.buttons, surface);
    }
}

/// Overlay drawn on top of the frozen game scene
pub struct PauseMenu {
    buttons: Vec<Entry>,
}

impl PauseMenu {
    pub fn new() -> Self {
        Self {
            buttons: button_column(&[("Resume", Some(MenuAction::Resume)), ("Main Menu", Some(MenuAction::Menu))]),
        }
    }

    pub fn handle_event(&self, event: &InputEvent) -> Option<MenuAction> {
        clicked(&self.buttons, event)
    }

    pub fn update(&mut self, mouse: (f32, f32)) {
        for (button, _) in &mut self.buttons {
            button.update(mouse);
        }
    }

    #[cfg(test)]
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter().map(|(button, _)| button)
    }

    /// Expects the game scene to already be on the surface
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT), PAUSE_OVERLAY);
        surface.draw_text_centered("Paused", SCREEN_WIDTH / 2.0, TITLE_Y, FONT_SIZE_TITLE, TEXT_COLOR);
        draw_buttons(&self.buttons, surface);
    }
}

impl Default for PauseMenu {
    fn default() -> Self {
        Self::new()
    }
}
