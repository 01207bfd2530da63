//! Input polling
//!
//! Key presses and mouse clicks are replayed from macroquad's raw miniquad
//! event stream, so a frame's events come out in the order they arrived.
//! Held movement keys and the pointer are read from the frame state.

use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{self, EventHandler, KeyMods};
use macroquad::prelude::{is_key_down, is_quit_requested, mouse_position, prevent_quit, KeyCode};

use super::event::{FrameInput, HeldKeys, InputEvent, Key, MouseButton};

fn key_for(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Space => Some(Key::Space),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

fn button_for(button: miniquad::MouseButton) -> Option<MouseButton> {
    match button {
        miniquad::MouseButton::Left => Some(MouseButton::Left),
        miniquad::MouseButton::Right => Some(MouseButton::Right),
        miniquad::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Receives the replayed miniquad events for one frame
#[derive(Debug, Default)]
struct EventCollector {
    events: Vec<InputEvent>,
    /// Raw event coordinates are physical pixels
    dpi_scale: f32,
}

impl EventHandler for EventCollector {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if repeat {
            return;
        }
        if let Some(key) = key_for(keycode) {
            self.events.push(InputEvent::KeyDown(key));
        }
    }

    fn mouse_button_down_event(&mut self, button: miniquad::MouseButton, x: f32, y: f32) {
        if let Some(button) = button_for(button) {
            let scale = if self.dpi_scale > 0.0 { self.dpi_scale } else { 1.0 };
            self.events.push(InputEvent::MouseDown { button, x: x / scale, y: y / scale });
        }
    }
}

pub struct InputState {
    subscriber: usize,
}

impl InputState {
    /// Takes over the window close button so it arrives as [`InputEvent::Quit`]
    /// instead of ending the process.
    pub fn new() -> Self {
        prevent_quit();
        Self { subscriber: register_input_subscriber() }
    }

    /// Call once per frame before update
    pub fn poll(&mut self) -> FrameInput {
        let mut collector = EventCollector { events: Vec::new(), dpi_scale: miniquad::window::dpi_scale() };
        repeat_all_miniquad_input(&mut collector, self.subscriber);

        let mut events = collector.events;
        // Close requests are not part of the replayed stream; every scene
        // exits on them, so placing it last loses nothing
        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }

        FrameInput {
            events,
            held: HeldKeys {
                left: is_key_down(KeyCode::Left),
                right: is_key_down(KeyCode::Right),
            },
            mouse: mouse_position(),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
