//! Per-frame input snapshot
//!
//! The poller turns macroquad's global input state into these plain values
//! once per frame, so the app and menus can be driven from tests without a
//! window.

/// Keys the game reacts to on key-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window's close button was clicked
    Quit,
    KeyDown(Key),
    MouseDown { button: MouseButton, x: f32, y: f32 },
}

/// Movement keys currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Everything that happened since the previous frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Discrete events, in the order they are handled
    pub events: Vec<InputEvent>,
    pub held: HeldKeys,
    /// Pointer position in window coordinates
    pub mouse: (f32, f32),
}

#[cfg(test)]
impl FrameInput {
    /// A frame with nothing pressed and the pointer parked at the origin
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_held(mut self, held: HeldKeys) -> Self {
        self.held = held;
        self
    }

    pub fn with_mouse(mut self, x: f32, y: f32) -> Self {
        self.mouse = (x, y);
        self
    }

    /// Left click at (x, y), pointer also moved there
    pub fn click(x: f32, y: f32) -> Self {
        Self::idle()
            .with_mouse(x, y)
            .with_event(InputEvent::MouseDown { button: MouseButton::Left, x, y })
    }

    pub fn key(key: Key) -> Self {
        Self::idle().with_event(InputEvent::KeyDown(key))
    }
}
