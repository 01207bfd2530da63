//! Input
//!
//! Keyboard: arrows move, Space jumps, Escape pauses.
//! Mouse: left click on menu buttons.

mod event;
mod state;

pub use event::{FrameInput, HeldKeys, InputEvent, Key, MouseButton};
pub use state::InputState;
