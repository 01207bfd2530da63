//! Errors that can stop the game loop

use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("score overflowed adding {points} to {score}")]
    ScoreOverflow { score: u32, points: u32 },

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
