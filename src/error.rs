//! Setup errors
//!
//! Only session construction can fail. Once a session exists every tick is a
//! total function over its state.

use thiserror::Error;

/// Errors raised while building a session or loading tuning data
#[derive(Error, Debug)]
pub enum SetupError {
    /// Arena dimensions must both be positive and finite
    #[error("invalid arena {width}x{height}: both dimensions must be positive")]
    InvalidArena { width: f32, height: f32 },

    #[error("invalid paddle {width}x{height}: both dimensions must be positive")]
    InvalidPaddle { width: f32, height: f32 },

    #[error("invalid ball radius {radius}")]
    InvalidBall { radius: f32 },

    /// The ball must fit between the side walls
    #[error("ball of radius {radius} does not fit in an arena {arena_width} wide")]
    BallTooWide { radius: f32, arena_width: f32 },

    /// Arena too small to lay out the brick grid with the configured gaps
    #[error("brick grid does not fit: brick size would be {brick_width}x{brick_height}")]
    DegenerateBrickGrid { brick_width: f32, brick_height: f32 },

    /// Brick grid reaches down into the space the ball launches from
    #[error("brick grid bottom {grid_bottom} is not above the ball spawn top {spawn_top}")]
    BricksOverlapSpawn { grid_bottom: f32, spawn_top: f32 },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("failed to parse tuning: {0}")]
    TuningParse(#[from] serde_json::Error),

    #[error("failed to read tuning: {0}")]
    TuningIo(#[from] std::io::Error),
}

/// Result type for session setup
pub type SetupResult<T> = Result<T, SetupError>;
