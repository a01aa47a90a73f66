//! Data-driven game balance
//!
//! Every gameplay constant lives here so a session can be built from a JSON
//! file. Missing fields fall back to the values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SetupError, SetupResult};

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Brick grid ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_gap: f32,
    pub brick_height_fraction: f32,
    pub brick_min_height: f32,
    pub brick_top_fraction: f32,

    // === Paddle ===
    pub paddle_width_fraction: f32,
    pub paddle_min_width: f32,
    pub paddle_height_fraction: f32,
    pub paddle_min_height: f32,
    /// Paddle top = arena height - paddle height * lift
    pub paddle_lift: f32,
    pub paddle_deflection: f32,
    pub min_speed_x: f32,

    // === Ball (pixels per tick) ===
    pub ball_radius: f32,
    pub ball_base_speed_x: f32,
    pub ball_base_speed_y: f32,
    pub ball_spawn_lift: f32,

    // === Progression ===
    pub level_speedup: f32,
    pub brick_score: u64,
    pub initial_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_gap: BRICK_GAP,
            brick_height_fraction: BRICK_HEIGHT_FRACTION,
            brick_min_height: BRICK_MIN_HEIGHT,
            brick_top_fraction: BRICK_TOP_FRACTION,

            paddle_width_fraction: PADDLE_WIDTH_FRACTION,
            paddle_min_width: PADDLE_MIN_WIDTH,
            paddle_height_fraction: PADDLE_HEIGHT_FRACTION,
            paddle_min_height: PADDLE_MIN_HEIGHT,
            paddle_lift: PADDLE_LIFT,
            paddle_deflection: PADDLE_DEFLECTION,
            min_speed_x: MIN_SPEED_X,

            ball_radius: BALL_RADIUS,
            ball_base_speed_x: BALL_BASE_SPEED_X,
            ball_base_speed_y: BALL_BASE_SPEED_Y,
            ball_spawn_lift: BALL_SPAWN_LIFT,

            level_speedup: LEVEL_SPEEDUP,
            brick_score: BRICK_SCORE,
            initial_lives: INITIAL_LIVES,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document and validate it
    pub fn from_json(json: &str) -> SetupResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> SetupResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would make the simulation degenerate
    pub fn validate(&self) -> SetupResult<()> {
        fn positive(name: &str, value: f32) -> SetupResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SetupError::InvalidTuning(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }

        fn non_negative(name: &str, value: f32) -> SetupResult<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(SetupError::InvalidTuning(format!(
                    "{name} must be non-negative, got {value}"
                )))
            }
        }

        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(SetupError::InvalidTuning(format!(
                "brick grid must have at least one brick, got {}x{}",
                self.brick_rows, self.brick_cols
            )));
        }
        if self.initial_lives == 0 {
            return Err(SetupError::InvalidTuning(
                "initial_lives must be at least 1".to_string(),
            ));
        }
        if self.ball_radius <= 0.0 || !self.ball_radius.is_finite() {
            return Err(SetupError::InvalidBall {
                radius: self.ball_radius,
            });
        }

        non_negative("brick_gap", self.brick_gap)?;
        non_negative("brick_height_fraction", self.brick_height_fraction)?;
        positive("brick_min_height", self.brick_min_height)?;
        non_negative("brick_top_fraction", self.brick_top_fraction)?;
        if self.brick_top_fraction >= 1.0 {
            return Err(SetupError::InvalidTuning(format!(
                "brick_top_fraction must be below 1.0, got {}",
                self.brick_top_fraction
            )));
        }
        non_negative("paddle_width_fraction", self.paddle_width_fraction)?;
        positive("paddle_min_width", self.paddle_min_width)?;
        non_negative("paddle_height_fraction", self.paddle_height_fraction)?;
        positive("paddle_min_height", self.paddle_min_height)?;
        positive("paddle_lift", self.paddle_lift)?;
        non_negative("paddle_deflection", self.paddle_deflection)?;
        positive("min_speed_x", self.min_speed_x)?;
        positive("ball_base_speed_x", self.ball_base_speed_x)?;
        positive("ball_base_speed_y", self.ball_base_speed_y)?;
        non_negative("ball_spawn_lift", self.ball_spawn_lift)?;

        // Speed must never drop across a level-advance
        if !self.level_speedup.is_finite() || self.level_speedup < 1.0 {
            return Err(SetupError::InvalidTuning(format!(
                "level_speedup must be >= 1.0, got {}",
                self.level_speedup
            )));
        }

        Ok(())
    }
}
