//! Brick Breaker - a deterministic Breakout simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Session handle wrapping the simulation and its RNG
//! - `runner`: Fixed-timestep host loop with pause/resume
//! - `renderer` / `audio`: Output seams for presentation layers
//! - `platform`: Input hand-off from the host
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod runner;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::{SetupError, SetupResult};
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, velocities are pixels per tick at this rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest dt a single step will integrate
    pub const MAX_STEP_DT: f32 = 0.1;
    /// Longest real frame the runner will try to catch up on
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Brick grid
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 7;
    pub const BRICK_GAP: f32 = 8.0;
    pub const BRICK_HEIGHT_FRACTION: f32 = 0.06;
    pub const BRICK_MIN_HEIGHT: f32 = 36.0;
    /// First brick row starts at this fraction of arena height
    pub const BRICK_TOP_FRACTION: f32 = 0.12;

    /// Paddle defaults (derived from arena size, with minimums)
    pub const PADDLE_WIDTH_FRACTION: f32 = 0.25;
    pub const PADDLE_MIN_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT_FRACTION: f32 = 0.02;
    pub const PADDLE_MIN_HEIGHT: f32 = 24.0;
    /// Paddle top sits this many paddle heights above the arena bottom
    pub const PADDLE_LIFT: f32 = 4.0;
    /// Horizontal speed added at the paddle edge (scaled by hit offset in [-1, 1])
    pub const PADDLE_DEFLECTION: f32 = 6.0;
    /// Smallest |vx| a paddle rebound may leave behind
    pub const MIN_SPEED_X: f32 = 1.0;

    /// Ball defaults (pixels per tick)
    pub const BALL_RADIUS: f32 = 18.0;
    pub const BALL_BASE_SPEED_X: f32 = 8.0;
    pub const BALL_BASE_SPEED_Y: f32 = 8.0;
    /// Gap between ball bottom and paddle top on spawn
    pub const BALL_SPAWN_LIFT: f32 = 10.0;

    /// Velocity multiplier applied on every level-advance
    pub const LEVEL_SPEEDUP: f32 = 1.12;
    pub const BRICK_SCORE: u64 = 10;
    pub const INITIAL_LIVES: u8 = 3;
}
