//! Game state and core simulation types
//!
//! `GameState` is the single aggregate the tick function mutates. Nothing
//! outside `sim` writes to it directly; hosts go through [`crate::Session`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::error::{SetupError, SetupResult};
use crate::tuning::Tuning;

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives; world is frozen until restart
    GameOver,
}

/// Events emitted by a tick, consumed by audio and presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left, right or top wall
    WallHit,
    PaddleHit,
    /// Brick at this row-major grid index was destroyed
    BrickDestroyed { index: usize },
    /// Ball left through the bottom edge
    LifeLost,
    /// Every brick was cleared and the grid was rebuilt
    LevelAdvanced,
    GameOver,
}

/// The fixed play field. Set once at session start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> SetupResult<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SetupError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Size and place the paddle for an arena, horizontally centered
    pub fn for_arena(arena: &Arena, tuning: &Tuning) -> SetupResult<Self> {
        let width = (arena.width * tuning.paddle_width_fraction)
            .max(tuning.paddle_min_width)
            .min(arena.width);
        let height = (arena.height * tuning.paddle_height_fraction).max(tuning.paddle_min_height);
        let top = arena.height - height * tuning.paddle_lift;

        if width <= 0.0 || height <= 0.0 || top < 0.0 {
            return Err(SetupError::InvalidPaddle { width, height });
        }

        let left = (arena.width - width) / 2.0;
        Ok(Self {
            rect: Rect::new(left, top, left + width, top + height),
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    /// Move the paddle to a desired center x, keeping it inside `[0, arena.width]`
    ///
    /// Non-finite targets are ignored.
    pub fn clamp_to_arena(&mut self, center_x: f32, arena: &Arena) {
        if !center_x.is_finite() {
            return;
        }
        let width = self.width();
        let left = (center_x - width / 2.0).clamp(0.0, arena.width - width);
        self.rect.left = left;
        self.rect.right = left + width;
    }

    /// Normalized offset of a point from the paddle center, in [-1, 1]
    pub fn hit_offset(&self, x: f32) -> f32 {
        let hit_pos = (x - self.rect.left) / self.width();
        ((hit_pos - 0.5) * 2.0).clamp(-1.0, 1.0)
    }
}

/// The ball. Velocity is in pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Park the ball above the paddle at arena center and relaunch it upward
    ///
    /// The horizontal direction is a coin flip from `rng`.
    pub fn reset<R: Rng>(
        &mut self,
        paddle: &Paddle,
        arena: &Arena,
        tuning: &Tuning,
        rng: &mut R,
    ) {
        self.pos = Vec2::new(
            arena.center_x(),
            paddle.rect.top - self.radius - tuning.ball_spawn_lift,
        );
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sign * tuning.ball_base_speed_x, -tuning.ball_base_speed_y);
    }

    /// Top edge of the ball
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    /// Bottom edge of the ball
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A single brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub alive: bool,
}

/// Row-major grid of equal-size bricks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    pub rows: usize,
    pub cols: usize,
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out `rows x cols` bricks separated by `gap`, all alive
    ///
    /// Deterministic for a given arena and tuning.
    pub fn build(arena: &Arena, tuning: &Tuning) -> SetupResult<Self> {
        let rows = tuning.brick_rows;
        let cols = tuning.brick_cols;
        let gap = tuning.brick_gap;

        let total_gap_x = (cols + 1) as f32 * gap;
        let brick_width = (arena.width - total_gap_x) / cols as f32;
        let brick_height =
            (arena.height * tuning.brick_height_fraction).max(tuning.brick_min_height);
        if brick_width <= 0.0 || brick_height <= 0.0 {
            return Err(SetupError::DegenerateBrickGrid {
                brick_width,
                brick_height,
            });
        }

        let start_y = arena.height * tuning.brick_top_fraction;
        let mut bricks = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let left = gap + c as f32 * (brick_width + gap);
                let top = start_y + r as f32 * (brick_height + gap);
                bricks.push(Brick {
                    rect: Rect::new(left, top, left + brick_width, top + brick_height),
                    alive: true,
                });
            }
        }

        Ok(Self { rows, cols, bricks })
    }

    /// Bring every brick back to life
    pub fn revive_all(&mut self) {
        for brick in &mut self.bricks {
            brick.alive = true;
        }
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// True once no brick is left standing
    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.alive)
    }

    /// Lowest edge of the grid
    pub fn bottom(&self) -> f32 {
        self.bricks
            .iter()
            .map(|b| b.rect.bottom)
            .fold(f32::NEG_INFINITY, f32::max)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub tuning: Tuning,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub score: u64,
    pub lives: u8,
    /// Current level (1-based), bumped on every level-advance
    pub level: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh session for an arena
    pub fn new<R: Rng>(
        width: f32,
        height: f32,
        tuning: Tuning,
        rng: &mut R,
    ) -> SetupResult<Self> {
        tuning.validate()?;
        let arena = Arena::new(width, height)?;
        if 2.0 * tuning.ball_radius >= arena.width {
            return Err(SetupError::BallTooWide {
                radius: tuning.ball_radius,
                arena_width: arena.width,
            });
        }
        let paddle = Paddle::for_arena(&arena, &tuning)?;
        let bricks = BrickGrid::build(&arena, &tuning)?;

        // The ball must launch clear of every brick
        let spawn_top = paddle.rect.top - 2.0 * tuning.ball_radius - tuning.ball_spawn_lift;
        let grid_bottom = bricks.bottom();
        if grid_bottom >= spawn_top {
            return Err(SetupError::BricksOverlapSpawn {
                grid_bottom,
                spawn_top,
            });
        }

        let mut state = Self {
            arena,
            paddle,
            ball: Ball::new(tuning.ball_radius),
            bricks,
            score: 0,
            lives: tuning.initial_lives,
            level: 1,
            phase: GamePhase::Playing,
            time_ticks: 0,
            tuning,
        };
        state.reset_ball(rng);

        Ok(state)
    }

    /// Re-center the paddle and relaunch the ball above it
    pub fn reset_ball<R: Rng>(&mut self, rng: &mut R) {
        self.paddle.clamp_to_arena(self.arena.center_x(), &self.arena);
        self.ball.reset(&self.paddle, &self.arena, &self.tuning, rng);
        log::debug!(
            "Ball reset at ({:.1}, {:.1}) with velocity ({:.1}, {:.1})",
            self.ball.pos.x,
            self.ball.pos.y,
            self.ball.vel.x,
            self.ball.vel.y
        );
    }

    /// Reset score, lives, level and bricks and relaunch the ball
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.score = 0;
        self.lives = self.tuning.initial_lives;
        self.level = 1;
        self.phase = GamePhase::Playing;
        self.bricks.revive_all();
        self.reset_ball(rng);
        log::info!("Session restarted");
    }
}
