//! Read-only view of a session for presentation layers
//!
//! A snapshot is a plain copy: holding one never borrows the live state, and
//! it serializes cleanly for out-of-process renderers.

use serde::{Deserialize, Serialize};

use super::state::{Arena, Ball, Brick, GamePhase, GameState, Paddle};

/// Immutable copy of everything a renderer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena: Arena,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major, including dead bricks so indices match `BrickDestroyed`
    pub bricks: Vec<Brick>,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
    pub time_ticks: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            arena: state.arena,
            paddle: state.paddle,
            ball: state.ball,
            bricks: state.bricks.bricks.clone(),
            score: state.score,
            lives: state.lives,
            level: state.level,
            phase: state.phase,
            time_ticks: state.time_ticks,
        }
    }

    /// Live bricks with their grid index
    pub fn live_bricks(&self) -> impl Iterator<Item = (usize, &Brick)> {
        self.bricks.iter().enumerate().filter(|(_, b)| b.alive)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
