//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Velocities in pixels per fixed tick
//! - Injected RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{resolve, resolve_bricks, resolve_paddle, resolve_walls};
pub use geometry::{Penetration, Rect, circle_intersects_rect, overlaps, penetration_depths};
pub use snapshot::Snapshot;
pub use state::{Arena, Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, advance_level, tick};
