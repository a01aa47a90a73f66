//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use rand::Rng;

use super::collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{MAX_STEP_DT, SIM_DT};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired paddle center x (latest pointer/touch position)
    pub paddle_target_x: Option<f32>,
    /// Tap; restarts the session when it is over
    pub restart: bool,
}

/// Advance the game state by one step
///
/// Velocities are pixels per [`SIM_DT`], so a step of exactly `SIM_DT` moves
/// the ball by its velocity. Other `dt` values scale the move linearly;
/// non-finite or negative `dt` moves nothing and oversized `dt` is capped.
pub fn tick<R: Rng>(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut R,
) -> Vec<GameEvent> {
    if state.phase == GamePhase::GameOver {
        // Frozen world; a tap starts over
        if input.restart {
            state.restart(rng);
        }
        return Vec::new();
    }

    state.time_ticks += 1;

    if let Some(target) = input.paddle_target_x {
        state.paddle.clamp_to_arena(target, &state.arena);
    }

    let dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_STEP_DT)
    } else {
        0.0
    };
    state.ball.pos += state.ball.vel * (dt / SIM_DT);

    let mut events = collision::resolve(
        &mut state.ball,
        &state.paddle,
        &mut state.bricks,
        &state.arena,
        &state.tuning,
    );

    let destroyed = events
        .iter()
        .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
        .count() as u64;
    state.score += destroyed * state.tuning.brick_score;

    // Fell out the bottom
    if state.ball.top() > state.arena.height {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost);
        log::debug!("Life lost, {} remaining", state.lives);

        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver);
            log::info!(
                "Game over at level {} with score {}",
                state.level,
                state.score
            );
            return events;
        }
        state.reset_ball(rng);
    }

    if state.bricks.is_cleared() {
        advance_level(state);
        events.push(GameEvent::LevelAdvanced);
    }

    events
}

/// Rebuild the brick wall and speed the ball up, keeping its direction
///
/// Score and lives carry over.
pub fn advance_level(state: &mut GameState) {
    state.bricks.revive_all();
    state.ball.vel *= state.tuning.level_speedup;
    state.level += 1;
    log::info!(
        "Level {} reached, ball velocity ({:.2}, {:.2})",
        state.level,
        state.ball.vel.x,
        state.ball.vel.y
    );
}
