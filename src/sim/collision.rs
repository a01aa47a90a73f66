//! Collision detection and response
//!
//! Runs once per tick after the ball has moved. Each resolver borrows the
//! entities it needs for the duration of the call and reports what happened
//! as [`GameEvent`]s; score, lives and level bookkeeping stay with the tick.
//!
//! Order is wall, then paddle, then bricks. Wall and paddle hits can both land
//! in the same tick; at most one brick is destroyed per tick.

use glam::Vec2;

use super::geometry::{circle_intersects_rect, penetration_depths};
use super::state::{Arena, Ball, BrickGrid, GameEvent, Paddle};
use crate::tuning::Tuning;

/// Bounce the ball off the left, right and top walls
///
/// The bottom edge is open: falling out is a life loss, not a collision.
pub fn resolve_walls(ball: &mut Ball, arena: &Arena, events: &mut Vec<GameEvent>) {
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallHit);
    } else if ball.pos.x + ball.radius > arena.width {
        ball.pos.x = arena.width - ball.radius;
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallHit);
    }

    if ball.top() < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallHit);
    }
}

/// Rebound the ball off the paddle
///
/// Hits when the lowest point of the ball lies inside the paddle rectangle.
/// The ball is lifted to rest on the paddle top, `vy` is forced upward
/// (`-|vy|`, so a repeat hit never sends it back down) and `vx` picks up
/// deflection proportional to how far from center the ball struck.
pub fn resolve_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> bool {
    let contact = Vec2::new(ball.pos.x, ball.bottom());
    if !paddle.rect.contains(contact) {
        return false;
    }

    ball.pos.y = paddle.rect.top - ball.radius;

    let offset = paddle.hit_offset(ball.pos.x);
    let prior_vx = ball.vel.x;
    ball.vel.x += offset * tuning.paddle_deflection;
    if ball.vel.x.abs() < tuning.min_speed_x {
        // Keep some horizontal motion, toward the side of the paddle that was hit
        let sign = if offset != 0.0 {
            offset.signum()
        } else if prior_vx != 0.0 {
            prior_vx.signum()
        } else {
            1.0
        };
        ball.vel.x = sign * tuning.min_speed_x;
    }
    ball.vel.y = -ball.vel.y.abs();

    log::trace!("Paddle hit at offset {:.2}, vx now {:.2}", offset, ball.vel.x);
    events.push(GameEvent::PaddleHit);
    true
}

/// Destroy the first live brick (row-major) the ball overlaps
///
/// The bounce axis comes from the shallowest of the four edge overlaps;
/// ties favour a horizontal bounce. Returns the destroyed brick's index.
pub fn resolve_bricks(
    ball: &mut Ball,
    bricks: &mut BrickGrid,
    events: &mut Vec<GameEvent>,
) -> Option<usize> {
    let (index, brick) = bricks
        .bricks
        .iter_mut()
        .enumerate()
        .find(|(_, b)| b.alive && circle_intersects_rect(ball.pos, ball.radius, &b.rect))?;

    let depths = penetration_depths(ball.pos, ball.radius, &brick.rect);
    if depths.is_horizontal() {
        ball.vel.x = -ball.vel.x;
    } else {
        ball.vel.y = -ball.vel.y;
    }
    brick.alive = false;

    log::trace!("Brick {} destroyed", index);
    events.push(GameEvent::BrickDestroyed { index });
    Some(index)
}

/// Run every resolver in order, returning the events they produced
pub fn resolve(
    ball: &mut Ball,
    paddle: &Paddle,
    bricks: &mut BrickGrid,
    arena: &Arena,
    tuning: &Tuning,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    resolve_walls(ball, arena, &mut events);
    resolve_paddle(ball, paddle, tuning, &mut events);
    resolve_bricks(ball, bricks, &mut events);
    events
}
