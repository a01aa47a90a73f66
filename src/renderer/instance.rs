//! Instance types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Snapshot;
use crate::sim::geometry::Rect;

/// Axis-aligned rectangle instance (paddle, bricks)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    /// left, top, right, bottom
    pub bounds: [f32; 4],
    pub color: [f32; 4],
    /// Corner radius in pixels
    pub corner_radius: f32,
    pub _pad: [f32; 3],
}

impl RectInstance {
    pub fn new(rect: &Rect, color: [f32; 4], corner_radius: f32) -> Self {
        Self {
            bounds: [rect.left, rect.top, rect.right, rect.bottom],
            color,
            corner_radius,
            _pad: [0.0; 3],
        }
    }
}

/// Filled circle instance (ball)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

/// Colors for game elements
pub mod colors {
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const PADDLE_CORNER_RADIUS: f32 = 12.0;
    pub const BRICK_SATURATION: f32 = 0.9;
    pub const BRICK_VALUE: f32 = 0.9;
}

/// Brick color by grid index: hue steps 20° per brick
pub fn brick_color(index: usize) -> [f32; 4] {
    let hue = ((index * 20) % 360) as f32;
    let (r, g, b) = hsv_to_rgb(hue, colors::BRICK_SATURATION, colors::BRICK_VALUE);
    [r, g, b, 1.0]
}

/// HSV (hue in degrees) to RGB, all channels in [0, 1]
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (f32, f32, f32) {
    let c = value * saturation;
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = value - c;
    (r + m, g + m, b + m)
}

/// Everything one frame draws, ready to upload
#[derive(Debug, Clone, Default)]
pub struct FrameInstances {
    /// Live bricks only
    pub bricks: Vec<RectInstance>,
    pub paddle: Option<RectInstance>,
    pub ball: Option<CircleInstance>,
}

impl FrameInstances {
    /// Flatten a snapshot. A finished game draws nothing but the HUD.
    pub fn build(snapshot: &Snapshot) -> Self {
        if snapshot.is_game_over() {
            return Self::default();
        }

        let bricks = snapshot
            .live_bricks()
            .map(|(i, brick)| RectInstance::new(&brick.rect, brick_color(i), 0.0))
            .collect();
        let paddle = RectInstance::new(
            &snapshot.paddle.rect,
            colors::PADDLE,
            colors::PADDLE_CORNER_RADIUS,
        );
        let ball = CircleInstance {
            center: snapshot.ball.pos.to_array(),
            radius: snapshot.ball.radius,
            _pad: 0.0,
            color: colors::BALL,
        };

        Self {
            bricks,
            paddle: Some(paddle),
            ball: Some(ball),
        }
    }

    /// Raw bytes of the brick buffer
    pub fn brick_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.bricks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState};
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn snapshot() -> Snapshot {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut state = GameState::new(800.0, 600.0, Tuning::default(), &mut rng).unwrap();
        state.bricks.bricks[0].alive = false;
        Snapshot::capture(&state)
    }

    #[test]
    fn test_hsv_primaries() {
        let close = |a: (f32, f32, f32), b: (f32, f32, f32)| {
            (a.0 - b.0).abs() < 1e-5 && (a.1 - b.1).abs() < 1e-5 && (a.2 - b.2).abs() < 1e-5
        };
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        assert!(close(hsv_to_rgb(120.0, 1.0, 1.0), (0.0, 1.0, 0.0)));
        assert!(close(hsv_to_rgb(240.0, 1.0, 1.0), (0.0, 0.0, 1.0)));
        assert!(close(hsv_to_rgb(360.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_brick_hue_wraps() {
        // 18 bricks per full turn of the hue wheel
        assert_eq!(brick_color(0), brick_color(18));
        assert_ne!(brick_color(0), brick_color(1));
    }

    #[test]
    fn test_build_skips_dead_bricks() {
        let frame = FrameInstances::build(&snapshot());
        assert_eq!(frame.bricks.len(), 34);
        assert_eq!(frame.bricks[0].color, brick_color(1));
        assert!(frame.paddle.is_some());
        assert_eq!(frame.ball.map(|b| b.radius), Some(18.0));
        assert_eq!(frame.brick_bytes().len(), 34 * std::mem::size_of::<RectInstance>());
    }

    #[test]
    fn test_game_over_draws_nothing() {
        let mut snap = snapshot();
        snap.phase = GamePhase::GameOver;
        let frame = FrameInstances::build(&snap);
        assert!(frame.bricks.is_empty());
        assert!(frame.paddle.is_none());
    }
}
