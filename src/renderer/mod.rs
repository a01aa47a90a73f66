//! Rendering seam
//!
//! The simulation never draws. Each frame the host hands the latest
//! [`Snapshot`] to a [`Renderer`]; `instance` flattens it into GPU-ready
//! instance data for renderers that want it.

pub mod instance;

pub use instance::{CircleInstance, FrameInstances, RectInstance};

use crate::sim::Snapshot;

/// Host-side presentation layer
pub trait Renderer {
    /// Draw one frame. Must not block the simulation thread for long.
    fn draw(&mut self, snapshot: &Snapshot);
}

/// Renderer that logs a one-line summary every `every` frames
#[derive(Debug)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        self.frames += 1;
        if self.frames % self.every != 0 {
            return;
        }
        let instances = FrameInstances::build(snapshot);
        log::info!(
            "tick {:>6} | level {} | score {:>5} | lives {} | bricks {:>2} | ball ({:.0}, {:.0})",
            snapshot.time_ticks,
            snapshot.level,
            snapshot.score,
            snapshot.lives,
            instances.bricks.len(),
            snapshot.ball.pos.x,
            snapshot.ball.pos.y
        );
    }
}
