//! Session handle
//!
//! Owns one [`GameState`] plus the random source used for ball launches.
//! Independent sessions never share anything, so several can run side by side.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::SetupResult;
use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};
use crate::tuning::Tuning;

/// A running game
#[derive(Debug, Clone)]
pub struct Session<R = Pcg32> {
    state: GameState,
    rng: R,
}

impl Session<Pcg32> {
    /// Start a session on an arena with default tuning and a random seed
    pub fn new(width: f32, height: f32) -> SetupResult<Self> {
        Self::with_tuning(width, height, Tuning::default())
    }

    pub fn with_tuning(width: f32, height: f32, tuning: Tuning) -> SetupResult<Self> {
        let rng = Pcg32::from_rng(&mut rand::rng());
        Self::with_rng(width, height, tuning, rng)
    }

    /// Start a reproducible session
    pub fn with_seed(width: f32, height: f32, tuning: Tuning, seed: u64) -> SetupResult<Self> {
        Self::with_rng(width, height, tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Start a session drawing launch directions from `rng`
    pub fn with_rng(width: f32, height: f32, tuning: Tuning, mut rng: R) -> SetupResult<Self> {
        let state = GameState::new(width, height, tuning, &mut rng)?;
        log::info!(
            "Session started on {}x{} arena ({} bricks, {} lives)",
            width,
            height,
            state.bricks.bricks.len(),
            state.lives
        );
        Ok(Self { state, rng })
    }

    /// Advance one step toward `paddle_target_x`
    ///
    /// Out-of-range targets are clamped; the call never fails.
    pub fn step(&mut self, dt: f32, paddle_target_x: f32) -> (Snapshot, Vec<GameEvent>) {
        let input = TickInput {
            paddle_target_x: Some(paddle_target_x),
            ..Default::default()
        };
        self.step_with(dt, &input)
    }

    /// Advance one step with full tick input
    pub fn step_with(&mut self, dt: f32, input: &TickInput) -> (Snapshot, Vec<GameEvent>) {
        let events = tick(&mut self.state, input, dt, &mut self.rng);
        (Snapshot::capture(&self.state), events)
    }

    /// Start over from score 0 with full lives, in any phase
    pub fn restart(&mut self) {
        self.state.restart(&mut self.rng);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
