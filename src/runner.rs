//! Fixed-timestep host loop
//!
//! Converts variable real frame times into whole `SIM_DT` steps, so the
//! simulation advances at the same rate whatever the display does. Elapsed
//! time that does not fill a step carries over to the next frame.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::audio::{AudioMixer, AudioSink};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::platform::PointerSlot;
use crate::renderer::Renderer;
use crate::session::Session;
use crate::sim::{Snapshot, TickInput};

/// Drives a [`Session`] from host frames
#[derive(Debug)]
pub struct FixedStepRunner<R = Pcg32> {
    session: Session<R>,
    pointer: PointerSlot,
    accumulator: f32,
    paused: bool,
    /// Drop the first frame after resume instead of catching up
    skip_next_frame: bool,
    pending_tap: bool,
}

impl<R: Rng> FixedStepRunner<R> {
    pub fn new(session: Session<R>, pointer: PointerSlot) -> Self {
        Self {
            session,
            pointer,
            accumulator: 0.0,
            paused: false,
            skip_next_frame: false,
            pending_tap: false,
        }
    }

    /// Stop ticking. State is left exactly as the last step committed it.
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.accumulator = 0.0;
            log::info!("Paused at tick {}", self.session.state().time_ticks);
        }
    }

    /// Continue ticking from the committed state, without replaying the pause
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.skip_next_frame = true;
            log::info!("Resumed at tick {}", self.session.state().time_ticks);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Queue a tap for the next step (restarts a finished game)
    pub fn tap(&mut self) {
        self.pending_tap = true;
    }

    /// Feed one host frame of `frame_dt` seconds
    ///
    /// Runs as many whole steps as the accumulated time allows (capped at
    /// `MAX_SUBSTEPS`), sends each step's events to `audio`, and draws the
    /// newest snapshot. Returns the number of steps run.
    pub fn advance<A: AudioSink, V: Renderer>(
        &mut self,
        frame_dt: f32,
        audio: &mut AudioMixer<A>,
        renderer: &mut V,
    ) -> u32 {
        if self.paused {
            return 0;
        }
        if self.skip_next_frame {
            self.skip_next_frame = false;
            return 0;
        }

        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        let mut latest: Option<Snapshot> = None;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput {
                paddle_target_x: self.pointer.latest(),
                restart: std::mem::take(&mut self.pending_tap),
            };
            let (snapshot, events) = self.session.step_with(SIM_DT, &input);
            audio.dispatch(&events);
            latest = Some(snapshot);

            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if self.accumulator >= SIM_DT {
            log::warn!(
                "Frame overran {} substeps, dropping {:.1} ms",
                MAX_SUBSTEPS,
                self.accumulator * 1000.0
            );
            self.accumulator = 0.0;
        }

        if let Some(snapshot) = latest {
            renderer.draw(&snapshot);
        }
        substeps
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<R> {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundCue;
    use crate::sim::{GameEvent, GamePhase};
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[derive(Default)]
    struct Cues(Vec<SoundCue>);

    impl AudioSink for Cues {
        fn play(&mut self, cue: SoundCue, _volume: f32) {
            self.0.push(cue);
        }
    }

    #[derive(Default)]
    struct Frames(Vec<Snapshot>);

    impl Renderer for Frames {
        fn draw(&mut self, snapshot: &Snapshot) {
            self.0.push(snapshot.clone());
        }
    }

    fn runner() -> (FixedStepRunner, PointerSlot) {
        let session = Session::with_seed(800.0, 600.0, Tuning::default(), 17).unwrap();
        let pointer = PointerSlot::new();
        (FixedStepRunner::new(session, pointer.clone()), pointer)
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let (mut runner, _) = runner();
        let mut audio = AudioMixer::new(Cues::default());
        let mut frames = Frames::default();

        assert_eq!(runner.advance(SIM_DT * 0.6, &mut audio, &mut frames), 0);
        assert!(frames.0.is_empty());
        assert_eq!(runner.advance(SIM_DT * 0.6, &mut audio, &mut frames), 1);
        assert_eq!(frames.0.len(), 1);
        assert_eq!(runner.advance(0.06, &mut audio, &mut frames), 3);
        assert_eq!(runner.session().state().time_ticks, 4);
    }

    #[test]
    fn test_substep_cap_drops_backlog() {
        let (mut runner, _) = runner();
        let mut audio = AudioMixer::new(Cues::default());
        let mut frames = Frames::default();

        assert_eq!(runner.advance(10.0, &mut audio, &mut frames), MAX_SUBSTEPS);
        // Backlog was dropped rather than replayed
        assert_eq!(runner.advance(0.0, &mut audio, &mut frames), 0);
        // Only the newest snapshot of a frame is drawn
        assert_eq!(frames.0.len(), 1);
    }

    #[test]
    fn test_reads_latest_pointer() {
        let (mut runner, pointer) = runner();
        let mut audio = AudioMixer::new(Cues::default());
        let mut frames = Frames::default();

        pointer.publish(10.0);
        pointer.publish(700.0);
        runner.advance(SIM_DT, &mut audio, &mut frames);
        assert_eq!(frames.0[0].paddle.rect.right, 800.0);
    }

    #[test]
    fn test_pause_and_resume() {
        let (mut runner, _) = runner();
        let mut audio = AudioMixer::new(Cues::default());
        let mut frames = Frames::default();

        runner.advance(SIM_DT, &mut audio, &mut frames);
        runner.pause();
        assert!(runner.is_paused());
        assert_eq!(runner.advance(0.1, &mut audio, &mut frames), 0);
        assert_eq!(runner.session().state().time_ticks, 1);

        runner.resume();
        // Time spent paused is not replayed
        assert_eq!(runner.advance(0.2, &mut audio, &mut frames), 0);
        assert_eq!(runner.advance(SIM_DT, &mut audio, &mut frames), 1);
        assert_eq!(runner.session().state().time_ticks, 2);
    }

    #[test]
    fn test_events_reach_audio() {
        let (mut runner, _) = runner();
        let mut audio = AudioMixer::new(Cues::default());
        let mut frames = Frames::default();
        {
            let state = runner.session_mut().state_mut();
            state.lives = 1;
            state.ball.pos = Vec2::new(400.0, 620.0);
            state.ball.vel = Vec2::new(8.0, 8.0);
        }

        runner.advance(SIM_DT, &mut audio, &mut frames);
        assert_eq!(audio.sink().0, vec![SoundCue::LifeLost, SoundCue::GameOver]);
        assert!(frames.0[0].is_game_over());
    }

    #[test]
    fn test_tap_restarts_finished_game() {
        let (mut runner, _) = runner();
        let mut audio = AudioMixer::new(Cues::default());
        let mut frames = Frames::default();
        {
            let state = runner.session_mut().state_mut();
            state.lives = 1;
            state.ball.pos = Vec2::new(400.0, 620.0);
            state.ball.vel = Vec2::new(8.0, 8.0);
        }
        runner.advance(SIM_DT, &mut audio, &mut frames);
        assert_eq!(runner.session().state().phase, GamePhase::GameOver);

        runner.tap();
        runner.advance(SIM_DT, &mut audio, &mut frames);
        let state = runner.session().state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);

        // The tap was consumed
        let (_, events) = runner.session_mut().step(SIM_DT, 400.0);
        assert!(!events.contains(&GameEvent::GameOver));
    }
}
