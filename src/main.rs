//! Brick Breaker entry point
//!
//! Headless native demo: runs a session in real time with an auto-pilot
//! paddle, logging frames and sound cues.
//!
//! Usage: `brick-breaker [tuning.json] [seconds]`

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use brick_breaker::audio::{AudioMixer, LogAudioSink};
use brick_breaker::consts::SIM_DT;
use brick_breaker::platform::PointerSlot;
use brick_breaker::renderer::LogRenderer;
use brick_breaker::runner::FixedStepRunner;
use brick_breaker::{Session, Tuning};

const ARENA_WIDTH: f32 = 800.0;
const ARENA_HEIGHT: f32 = 600.0;
const DEFAULT_SECONDS: f32 = 20.0;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) if path != "-" => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        _ => Tuning::default(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let session = match Session::with_tuning(ARENA_WIDTH, ARENA_HEIGHT, tuning) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to start session: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pointer = PointerSlot::new();
    let mut runner = FixedStepRunner::new(session, pointer.clone());
    let mut audio = AudioMixer::new(LogAudioSink);
    let mut renderer = LogRenderer::new(60);

    let frame = Duration::from_secs_f32(SIM_DT);
    let started = Instant::now();
    let mut last = started;

    while started.elapsed().as_secs_f32() < seconds {
        let frame_start = Instant::now();

        // Auto-pilot: chase the ball, a little behind so edge hits happen
        let ball = runner.session().state().ball;
        pointer.publish(ball.pos.x - ball.vel.x * 2.0);

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;
        runner.advance(dt, &mut audio, &mut renderer);

        if runner.session().snapshot().is_game_over() {
            log::info!("Tapping to play again");
            runner.tap();
        }

        if let Some(wait) = frame.checked_sub(frame_start.elapsed()) {
            thread::sleep(wait);
        }
    }

    let snapshot = runner.session().snapshot();
    log::info!(
        "Finished: level {}, score {}, lives {}",
        snapshot.level,
        snapshot.score,
        snapshot.lives
    );
    ExitCode::SUCCESS
}
