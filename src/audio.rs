//! Sound cues for game events
//!
//! The simulation only names sounds; playing them is up to an [`AudioSink`]
//! supplied by the host.

use crate::sim::GameEvent;

/// Maximum cues started per tick, extra cues in the same tick are dropped
///
/// Life, level and game-over cues take their voices first.
pub const MAX_VOICES_PER_TICK: usize = 4;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits wall
    WallHit,
    /// Brick breaks
    BrickBreak,
    /// Ball fell out the bottom
    LifeLost,
    /// Level cleared
    LevelClear,
    GameOver,
}

impl SoundCue {
    /// The cue that accompanies a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::WallHit => SoundCue::WallHit,
            GameEvent::PaddleHit => SoundCue::PaddleHit,
            GameEvent::BrickDestroyed { .. } => SoundCue::BrickBreak,
            GameEvent::LifeLost => SoundCue::LifeLost,
            GameEvent::LevelAdvanced => SoundCue::LevelClear,
            GameEvent::GameOver => SoundCue::GameOver,
        }
    }

    /// Cues that mark a change in the game rather than a bounce
    pub fn is_priority(self) -> bool {
        matches!(
            self,
            SoundCue::LifeLost | SoundCue::LevelClear | SoundCue::GameOver
        )
    }
}

/// Host-side sound playback
pub trait AudioSink {
    /// Start a cue at the given volume (0.0 - 1.0). Must not block.
    fn play(&mut self, cue: SoundCue, volume: f32);
}

/// Turns tick events into cues with volume and voice limits applied
#[derive(Debug)]
pub struct AudioMixer<S> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioMixer<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the cues for one tick's events
    ///
    /// Priority cues go first, the rest follow in event order until the voice
    /// limit is reached. Returns how many cues reached the sink.
    pub fn dispatch(&mut self, events: &[GameEvent]) -> usize {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return 0;
        }

        let mut cues: Vec<SoundCue> = events.iter().map(SoundCue::for_event).collect();
        // Stable, so event order holds within each group
        cues.sort_by_key(|cue| !cue.is_priority());

        let mut played = 0;
        for &cue in cues.iter().take(MAX_VOICES_PER_TICK) {
            self.sink.play(cue, vol);
            played += 1;
        }
        if cues.len() > MAX_VOICES_PER_TICK {
            log::trace!(
                "Dropped {} cues over the voice limit",
                cues.len() - MAX_VOICES_PER_TICK
            );
        }
        played
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Sink that writes cues to the log, for headless runs
#[derive(Debug, Default)]
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn play(&mut self, cue: SoundCue, volume: f32) {
        log::debug!("♪ {:?} ({:.0}%)", cue, volume * 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(SoundCue, f32)>);

    impl AudioSink for Recorder {
        fn play(&mut self, cue: SoundCue, volume: f32) {
            self.0.push((cue, volume));
        }
    }

    #[test]
    fn test_event_mapping() {
        assert_eq!(
            SoundCue::for_event(&GameEvent::BrickDestroyed { index: 12 }),
            SoundCue::BrickBreak
        );
        assert_eq!(SoundCue::for_event(&GameEvent::LifeLost), SoundCue::LifeLost);
        assert_eq!(SoundCue::for_event(&GameEvent::GameOver), SoundCue::GameOver);
    }

    #[test]
    fn test_dispatch_in_order_with_volume() {
        let mut mixer = AudioMixer::new(Recorder::default());
        mixer.set_master_volume(0.5);
        let played = mixer.dispatch(&[GameEvent::WallHit, GameEvent::PaddleHit]);

        assert_eq!(played, 2);
        assert_eq!(
            mixer.sink().0,
            vec![(SoundCue::WallHit, 0.5), (SoundCue::PaddleHit, 0.5)]
        );
    }

    #[test]
    fn test_voice_limit() {
        let mut mixer = AudioMixer::new(Recorder::default());
        let events = [GameEvent::WallHit; 6];
        assert_eq!(mixer.dispatch(&events), MAX_VOICES_PER_TICK);
        assert_eq!(mixer.sink().0.len(), MAX_VOICES_PER_TICK);
    }

    #[test]
    fn test_busy_tick_keeps_level_cue() {
        let mut mixer = AudioMixer::new(Recorder::default());
        // Corner bounce, paddle and the last brick all in one tick
        let events = [
            GameEvent::WallHit,
            GameEvent::WallHit,
            GameEvent::PaddleHit,
            GameEvent::BrickDestroyed { index: 34 },
            GameEvent::LevelAdvanced,
        ];
        assert_eq!(mixer.dispatch(&events), MAX_VOICES_PER_TICK);

        let cues: Vec<SoundCue> = mixer.sink().0.iter().map(|&(cue, _)| cue).collect();
        assert_eq!(
            cues,
            vec![
                SoundCue::LevelClear,
                SoundCue::WallHit,
                SoundCue::WallHit,
                SoundCue::PaddleHit
            ]
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut mixer = AudioMixer::new(Recorder::default());
        mixer.set_muted(true);
        assert_eq!(mixer.dispatch(&[GameEvent::LifeLost]), 0);
        assert!(mixer.sink().0.is_empty());
    }

    #[test]
    fn test_volume_clamped() {
        let mut mixer = AudioMixer::new(Recorder::default());
        mixer.set_master_volume(3.0);
        mixer.set_sfx_volume(-1.0);
        assert_eq!(mixer.dispatch(&[GameEvent::WallHit]), 0);
    }
}
