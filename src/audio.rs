//! Audio cue seam.
//!
//! The core triggers named cues at well-defined points; playback itself is a
//! collaborator concern. The default backend does nothing, so the game is
//! fully playable with no sound at all.

/// Named sound cues fired by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Food eaten without a level-up.
    Eat,
    /// Food eaten and a level boundary crossed.
    LevelUp,
    Die,
}

/// A sound backend. Implementations are best-effort: a cue that cannot be
/// played is dropped, never an error.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Backend used when no audio device is available.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records cues for assertions.
    #[derive(Default)]
    pub struct RecordingAudio {
        pub cues: Vec<AudioCue>,
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, cue: AudioCue) {
            self.cues.push(cue);
        }
    }

    #[test]
    fn test_null_audio_accepts_all_cues() {
        let mut sink = NullAudio;
        sink.play(AudioCue::Eat);
        sink.play(AudioCue::LevelUp);
        sink.play(AudioCue::Die);
    }

    #[test]
    fn test_recording_sink_orders_cues() {
        let mut sink = RecordingAudio::default();
        sink.play(AudioCue::Eat);
        sink.play(AudioCue::Die);
        assert_eq!(sink.cues, vec![AudioCue::Eat, AudioCue::Die]);
    }
}
