/// Terminal stand-in for a sound device.
///
/// A terminal cannot mix samples, so cues are logged and, when enabled, the
/// loud ones ring the bell.  Nothing here can fail the game.

use std::io::{stdout, Write};

use invader_swarm::events::{AudioSink, SoundCue};
use tracing::trace;

/// Cues at or above this volume are loud enough for the bell.
const BELL_THRESHOLD: f32 = 0.3;

pub struct TerminalAudio {
    bell: bool,
}

impl TerminalAudio {
    pub fn new(bell: bool) -> Self {
        TerminalAudio { bell }
    }
}

impl AudioSink for TerminalAudio {
    fn play(&mut self, cue: SoundCue, volume: f32) {
        trace!(cue = cue.name(), volume, "sound");
        let loud = matches!(cue, SoundCue::BossSpawn | SoundCue::GameOver);
        if self.bell && loud && volume >= BELL_THRESHOLD {
            let mut out = stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}
