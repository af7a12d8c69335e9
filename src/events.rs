/// Things that happened during one frame.  Front ends turn them into sounds.

use crate::entities::{AlienKind, PowerUpKind};

#[derive(Clone, Debug, PartialEq)]
pub enum FrameEvent {
    PlayerShot,
    AlienKilled { kind: AlienKind },
    DrifterKilled,
    PlayerHit { lives_left: u32 },
    ShieldAbsorbed,
    PowerUpCollected { kind: PowerUpKind },
    RapidFireEarned,
    WaveStarted { wave: u32 },
    BossSpawned { wave: u32 },
    BossDefeated { wave: u32 },
    GameOver { score: u64 },
}

impl FrameEvent {
    /// The sound this event should trigger, if any.
    pub fn sound(&self) -> Option<SoundCue> {
        match self {
            FrameEvent::PlayerShot => Some(SoundCue::Shoot),
            FrameEvent::AlienKilled { .. } | FrameEvent::PlayerHit { .. } => {
                Some(SoundCue::Explosion)
            }
            FrameEvent::PowerUpCollected { .. } => Some(SoundCue::PowerUp),
            FrameEvent::BossSpawned { .. } => Some(SoundCue::BossSpawn),
            FrameEvent::GameOver { .. } => Some(SoundCue::GameOver),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Shoot,
    Explosion,
    PowerUp,
    BossSpawn,
    GameOver,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Shoot => "shoot",
            SoundCue::Explosion => "explosion",
            SoundCue::PowerUp => "powerup",
            SoundCue::BossSpawn => "boss-spawn",
            SoundCue::GameOver => "game-over",
        }
    }

    /// Suggested playback volume in `[0, 1]`.
    pub fn volume(self) -> f32 {
        match self {
            SoundCue::Shoot => 0.2,
            SoundCue::Explosion => 0.3,
            SoundCue::PowerUp => 0.4,
            SoundCue::BossSpawn => 0.3,
            SoundCue::GameOver => 0.5,
        }
    }
}

/// Plays sound cues.  Implementations drop cues they cannot play; nothing
/// is ever reported back to the game.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue, volume: f32);
}

/// Discards every cue.
#[derive(Debug, Default)]
pub struct Silence;

impl AudioSink for Silence {
    fn play(&mut self, _cue: SoundCue, _volume: f32) {}
}
