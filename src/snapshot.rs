/// Read-only copy of the state handed to the renderer each frame.
///
/// The renderer only ever sees this; it cannot reach back into the game.

use crate::constants::{HIGH_SCORE_SLOTS, PARTICLE_LIFETIME};
use crate::entities::{AlienKind, Bullet, GameState, GameStatus, PowerUpKind, Tint};

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub shield: u32,
    pub spread: u32,
    pub rapid_fire: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BossView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub health: i32,
    pub health_ratio: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub tint: Tint,
    /// 1.0 when fresh, falling to 0.0 at end of life.
    pub fade: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub player: PlayerView,
    pub aliens: Vec<(f32, f32, AlienKind)>,
    pub drifters: Vec<(f32, f32)>,
    pub boss: Option<BossView>,
    pub player_bullets: Vec<Bullet>,
    pub alien_bullets: Vec<Bullet>,
    pub power_ups: Vec<(f32, f32, PowerUpKind)>,
    pub particles: Vec<ParticleView>,
    pub score: u64,
    pub lives: u32,
    pub wave: u32,
    pub multiplier: u32,
    pub screen_shake: u32,
    pub status: GameStatus,
    pub high_scores: [u64; HIGH_SCORE_SLOTS],
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let p = &state.player;
        Snapshot {
            player: PlayerView {
                x: p.x,
                y: p.y,
                shield: p.shield,
                spread: p.spread,
                rapid_fire: p.rapid_fire,
            },
            aliens: state.aliens.iter().map(|a| (a.x, a.y, a.kind)).collect(),
            drifters: state.drifters.iter().map(|d| (d.x, d.y)).collect(),
            boss: state.boss.as_ref().map(|b| BossView {
                x: b.x,
                y: b.y,
                size: b.size,
                health: b.health,
                health_ratio: b.health_ratio(),
            }),
            player_bullets: state.player_bullets.clone(),
            alien_bullets: state.alien_bullets.clone(),
            power_ups: state.power_ups.iter().map(|pu| (pu.x, pu.y, pu.kind)).collect(),
            particles: state
                .particles
                .iter()
                .map(|pt| ParticleView {
                    x: pt.x,
                    y: pt.y,
                    tint: pt.tint,
                    fade: 1.0 - (pt.age as f32 / PARTICLE_LIFETIME as f32).min(1.0),
                })
                .collect(),
            score: state.score,
            lives: p.lives,
            wave: state.wave,
            multiplier: state.multiplier,
            screen_shake: state.screen_shake,
            status: state.status,
            high_scores: *state.high_scores.entries(),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
