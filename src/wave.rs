/// Wave generation and difficulty curves.

use tracing::info;

use crate::constants::{
    ALIEN_DROP_BASE, ALIEN_DROP_PER_WAVE, ALIEN_SPEED_BASE, ALIEN_SPEED_PER_WAVE,
    BOSS_BASE_SIZE, BOSS_PATROL_SPEED, BOSS_START_Y, BOSS_WAVE_INTERVAL, GRID_COL_SPACING,
    GRID_ORIGIN_X, GRID_ROW_SPACING, GRID_TOP_Y, MAX_GRID_COLS, MAX_GRID_ROWS, SCREEN_WIDTH,
};
use crate::entities::{Alien, AlienKind, Boss, GameState};
use crate::events::FrameEvent;

/// The enemies making up one wave.  Replaces whatever the previous wave left.
#[derive(Clone, Debug, PartialEq)]
pub enum WaveContent {
    Grid(Vec<Alien>),
    Boss(Boss),
}

pub fn is_boss_wave(wave: u32) -> bool {
    wave % BOSS_WAVE_INTERVAL == 0
}

pub fn grid_rows(wave: u32) -> u32 {
    MAX_GRID_ROWS.min(3 + wave / 2)
}

pub fn grid_cols(wave: u32) -> u32 {
    MAX_GRID_COLS.min(8 + wave / 3)
}

/// Horizontal grid speed before the per-kind multiplier.
pub fn base_speed(wave: u32) -> f32 {
    ALIEN_SPEED_BASE + ALIEN_SPEED_PER_WAVE * wave.saturating_sub(1) as f32
}

/// How far the grid drops each time it bounces off a side.
pub fn drop_distance(wave: u32) -> f32 {
    ALIEN_DROP_BASE + ALIEN_DROP_PER_WAVE * wave.saturating_sub(1) as f32
}

/// Frames between alien volleys.
pub fn alien_shot_delay(wave: u32) -> u32 {
    100u32.saturating_sub(8 * wave.saturating_sub(1)).max(40)
}

pub fn boss_health(wave: u32) -> i32 {
    50 + 10 * wave as i32
}

pub fn spawn_boss(wave: u32) -> Boss {
    let health = boss_health(wave);
    Boss {
        x: SCREEN_WIDTH / 2.0,
        y: BOSS_START_Y,
        vx: BOSS_PATROL_SPEED,
        size: BOSS_BASE_SIZE + 5.0 * wave as f32,
        health,
        max_health: health,
        pattern: 0,
        shot_timer: 0,
    }
}

pub fn generate_wave(wave: u32) -> WaveContent {
    if is_boss_wave(wave) {
        return WaveContent::Boss(spawn_boss(wave));
    }

    let rows = grid_rows(wave);
    let cols = grid_cols(wave);
    let mut aliens = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        let kind = AlienKind::ROW_CYCLE[row as usize % AlienKind::ROW_CYCLE.len()];
        for col in 0..cols {
            aliens.push(Alien {
                x: GRID_ORIGIN_X + col as f32 * GRID_COL_SPACING,
                y: GRID_TOP_Y - row as f32 * GRID_ROW_SPACING,
                kind,
            });
        }
    }
    WaveContent::Grid(aliens)
}

/// Replace the current enemies with wave `wave` and announce it.
/// Drifters from the previous wave are discarded; bullets and power-ups stay.
pub fn begin_wave(state: &mut GameState, wave: u32) {
    state.wave = wave;
    state.drifters.clear();
    state.alien_direction = 1.0;
    state.events.push(FrameEvent::WaveStarted { wave });

    match generate_wave(wave) {
        WaveContent::Grid(aliens) => {
            info!(wave, aliens = aliens.len(), "wave started");
            state.aliens = aliens;
            state.boss = None;
        }
        WaveContent::Boss(boss) => {
            info!(wave, health = boss.health, "boss wave started");
            state.aliens.clear();
            state.boss = Some(boss);
            state.events.push(FrameEvent::BossSpawned { wave });
        }
    }
}
