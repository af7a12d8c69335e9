/// Per-frame pipeline and the Playing / Paused / GameOver state machine.
///
/// Every public function takes the `GameState` by mutable reference plus,
/// where needed, an RNG handle.  All randomness comes through that handle so
/// a seeded RNG replays a run exactly.

use rand::Rng;
use tracing::{debug, info};

use crate::collision::resolve_collisions;
use crate::config::GameConfig;
use crate::constants::{INVASION_LINE, PLAYER_START_X, PLAYER_START_Y};
use crate::entities::{GameState, GameStatus, Player};
use crate::events::FrameEvent;
use crate::high_scores::HighScores;
use crate::input::InputState;
use crate::movement::{
    alien_volley, cleanup_offscreen, move_aliens, move_boss, move_bullets, move_drifters,
    move_player, player_fire, update_effects,
};
use crate::wave::begin_wave;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh run on wave 1.
pub fn init_state(config: &GameConfig, high_scores: HighScores) -> GameState {
    let mut state = GameState {
        player: Player::new(PLAYER_START_X, PLAYER_START_Y, config.starting_lives),
        aliens: Vec::new(),
        drifters: Vec::new(),
        boss: None,
        player_bullets: Vec::new(),
        alien_bullets: Vec::new(),
        power_ups: Vec::new(),
        particles: Vec::new(),
        score: 0,
        wave: 1,
        kills: 0,
        kills_since_reset: 0,
        multiplier: 1,
        multiplier_timer: 0,
        alien_direction: 1.0,
        alien_shoot_timer: 0,
        screen_shake: 0,
        status: GameStatus::Playing,
        high_scores,
        frame: 0,
        events: Vec::new(),
    };
    begin_wave(&mut state, 1);
    state
}

/// Start over, keeping only the high-score table.
pub fn restart(state: &mut GameState, config: &GameConfig) {
    let high_scores = std::mem::take(&mut state.high_scores);
    let mut events = std::mem::take(&mut state.events);
    *state = init_state(config, high_scores);
    events.append(&mut state.events);
    state.events = events;
    info!("new game");
}

// ── Commands ─────────────────────────────────────────────────────────────────

/// Playing ↔ Paused.  Ignored once the game is over.
pub fn toggle_pause(state: &mut GameState) {
    state.status = match state.status {
        GameStatus::Playing => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Playing,
        GameStatus::GameOver => GameStatus::GameOver,
    };
    debug!(status = ?state.status, "pause toggled");
}

/// Record the score and stop.  Does nothing if already over.
pub fn enter_game_over(state: &mut GameState) {
    if state.status == GameStatus::GameOver {
        return;
    }
    state.status = GameStatus::GameOver;
    state.high_scores.record(state.score);
    state.events.push(FrameEvent::GameOver { score: state.score });
    info!(score = state.score, wave = state.wave, "game over");
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  Frozen while paused or over.
///
/// Order: timers → player → boss/aliens → bullets → collisions → wave
/// completion → off-screen cleanup → game-over check.
pub fn tick(state: &mut GameState, input: &InputState, config: &GameConfig, rng: &mut impl Rng) {
    if state.status != GameStatus::Playing {
        return;
    }
    state.frame += 1;

    tick_timers(state);
    update_effects(state);

    move_player(state, input);
    player_fire(state, input);

    if state.is_boss_wave() {
        move_boss(state);
    } else {
        move_aliens(state);
        move_drifters(state);
        alien_volley(state, rng);
    }

    move_bullets(state);
    resolve_collisions(state, config, rng);

    let invaded = check_wave_completion(state);
    cleanup_offscreen(state);

    if state.player.lives == 0 || invaded {
        enter_game_over(state);
    }
}

/// Count every duration down by one frame.  An expired multiplier window
/// drops the multiplier and the streak back to the start.
pub fn tick_timers(state: &mut GameState) {
    let p = &mut state.player;
    p.shield = p.shield.saturating_sub(1);
    p.spread = p.spread.saturating_sub(1);
    p.rapid_fire = p.rapid_fire.saturating_sub(1);

    if state.multiplier_timer > 0 {
        state.multiplier_timer -= 1;
        if state.multiplier_timer == 0 {
            state.multiplier = 1;
            state.kills_since_reset = 0;
        }
    }

    state.screen_shake = state.screen_shake.saturating_sub(1);
}

/// Start the next wave if the grid is gone.  Returns `true` when an alien
/// has reached the invasion line.
pub fn check_wave_completion(state: &mut GameState) -> bool {
    if state.is_boss_wave() {
        return false;
    }
    if state.aliens.iter().any(|a| a.bounds().bottom <= INVASION_LINE) {
        return true;
    }
    if state.aliens.is_empty() {
        let next = state.wave + 1;
        begin_wave(state, next);
    }
    false
}
