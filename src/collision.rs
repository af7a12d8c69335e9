/// Hit detection and combat resolution, run once per frame after movement.
///
/// Every pass follows the same shape: scan with immutable borrows and mark
/// hits in a mask, compact the marked entities out of their lists, then run
/// the death handlers on the removed values.  A handler can therefore never
/// see an entity twice, and new spawns (drifters, particles) never disturb a
/// scan in progress.

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::constants::{
    ALIEN_BULLET_SIZE, BUFF_DURATION, DRIFTERS_PER_SWARM, DRIFTER_SCATTER, KILLS_PER_MULTIPLIER,
    MAX_MULTIPLIER, MULTIPLIER_WINDOW, PARTICLES_PER_EXPLOSION, PARTICLE_SPEED,
    PLAYER_BULLET_SIZE, SCREEN_SHAKE_FRAMES, STREAK_RAPID_DURATION, STREAK_RAPID_KILLS,
};
use crate::entities::{Alien, AlienKind, Drifter, GameState, Particle, PowerUp, PowerUpKind, Tint};
use crate::events::FrameEvent;
use crate::wave::begin_wave;

/// Run every pass in order.
pub fn resolve_collisions(state: &mut GameState, config: &GameConfig, rng: &mut impl Rng) {
    player_bullets_vs_enemies(state, config, rng);
    collect_power_up(state, rng);
    alien_bullets_vs_player(state, rng);
    player_vs_enemies(state, config, rng);
    player_bullets_vs_boss(state, rng);
}

// ── Passes ───────────────────────────────────────────────────────────────────

/// Each player bullet kills at most one enemy: the first live alien it
/// overlaps, otherwise the first live drifter.
pub fn player_bullets_vs_enemies(state: &mut GameState, config: &GameConfig, rng: &mut impl Rng) {
    let mut used = vec![false; state.player_bullets.len()];
    let mut dead_aliens = vec![false; state.aliens.len()];
    let mut dead_drifters = vec![false; state.drifters.len()];

    for (bi, bullet) in state.player_bullets.iter().enumerate() {
        let shot = bullet.bounds(PLAYER_BULLET_SIZE);
        if let Some(ai) = (0..state.aliens.len())
            .find(|&ai| !dead_aliens[ai] && state.aliens[ai].bounds().overlaps(&shot))
        {
            dead_aliens[ai] = true;
            used[bi] = true;
            continue;
        }
        if let Some(di) = (0..state.drifters.len())
            .find(|&di| !dead_drifters[di] && state.drifters[di].bounds().overlaps(&shot))
        {
            dead_drifters[di] = true;
            used[bi] = true;
        }
    }

    take_marked(&mut state.player_bullets, &used);
    let aliens = take_marked(&mut state.aliens, &dead_aliens);
    let drifters = take_marked(&mut state.drifters, &dead_drifters);

    for alien in aliens {
        on_alien_destroyed(state, alien, config, rng);
        award(state, 10);
        register_kill(state);
        if state.kills % STREAK_RAPID_KILLS == 0 {
            state.player.rapid_fire = STREAK_RAPID_DURATION;
            state.events.push(FrameEvent::RapidFireEarned);
        }
    }
    for drifter in drifters {
        on_drifter_destroyed(state, drifter, rng);
        register_kill(state);
    }
}

/// Only the first overlapping power-up is applied each frame.
pub fn collect_power_up(state: &mut GameState, rng: &mut impl Rng) {
    let player = state.player.bounds();
    if let Some(i) = state.power_ups.iter().position(|p| p.bounds().overlaps(&player)) {
        let power_up = state.power_ups.remove(i);
        apply_power_up(state, power_up.kind, rng);
    }
}

/// A shield absorbs the bullet; otherwise every hit costs one life.
pub fn alien_bullets_vs_player(state: &mut GameState, rng: &mut impl Rng) {
    let player = state.player.bounds();
    let hits: Vec<bool> = state
        .alien_bullets
        .iter()
        .map(|b| b.bounds(ALIEN_BULLET_SIZE).overlaps(&player))
        .collect();

    for bullet in take_marked(&mut state.alien_bullets, &hits) {
        if state.player.shielded() {
            explode(state, bullet.x, bullet.y, Tint::Blue, rng);
            state.events.push(FrameEvent::ShieldAbsorbed);
        } else {
            let (x, y) = (state.player.x, state.player.y);
            explode(state, x, y, Tint::Red, rng);
            hurt_player(state);
        }
    }
}

/// Ramming: each touching alien or drifter dies and costs a life.  A shield
/// makes the player immune and leaves the enemies alone.
pub fn player_vs_enemies(state: &mut GameState, config: &GameConfig, rng: &mut impl Rng) {
    if state.player.shielded() {
        return;
    }
    let player = state.player.bounds();

    let touching: Vec<bool> = state
        .aliens
        .iter()
        .map(|a| a.bounds().overlaps(&player))
        .collect();
    for alien in take_marked(&mut state.aliens, &touching) {
        on_alien_destroyed(state, alien, config, rng);
        hurt_player(state);
    }

    let touching: Vec<bool> = state
        .drifters
        .iter()
        .map(|d| d.bounds().overlaps(&player))
        .collect();
    for drifter in take_marked(&mut state.drifters, &touching) {
        on_drifter_destroyed(state, drifter, rng);
        hurt_player(state);
    }
}

/// Every bullet touching the boss chips one point of health.  Bullets
/// arriving after the killing blow pass through.  A kill moves straight on
/// to the next wave.
pub fn player_bullets_vs_boss(state: &mut GameState, rng: &mut impl Rng) {
    let Some(boss) = state.boss.as_mut() else {
        return;
    };
    let target = boss.bounds();
    let mut used = vec![false; state.player_bullets.len()];
    for (bi, bullet) in state.player_bullets.iter().enumerate() {
        if boss.health <= 0 {
            break;
        }
        if bullet.bounds(PLAYER_BULLET_SIZE).overlaps(&target) {
            used[bi] = true;
            boss.health -= 1;
        }
    }
    let defeated = boss.health <= 0;
    boss.health = boss.health.max(0);
    let (bx, by) = (boss.x, boss.y);

    for bullet in take_marked(&mut state.player_bullets, &used) {
        explode(state, bullet.x, bullet.y, Tint::Red, rng);
    }

    if defeated {
        let wave = state.wave;
        explode(state, bx, by, Tint::Gold, rng);
        award(state, 500);
        state.boss = None;
        state.events.push(FrameEvent::BossDefeated { wave });
        info!(wave, score = state.score, "boss defeated");
        begin_wave(state, wave + 1);
    }
}

// ── Death handlers & effects ─────────────────────────────────────────────────

/// Explosion plus the kind-specific reward.  The alien has already been
/// removed from its list.
pub fn on_alien_destroyed(
    state: &mut GameState,
    alien: Alien,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    explode(state, alien.x, alien.y, Tint::Orange, rng);
    state.events.push(FrameEvent::AlienKilled { kind: alien.kind });

    match alien.kind {
        AlienKind::Extra => {
            award(state, 50);
            roll_power_up(state, alien.x, alien.y, config, rng);
        }
        AlienKind::Swarm => {
            roll_power_up(state, alien.x, alien.y, config, rng);
            for _ in 0..DRIFTERS_PER_SWARM {
                let drifter = Drifter {
                    x: alien.x + rng.gen_range(-DRIFTER_SCATTER.0..=DRIFTER_SCATTER.0),
                    y: alien.y + rng.gen_range(-DRIFTER_SCATTER.1..=DRIFTER_SCATTER.1),
                    vx: rng.gen_range(-1.5..=1.5),
                    vy: rng.gen_range(-1.0..=-0.5),
                };
                state.drifters.push(drifter);
            }
        }
        AlienKind::Green | AlienKind::Red => {
            if rng.gen_bool(config.basic_alien_roll) {
                roll_power_up(state, alien.x, alien.y, config, rng);
            }
        }
    }
}

pub fn on_drifter_destroyed(state: &mut GameState, drifter: Drifter, rng: &mut impl Rng) {
    award(state, 5);
    explode(state, drifter.x, drifter.y, Tint::Purple, rng);
    state.events.push(FrameEvent::DrifterKilled);
}

pub fn apply_power_up(state: &mut GameState, kind: PowerUpKind, rng: &mut impl Rng) {
    debug!(kind = kind.name(), "power-up collected");
    state.events.push(FrameEvent::PowerUpCollected { kind });
    match kind {
        PowerUpKind::Shield => state.player.shield = BUFF_DURATION,
        PowerUpKind::ExtraLife => state.player.lives += 1,
        PowerUpKind::Spread => state.player.spread = BUFF_DURATION,
        PowerUpKind::RapidFire => state.player.rapid_fire = BUFF_DURATION,
        PowerUpKind::Nuke => {
            let aliens = std::mem::take(&mut state.aliens);
            let drifters = std::mem::take(&mut state.drifters);
            let blasts = aliens
                .iter()
                .map(|a| (a.x, a.y))
                .chain(drifters.iter().map(|d| (d.x, d.y)));
            for (x, y) in blasts {
                explode(state, x, y, Tint::Orange, rng);
            }
            award(state, 100);
            info!(aliens = aliens.len(), drifters = drifters.len(), "nuke detonated");
        }
    }
}

/// Burst of cosmetic particles.
pub fn explode(state: &mut GameState, x: f32, y: f32, tint: Tint, rng: &mut impl Rng) {
    for _ in 0..PARTICLES_PER_EXPLOSION {
        state.particles.push(Particle {
            x,
            y,
            vx: rng.gen_range(-PARTICLE_SPEED..=PARTICLE_SPEED),
            vy: rng.gen_range(-PARTICLE_SPEED..=PARTICLE_SPEED),
            tint,
            age: 0,
        });
    }
}

fn roll_power_up(state: &mut GameState, x: f32, y: f32, config: &GameConfig, rng: &mut impl Rng) {
    if rng.gen_bool(config.powerup_drop_chance) {
        let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
        state.power_ups.push(PowerUp { x, y, kind });
    }
}

// ── Bookkeeping ──────────────────────────────────────────────────────────────

/// Add `base * wave * multiplier` to the score.
fn award(state: &mut GameState, base: u64) {
    state.score += base * u64::from(state.wave) * u64::from(state.multiplier);
}

/// Bump the streak counters and restart the multiplier window.
fn register_kill(state: &mut GameState) {
    state.kills += 1;
    state.kills_since_reset += 1;
    state.multiplier = MAX_MULTIPLIER.min(1 + state.kills_since_reset / KILLS_PER_MULTIPLIER);
    state.multiplier_timer = MULTIPLIER_WINDOW;
}

fn hurt_player(state: &mut GameState) {
    state.player.lives = state.player.lives.saturating_sub(1);
    state.screen_shake = SCREEN_SHAKE_FRAMES;
    state.events.push(FrameEvent::PlayerHit { lives_left: state.player.lives });
}

/// Move the marked items out of `items`, keeping both sides in order.
fn take_marked<T>(items: &mut Vec<T>, marked: &[bool]) -> Vec<T> {
    let mut taken = Vec::new();
    let mut kept = Vec::with_capacity(items.len());
    for (i, item) in items.drain(..).enumerate() {
        if marked.get(i).copied().unwrap_or(false) {
            taken.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;
    taken
}
