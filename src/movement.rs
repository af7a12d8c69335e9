/// Per-frame position updates.  Nothing here removes an entity because of
/// a hit; that is `collision`'s job.  Off-screen pruning lives at the end.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{
    ALIEN_BULLET_SPEED, ALIEN_MUZZLE_OFFSET, BOSS_MUZZLE_OFFSET, BOSS_PATROL_INSET,
    BOSS_SHOT_DELAY, BOSS_TRIPLE_OFFSETS, BULLET_SPEED, MUZZLE_OFFSET, OFFSCREEN_MARGIN,
    PARTICLE_GRAVITY, PARTICLE_LIFETIME, PLAYER_MAX_X, PLAYER_MAX_Y, PLAYER_MIN_X, PLAYER_MIN_Y,
    PLAYER_SPEED, POWERUP_FALL_SPEED, RED_BURST_OFFSETS, SCREEN_HEIGHT, SCREEN_WIDTH,
    SPREAD_OFFSET,
};
use crate::entities::{AlienKind, Boss, Bullet, GameState};
use crate::events::FrameEvent;
use crate::input::InputState;
use crate::wave::{alien_shot_delay, base_speed, drop_distance};

// ── Player ───────────────────────────────────────────────────────────────────

/// Opposite keys held together cancel out.
pub fn move_player(state: &mut GameState, input: &InputState) {
    let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32 * PLAYER_SPEED;
    let p = &mut state.player;
    p.vx = axis(input.left, input.right);
    p.vy = axis(input.down, input.up);
    p.x = (p.x + p.vx).clamp(PLAYER_MIN_X, PLAYER_MAX_X);
    p.y = (p.y + p.vy).clamp(PLAYER_MIN_Y, PLAYER_MAX_Y);
}

/// Fire when the trigger is held and the gun has reloaded.
pub fn player_fire(state: &mut GameState, input: &InputState) {
    if input.fire && state.player.shoot_cooldown == 0 {
        let x = state.player.x;
        let y = state.player.y + MUZZLE_OFFSET;
        state.player_bullets.push(Bullet { x, y });
        if state.player.spread_active() {
            state.player_bullets.push(Bullet { x: x - SPREAD_OFFSET, y });
            state.player_bullets.push(Bullet { x: x + SPREAD_OFFSET, y });
        }
        state.player.shoot_cooldown = state.player.reload_time();
        state.events.push(FrameEvent::PlayerShot);
    }
    state.player.shoot_cooldown = state.player.shoot_cooldown.saturating_sub(1);
}

// ── Alien grid ───────────────────────────────────────────────────────────────

/// Slide the grid sideways; on touching a side, reverse and drop every alien.
pub fn move_aliens(state: &mut GameState) {
    let speed = base_speed(state.wave) * state.alien_direction;
    for alien in &mut state.aliens {
        alien.x += speed * alien.kind.speed_multiplier();
    }

    let moving_right = state.alien_direction > 0.0;
    let edge_hit = state.aliens.iter().any(|a| {
        let b = a.bounds();
        if moving_right {
            b.right >= SCREEN_WIDTH
        } else {
            b.left <= 0.0
        }
    });

    if edge_hit {
        state.alien_direction = -state.alien_direction;
        let drop = drop_distance(state.wave);
        for alien in &mut state.aliens {
            alien.y -= drop;
        }
    }
}

/// Every few frames a random alien fires; red aliens fire a three-round burst.
pub fn alien_volley(state: &mut GameState, rng: &mut impl Rng) {
    if state.aliens.is_empty() {
        return;
    }
    state.alien_shoot_timer += 1;
    if state.alien_shoot_timer < alien_shot_delay(state.wave) {
        return;
    }
    state.alien_shoot_timer = 0;

    let Some(shooter) = state.aliens.choose(rng) else {
        return;
    };
    let (x, y) = (shooter.x, shooter.y - ALIEN_MUZZLE_OFFSET);
    if shooter.kind == AlienKind::Red {
        for dx in RED_BURST_OFFSETS {
            state.alien_bullets.push(Bullet { x: x + dx, y });
        }
    } else {
        state.alien_bullets.push(Bullet { x, y });
    }
}

pub fn move_drifters(state: &mut GameState) {
    for d in &mut state.drifters {
        d.x += d.vx;
        d.y += d.vy;
    }
}

// ── Boss ─────────────────────────────────────────────────────────────────────

/// Patrol between the inset bounds.  Every `BOSS_SHOT_DELAY` frames advance
/// to the next pattern and fire it, so the first volley is the fan.
pub fn move_boss(state: &mut GameState) {
    let Some(boss) = state.boss.as_mut() else {
        return;
    };
    boss.x += boss.vx;
    if boss.x < BOSS_PATROL_INSET || boss.x > SCREEN_WIDTH - BOSS_PATROL_INSET {
        boss.vx = -boss.vx;
    }

    boss.shot_timer += 1;
    if boss.shot_timer >= BOSS_SHOT_DELAY {
        boss.shot_timer = 0;
        boss.pattern = (boss.pattern + 1) % 3;
        let volley = boss_volley(boss);
        state.alien_bullets.extend(volley);
    }
}

/// Bullets for the boss's current pattern.
pub fn boss_volley(boss: &Boss) -> Vec<Bullet> {
    let muzzle_y = boss.y - BOSS_MUZZLE_OFFSET;
    match boss.pattern {
        0 => vec![Bullet { x: boss.x, y: muzzle_y }],
        1 => (-45..=45)
            .step_by(15)
            .map(|deg: i32| {
                let rad = (deg as f32).to_radians();
                Bullet {
                    x: boss.x + rad.sin() * 30.0,
                    y: muzzle_y + rad.cos() * 10.0,
                }
            })
            .collect(),
        _ => BOSS_TRIPLE_OFFSETS
            .iter()
            .map(|dx| Bullet { x: boss.x + dx, y: muzzle_y })
            .collect(),
    }
}

// ── Projectiles & effects ────────────────────────────────────────────────────

pub fn move_bullets(state: &mut GameState) {
    for b in &mut state.player_bullets {
        b.y += BULLET_SPEED;
    }
    for b in &mut state.alien_bullets {
        b.y -= ALIEN_BULLET_SPEED;
    }
}

/// Age particles and let power-ups fall.  Expired particles and power-ups
/// below the field are dropped.
pub fn update_effects(state: &mut GameState) {
    state.particles.retain(|p| p.age < PARTICLE_LIFETIME);
    for p in &mut state.particles {
        p.x += p.vx;
        p.y += p.vy;
        p.vy -= PARTICLE_GRAVITY;
        p.age += 1;
    }

    for pu in &mut state.power_ups {
        pu.y -= POWERUP_FALL_SPEED;
    }
    state.power_ups.retain(|pu| pu.y >= 0.0);
}

/// Player bullets survive up to and including `SCREEN_HEIGHT + 50`, alien
/// bullets down to and including `-50`.  Drifters leaving the field by more
/// than the margin on the bottom or either side are dropped.
pub fn cleanup_offscreen(state: &mut GameState) {
    let top = SCREEN_HEIGHT + OFFSCREEN_MARGIN;
    let bottom = -OFFSCREEN_MARGIN;
    state.player_bullets.retain(|b| b.y <= top);
    state.alien_bullets.retain(|b| b.y >= bottom);
    state.drifters.retain(|d| {
        d.y >= bottom && d.x >= -OFFSCREEN_MARGIN && d.x <= SCREEN_WIDTH + OFFSCREEN_MARGIN
    });
}
