use invader_swarm::collision::*;
use invader_swarm::compute::init_state;
use invader_swarm::config::GameConfig;
use invader_swarm::entities::*;
use invader_swarm::events::FrameEvent;
use invader_swarm::high_scores::HighScores;
use invader_swarm::wave::spawn_boss;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Wave 1, player at (400, 60), no enemies.
fn make_state() -> GameState {
    let mut s = init_state(&GameConfig::default(), HighScores::default());
    s.aliens.clear();
    s.events.clear();
    s
}

/// Power-up drops switched off so outcomes don't depend on the RNG.
fn no_drops() -> GameConfig {
    GameConfig {
        powerup_drop_chance: 0.0,
        basic_alien_roll: 0.0,
        ..GameConfig::default()
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn alien(x: f32, y: f32, kind: AlienKind) -> Alien {
    Alien { x, y, kind }
}

// ── Player bullets vs aliens ──────────────────────────────────────────────────

#[test]
fn kill_scores_ten_times_wave_times_multiplier() {
    let mut s = make_state();
    s.wave = 3;
    s.multiplier = 2;
    s.aliens.push(alien(400.0, 300.0, AlienKind::Green));
    s.player_bullets.push(Bullet { x: 400.0, y: 300.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());

    assert_eq!(s.score, 60);
    assert!(s.aliens.is_empty());
    assert!(s.player_bullets.is_empty());
    assert_eq!(s.kills, 1);
    assert_eq!(s.multiplier_timer, 180);
    assert_eq!(s.particles.len(), 20);
    assert!(s.events.contains(&FrameEvent::AlienKilled { kind: AlienKind::Green }));
}

#[test]
fn bullet_missing_alien_flies_on() {
    let mut s = make_state();
    s.aliens.push(alien(400.0, 300.0, AlienKind::Green));
    s.player_bullets.push(Bullet { x: 500.0, y: 300.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert_eq!(s.aliens.len(), 1);
    assert_eq!(s.player_bullets.len(), 1);
    assert_eq!(s.score, 0);
}

#[test]
fn one_bullet_kills_at_most_one_alien() {
    let mut s = make_state();
    s.aliens.push(alien(400.0, 300.0, AlienKind::Green));
    s.aliens.push(alien(405.0, 300.0, AlienKind::Red));
    s.player_bullets.push(Bullet { x: 402.0, y: 300.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert_eq!(s.aliens.len(), 1);
    assert_eq!(s.aliens[0].kind, AlienKind::Red);
    assert_eq!(s.kills, 1);
}

#[test]
fn two_bullets_on_one_alien_spend_only_one() {
    let mut s = make_state();
    s.aliens.push(alien(400.0, 300.0, AlienKind::Green));
    s.player_bullets.push(Bullet { x: 400.0, y: 300.0 });
    s.player_bullets.push(Bullet { x: 401.0, y: 301.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert_eq!(s.player_bullets.len(), 1);
    assert_eq!(s.score, 10);
}

#[test]
fn extra_alien_pays_bonus() {
    let mut s = make_state();
    s.wave = 2;
    s.aliens.push(alien(400.0, 300.0, AlienKind::Extra));
    s.player_bullets.push(Bullet { x: 400.0, y: 300.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert_eq!(s.score, 120); // (50 + 10) * 2
}

#[test]
fn extra_alien_always_rolls_for_power_up() {
    let config = GameConfig {
        powerup_drop_chance: 1.0,
        basic_alien_roll: 0.0,
        ..GameConfig::default()
    };
    let mut s = make_state();
    s.aliens.push(alien(400.0, 300.0, AlienKind::Extra));
    s.aliens.push(alien(200.0, 300.0, AlienKind::Green));
    s.player_bullets.push(Bullet { x: 400.0, y: 300.0 });
    s.player_bullets.push(Bullet { x: 200.0, y: 300.0 });
    player_bullets_vs_enemies(&mut s, &config, &mut seeded_rng());
    assert_eq!(s.power_ups.len(), 1);
    assert_eq!((s.power_ups[0].x, s.power_ups[0].y), (400.0, 300.0));
}

#[test]
fn swarm_alien_splits_into_two_drifters() {
    let mut s = make_state();
    s.aliens.push(alien(400.0, 300.0, AlienKind::Swarm));
    s.player_bullets.push(Bullet { x: 400.0, y: 300.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());

    assert_eq!(s.drifters.len(), 2);
    for d in &s.drifters {
        assert!((380.0..=420.0).contains(&d.x), "x = {}", d.x);
        assert!((290.0..=310.0).contains(&d.y), "y = {}", d.y);
        assert!(d.vy < 0.0);
    }
}

// ── Multiplier & streak ───────────────────────────────────────────────────────

#[test]
fn multiplier_rises_every_ten_kills() {
    let mut s = make_state();
    s.kills_since_reset = 9;
    s.aliens.push(alien(400.0, 300.0, AlienKind::Green));
    s.player_bullets.push(Bullet { x: 400.0, y: 300.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert_eq!(s.multiplier, 2);
}

#[test]
fn multiplier_caps_at_four() {
    let mut s = make_state();
    s.kills_since_reset = 100;
    s.aliens.push(alien(400.0, 300.0, AlienKind::Green));
    s.player_bullets.push(Bullet { x: 400.0, y: 300.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert_eq!(s.multiplier, 4);
}

#[test]
fn twentieth_kill_grants_rapid_fire() {
    let mut s = make_state();
    s.kills = 19;
    s.aliens.push(alien(400.0, 300.0, AlienKind::Green));
    s.player_bullets.push(Bullet { x: 400.0, y: 300.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert_eq!(s.kills, 20);
    assert_eq!(s.player.rapid_fire, 300);
    assert!(s.events.contains(&FrameEvent::RapidFireEarned));
}

#[test]
fn other_kills_grant_nothing() {
    let mut s = make_state();
    s.kills = 20;
    s.aliens.push(alien(400.0, 300.0, AlienKind::Green));
    s.player_bullets.push(Bullet { x: 400.0, y: 300.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert_eq!(s.player.rapid_fire, 0);
}

// ── Drifters ──────────────────────────────────────────────────────────────────

#[test]
fn drifter_kill_scores_five() {
    let mut s = make_state();
    s.wave = 2;
    s.drifters.push(Drifter { x: 200.0, y: 200.0, vx: 0.0, vy: -1.0 });
    s.player_bullets.push(Bullet { x: 200.0, y: 200.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert_eq!(s.score, 10);
    assert!(s.drifters.is_empty());
    assert_eq!(s.kills, 1);
    assert!(s.events.contains(&FrameEvent::DrifterKilled));
}

#[test]
fn alien_takes_priority_over_drifter() {
    let mut s = make_state();
    s.aliens.push(alien(200.0, 200.0, AlienKind::Green));
    s.drifters.push(Drifter { x: 200.0, y: 200.0, vx: 0.0, vy: -1.0 });
    s.player_bullets.push(Bullet { x: 200.0, y: 200.0 });
    player_bullets_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert!(s.aliens.is_empty());
    assert_eq!(s.drifters.len(), 1);
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn only_one_power_up_per_frame() {
    let mut s = make_state();
    s.power_ups.push(PowerUp { x: 400.0, y: 60.0, kind: PowerUpKind::Shield });
    s.power_ups.push(PowerUp { x: 400.0, y: 60.0, kind: PowerUpKind::ExtraLife });
    collect_power_up(&mut s, &mut seeded_rng());
    assert_eq!(s.player.shield, 600);
    assert_eq!(s.player.lives, 3);
    assert_eq!(s.power_ups.len(), 1);
    assert_eq!(s.power_ups[0].kind, PowerUpKind::ExtraLife);

    collect_power_up(&mut s, &mut seeded_rng());
    assert_eq!(s.player.lives, 4);
    assert!(s.power_ups.is_empty());
}

#[test]
fn timed_power_ups_last_six_hundred_frames() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    apply_power_up(&mut s, PowerUpKind::Spread, &mut rng);
    apply_power_up(&mut s, PowerUpKind::RapidFire, &mut rng);
    assert_eq!(s.player.spread, 600);
    assert_eq!(s.player.rapid_fire, 600);
    assert!(s.events.contains(&FrameEvent::PowerUpCollected { kind: PowerUpKind::Spread }));
}

#[test]
fn nuke_clears_aliens_and_drifters() {
    let mut s = make_state();
    s.wave = 2;
    for i in 0..3 {
        s.aliens.push(alien(100.0 + 60.0 * i as f32, 400.0, AlienKind::Green));
    }
    s.drifters.push(Drifter { x: 50.0, y: 200.0, vx: 0.0, vy: -1.0 });
    s.drifters.push(Drifter { x: 60.0, y: 200.0, vx: 0.0, vy: -1.0 });
    apply_power_up(&mut s, PowerUpKind::Nuke, &mut seeded_rng());

    assert!(s.aliens.is_empty());
    assert!(s.drifters.is_empty());
    assert_eq!(s.score, 200);
    assert_eq!(s.particles.len(), 5 * 20);
    // Nuke kills don't count toward the streak
    assert_eq!(s.kills, 0);
}

// ── Alien bullets vs player ───────────────────────────────────────────────────

#[test]
fn unshielded_hit_costs_one_life() {
    let mut s = make_state();
    s.alien_bullets.push(Bullet { x: 400.0, y: 60.0 });
    alien_bullets_vs_player(&mut s, &mut seeded_rng());
    assert_eq!(s.player.lives, 2);
    assert_eq!(s.screen_shake, 10);
    assert!(s.alien_bullets.is_empty());
    assert!(s.events.contains(&FrameEvent::PlayerHit { lives_left: 2 }));
}

#[test]
fn every_overlapping_bullet_hurts() {
    let mut s = make_state();
    s.alien_bullets.push(Bullet { x: 395.0, y: 60.0 });
    s.alien_bullets.push(Bullet { x: 405.0, y: 60.0 });
    s.alien_bullets.push(Bullet { x: 100.0, y: 60.0 });
    alien_bullets_vs_player(&mut s, &mut seeded_rng());
    assert_eq!(s.player.lives, 1);
    assert_eq!(s.alien_bullets, vec![Bullet { x: 100.0, y: 60.0 }]);
}

#[test]
fn shield_absorbs_bullets() {
    let mut s = make_state();
    s.player.shield = 100;
    s.alien_bullets.push(Bullet { x: 400.0, y: 60.0 });
    alien_bullets_vs_player(&mut s, &mut seeded_rng());
    assert_eq!(s.player.lives, 3);
    assert!(s.alien_bullets.is_empty());
    assert!(s.events.contains(&FrameEvent::ShieldAbsorbed));
}

#[test]
fn lives_never_go_negative() {
    let mut s = make_state();
    s.player.lives = 1;
    for _ in 0..3 {
        s.alien_bullets.push(Bullet { x: 400.0, y: 60.0 });
    }
    alien_bullets_vs_player(&mut s, &mut seeded_rng());
    assert_eq!(s.player.lives, 0);
}

// ── Contact ───────────────────────────────────────────────────────────────────

#[test]
fn ramming_an_alien_kills_it_and_costs_a_life() {
    let mut s = make_state();
    s.aliens.push(alien(410.0, 70.0, AlienKind::Green));
    player_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert!(s.aliens.is_empty());
    assert_eq!(s.player.lives, 2);
    assert_eq!(s.score, 0);
    assert_eq!(s.kills, 0);
}

#[test]
fn ramming_a_drifter_scores_and_costs_a_life() {
    let mut s = make_state();
    s.drifters.push(Drifter { x: 400.0, y: 60.0, vx: 0.0, vy: -1.0 });
    player_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert!(s.drifters.is_empty());
    assert_eq!(s.player.lives, 2);
    assert_eq!(s.score, 5);
}

#[test]
fn shield_makes_contact_harmless() {
    let mut s = make_state();
    s.player.shield = 50;
    s.aliens.push(alien(400.0, 60.0, AlienKind::Green));
    player_vs_enemies(&mut s, &no_drops(), &mut seeded_rng());
    assert_eq!(s.aliens.len(), 1);
    assert_eq!(s.player.lives, 3);
}

// ── Boss ──────────────────────────────────────────────────────────────────────

fn boss_state() -> GameState {
    let mut s = make_state();
    s.wave = 5;
    s.boss = Some(spawn_boss(5));
    s
}

fn volley_at_boss(s: &mut GameState, n: usize) {
    for _ in 0..n {
        s.player_bullets.push(Bullet { x: 400.0, y: 500.0 });
    }
}

#[test]
fn each_bullet_chips_one_health() {
    let mut s = boss_state();
    volley_at_boss(&mut s, 99);
    player_bullets_vs_boss(&mut s, &mut seeded_rng());
    let boss = s.boss.as_ref().unwrap();
    assert_eq!(boss.health, 1);
    assert!(s.player_bullets.is_empty());
    assert_eq!(s.score, 0);
}

#[test]
fn hundredth_hit_defeats_wave_five_boss() {
    let mut s = boss_state();
    volley_at_boss(&mut s, 99);
    player_bullets_vs_boss(&mut s, &mut seeded_rng());
    volley_at_boss(&mut s, 1);
    player_bullets_vs_boss(&mut s, &mut seeded_rng());

    assert!(s.boss.is_none());
    assert_eq!(s.score, 2500); // 500 * wave 5
    assert_eq!(s.wave, 6);
    assert_eq!(s.aliens.len(), 50);
    assert!(s.events.contains(&FrameEvent::BossDefeated { wave: 5 }));
    assert!(s.events.contains(&FrameEvent::WaveStarted { wave: 6 }));
}

#[test]
fn bullets_after_the_killing_blow_pass_through() {
    let mut s = boss_state();
    volley_at_boss(&mut s, 105);
    player_bullets_vs_boss(&mut s, &mut seeded_rng());
    assert!(s.boss.is_none());
    assert_eq!(s.player_bullets.len(), 5);
}

#[test]
fn boss_ignores_bullets_elsewhere() {
    let mut s = boss_state();
    s.player_bullets.push(Bullet { x: 100.0, y: 500.0 });
    player_bullets_vs_boss(&mut s, &mut seeded_rng());
    assert_eq!(s.boss.as_ref().unwrap().health, 100);
    assert_eq!(s.player_bullets.len(), 1);
}

// ── Full pass ordering ────────────────────────────────────────────────────────

#[test]
fn resolve_collisions_runs_every_pass() {
    let mut s = make_state();
    s.aliens.push(alien(200.0, 300.0, AlienKind::Green));
    s.player_bullets.push(Bullet { x: 200.0, y: 300.0 });
    s.alien_bullets.push(Bullet { x: 400.0, y: 60.0 });
    s.power_ups.push(PowerUp { x: 400.0, y: 60.0, kind: PowerUpKind::Shield });
    resolve_collisions(&mut s, &no_drops(), &mut seeded_rng());

    assert!(s.aliens.is_empty());
    // Shield is collected before alien bullets are checked
    assert_eq!(s.player.lives, 3);
    assert!(s.events.contains(&FrameEvent::ShieldAbsorbed));
}
