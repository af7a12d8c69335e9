use invader_swarm::entities::*;
use invader_swarm::events::{FrameEvent, SoundCue};
use invader_swarm::wave::spawn_boss;

#[test]
fn rects_touching_at_an_edge_do_not_overlap() {
    let a = Rect::centered(0.0, 0.0, (10.0, 10.0));
    let touching = Rect::centered(10.0, 0.0, (10.0, 10.0));
    let inside = Rect::centered(9.9, 0.0, (10.0, 10.0));
    assert!(!a.overlaps(&touching));
    assert!(a.overlaps(&inside));
    assert!(inside.overlaps(&a));
}

#[test]
fn boss_health_ratio_is_clamped() {
    let mut boss = spawn_boss(5);
    assert_eq!(boss.health_ratio(), 1.0);
    boss.health = 50;
    assert_eq!(boss.health_ratio(), 0.5);
    boss.health = -3;
    assert_eq!(boss.health_ratio(), 0.0);
}

#[test]
fn player_reload_depends_on_rapid_fire() {
    let mut p = Player::new(400.0, 60.0, 3);
    assert_eq!(p.reload_time(), 25);
    p.rapid_fire = 1;
    assert_eq!(p.reload_time(), 8);
}

#[test]
fn alien_speed_multipliers() {
    assert_eq!(AlienKind::Green.speed_multiplier(), 1.0);
    assert_eq!(AlienKind::Red.speed_multiplier(), 1.2);
    assert_eq!(AlienKind::Extra.speed_multiplier(), 0.8);
    assert_eq!(AlienKind::Swarm.speed_multiplier(), 1.0);
}

#[test]
fn events_map_to_sound_cues() {
    assert_eq!(FrameEvent::PlayerShot.sound(), Some(SoundCue::Shoot));
    assert_eq!(
        FrameEvent::AlienKilled { kind: AlienKind::Red }.sound(),
        Some(SoundCue::Explosion)
    );
    assert_eq!(FrameEvent::PlayerHit { lives_left: 1 }.sound(), Some(SoundCue::Explosion));
    assert_eq!(FrameEvent::BossSpawned { wave: 5 }.sound(), Some(SoundCue::BossSpawn));
    assert_eq!(FrameEvent::GameOver { score: 0 }.sound(), Some(SoundCue::GameOver));
    assert_eq!(FrameEvent::WaveStarted { wave: 2 }.sound(), None);
    assert_eq!(SoundCue::GameOver.volume(), 0.5);
}

#[test]
fn game_state_clone_is_independent() {
    let original = invader_swarm::compute::init_state(
        &invader_swarm::config::GameConfig::default(),
        invader_swarm::high_scores::HighScores::default(),
    );
    let mut cloned = original.clone();
    cloned.aliens.clear();
    cloned.player.lives = 0;
    assert_eq!(original.aliens.len(), 24);
    assert_eq!(original.player.lives, 3);
}
