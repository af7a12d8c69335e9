/// All game entity types.  Plain data plus bounding boxes; behaviour lives
/// in `movement`, `collision` and `compute`.

use crate::constants::{
    ALIEN_SIZE, DRIFTER_SIZE, PLAYER_SIZE, POWERUP_SIZE, RAPID_SHOOT_COOLDOWN, SHOOT_COOLDOWN,
};
use crate::events::FrameEvent;
use crate::high_scores::HighScores;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned box, y growing upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Rect {
    pub fn centered(x: f32, y: f32, (w, h): (f32, f32)) -> Self {
        Rect {
            left: x - w / 2.0,
            right: x + w / 2.0,
            bottom: y - h / 2.0,
            top: y + h / 2.0,
        }
    }

    /// Strict overlap: boxes that only touch along an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.bottom < other.top
            && self.top > other.bottom
    }
}

// ── Kinds ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlienKind {
    Green,
    Red,
    /// Worth a bonus and always rolls for a power-up.
    Extra,
    /// Splits into two drifters when destroyed.
    Swarm,
}

impl AlienKind {
    /// Row `r` of a grid gets `ROW_CYCLE[r % 4]`.
    pub const ROW_CYCLE: [AlienKind; 4] =
        [AlienKind::Green, AlienKind::Red, AlienKind::Extra, AlienKind::Swarm];

    pub fn speed_multiplier(self) -> f32 {
        match self {
            AlienKind::Red => 1.2,
            AlienKind::Extra => 0.8,
            AlienKind::Green | AlienKind::Swarm => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Shield,
    ExtraLife,
    Spread,
    Nuke,
    RapidFire,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::Shield,
        PowerUpKind::ExtraLife,
        PowerUpKind::Spread,
        PowerUpKind::Nuke,
        PowerUpKind::RapidFire,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PowerUpKind::Shield => "shield",
            PowerUpKind::ExtraLife => "extralife",
            PowerUpKind::Spread => "spread",
            PowerUpKind::Nuke => "nuke",
            PowerUpKind::RapidFire => "rapidfire",
        }
    }
}

/// Particle colour; the renderer picks the actual palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Orange,
    Red,
    Blue,
    Purple,
    Gold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Buff fields hold the frames remaining; a buff is active while non-zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub lives: u32,
    pub shield: u32,
    pub spread: u32,
    pub rapid_fire: u32,
    pub shoot_cooldown: u32,
}

impl Player {
    pub fn new(x: f32, y: f32, lives: u32) -> Self {
        Player {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            lives,
            shield: 0,
            spread: 0,
            rapid_fire: 0,
            shoot_cooldown: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, PLAYER_SIZE)
    }

    pub fn shielded(&self) -> bool {
        self.shield > 0
    }

    pub fn spread_active(&self) -> bool {
        self.spread > 0
    }

    pub fn rapid_fire_active(&self) -> bool {
        self.rapid_fire > 0
    }

    /// Frames to wait after a shot.
    pub fn reload_time(&self) -> u32 {
        if self.rapid_fire_active() {
            RAPID_SHOOT_COOLDOWN
        } else {
            SHOOT_COOLDOWN
        }
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub kind: AlienKind,
}

impl Alien {
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, ALIEN_SIZE)
    }
}

/// Fragment of a swarm alien; ignores the grid direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Drifter {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Drifter {
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, DRIFTER_SIZE)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    /// Side length of the square hit box.
    pub size: f32,
    pub health: i32,
    pub max_health: i32,
    /// Last attack pattern fired: 0 single, 1 fan, 2 triple.
    pub pattern: u8,
    pub shot_timer: u32,
}

impl Boss {
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, (self.size, self.size))
    }

    /// Remaining health in `[0, 1]` for the health bar.
    pub fn health_ratio(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health.max(0) as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }
}

// ── Projectiles & pickups ────────────────────────────────────────────────────

/// Bullets carry no owner tag: player and alien bullets live in separate lists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
}

impl Bullet {
    pub fn bounds(&self, size: (f32, f32)) -> Rect {
        Rect::centered(self.x, self.y, size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, POWERUP_SIZE)
    }
}

/// Cosmetic only.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub tint: Tint,
    pub age: u32,
}

// ── Master game state ────────────────────────────────────────────────────────

/// The single aggregate every system mutates, in a fixed order, once per frame.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub aliens: Vec<Alien>,
    pub drifters: Vec<Drifter>,
    pub boss: Option<Boss>,
    /// Spawn order is preserved; removal is mark-then-compact.
    pub player_bullets: Vec<Bullet>,
    pub alien_bullets: Vec<Bullet>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub score: u64,
    pub wave: u32,
    pub kills: u32,
    pub kills_since_reset: u32,
    pub multiplier: u32,
    pub multiplier_timer: u32,
    /// +1.0 moving right, -1.0 moving left.
    pub alien_direction: f32,
    pub alien_shoot_timer: u32,
    pub screen_shake: u32,
    pub status: GameStatus,
    pub high_scores: HighScores,
    pub frame: u64,
    /// Events raised during the current frame; drained by the controller.
    pub events: Vec<FrameEvent>,
}

impl GameState {
    pub fn is_boss_wave(&self) -> bool {
        self.boss.is_some()
    }
}
