/// Tuning constants shared by every system.  All distances are logical
/// pixels on an 800×600 field with y growing upward; all durations are frames.

// ── Field ────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Aliens whose bottom edge reaches this line end the game.
pub const INVASION_LINE: f32 = 50.0;

/// Bullets may travel this far past the field before they are discarded.
pub const OFFSCREEN_MARGIN: f32 = 50.0;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_START_X: f32 = SCREEN_WIDTH / 2.0;
pub const PLAYER_START_Y: f32 = 60.0;
pub const PLAYER_SIZE: (f32, f32) = (50.0, 40.0);
pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_MIN_X: f32 = 25.0;
pub const PLAYER_MAX_X: f32 = SCREEN_WIDTH - 25.0;
pub const PLAYER_MIN_Y: f32 = 50.0;
pub const PLAYER_MAX_Y: f32 = SCREEN_HEIGHT - 50.0;

pub const SHOOT_COOLDOWN: u32 = 25;
pub const RAPID_SHOOT_COOLDOWN: u32 = 8;
pub const MUZZLE_OFFSET: f32 = 20.0;
pub const SPREAD_OFFSET: f32 = 15.0;

// ── Bullets ──────────────────────────────────────────────────────────────────

pub const BULLET_SPEED: f32 = 7.0;
pub const ALIEN_BULLET_SPEED: f32 = 4.0;
pub const PLAYER_BULLET_SIZE: (f32, f32) = (5.0, 15.0);
pub const ALIEN_BULLET_SIZE: (f32, f32) = (6.0, 16.0);

// ── Aliens & drifters ────────────────────────────────────────────────────────

pub const ALIEN_SIZE: (f32, f32) = (40.0, 30.0);
pub const ALIEN_SPEED_BASE: f32 = 1.2;
pub const ALIEN_SPEED_PER_WAVE: f32 = 0.3;
pub const ALIEN_DROP_BASE: f32 = 25.0;
pub const ALIEN_DROP_PER_WAVE: f32 = 2.0;
pub const GRID_ORIGIN_X: f32 = 40.0;
pub const GRID_TOP_Y: f32 = SCREEN_HEIGHT - 80.0;
pub const GRID_COL_SPACING: f32 = 65.0;
pub const GRID_ROW_SPACING: f32 = 35.0;
pub const MAX_GRID_ROWS: u32 = 5;
pub const MAX_GRID_COLS: u32 = 11;
pub const ALIEN_MUZZLE_OFFSET: f32 = 15.0;
pub const RED_BURST_OFFSETS: [f32; 3] = [-10.0, 0.0, 10.0];

pub const DRIFTER_SIZE: (f32, f32) = (20.0, 15.0);
pub const DRIFTERS_PER_SWARM: usize = 2;
pub const DRIFTER_SCATTER: (f32, f32) = (20.0, 10.0);

// ── Boss ─────────────────────────────────────────────────────────────────────

pub const BOSS_WAVE_INTERVAL: u32 = 5;
pub const BOSS_BASE_SIZE: f32 = 80.0;
pub const BOSS_START_Y: f32 = SCREEN_HEIGHT - 100.0;
pub const BOSS_PATROL_SPEED: f32 = 2.0;
pub const BOSS_PATROL_INSET: f32 = 100.0;
pub const BOSS_SHOT_DELAY: u32 = 30;
pub const BOSS_MUZZLE_OFFSET: f32 = 30.0;
pub const BOSS_TRIPLE_OFFSETS: [f32; 3] = [-20.0, 0.0, 20.0];

// ── Power-ups ────────────────────────────────────────────────────────────────

pub const POWERUP_SIZE: (f32, f32) = (30.0, 30.0);
pub const POWERUP_FALL_SPEED: f32 = 2.0;
pub const BUFF_DURATION: u32 = 600;
pub const STREAK_RAPID_DURATION: u32 = 300;
pub const STREAK_RAPID_KILLS: u32 = 20;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const MAX_MULTIPLIER: u32 = 4;
pub const KILLS_PER_MULTIPLIER: u32 = 10;
pub const MULTIPLIER_WINDOW: u32 = 180;

// ── Effects ──────────────────────────────────────────────────────────────────

pub const SCREEN_SHAKE_FRAMES: u32 = 10;
pub const PARTICLES_PER_EXPLOSION: usize = 20;
pub const PARTICLE_LIFETIME: u32 = 30;
pub const PARTICLE_SPEED: f32 = 3.0;
pub const PARTICLE_GRAVITY: f32 = 0.2;

pub const HIGH_SCORE_SLOTS: usize = 5;
