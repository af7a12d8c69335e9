/// Rendering layer.  All terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable snapshot of the
/// game.  No game logic is performed; this module only maps the 800×600 play
/// field onto the terminal grid and translates entities into glyphs.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use invader_swarm::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use invader_swarm::entities::{AlienKind, PowerUpKind, Tint};
use invader_swarm::snapshot::{BossView, ParticleView, Snapshot};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_SHIELD: Color = Color::Blue;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ALIEN: Color = Color::Magenta;
const C_DRIFTER: Color = Color::Magenta;
const C_BOSS: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Frames per HUD second.
const FPS: u32 = 60;

// ── Field mapping ─────────────────────────────────────────────────────────────

/// The play field occupies columns 1..width-1 and rows 2..height-2.
struct Viewport {
    width: u16,
    height: u16,
    shake: i32,
}

impl Viewport {
    fn cols(&self) -> f32 {
        self.width.saturating_sub(2) as f32
    }

    fn rows(&self) -> f32 {
        self.height.saturating_sub(4) as f32
    }

    /// Terminal cell for a field position, or `None` outside the field.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(0.0..=SCREEN_WIDTH).contains(&x) || !(0.0..=SCREEN_HEIGHT).contains(&y) {
            return None;
        }
        let col = 1 + (x / SCREEN_WIDTH * (self.cols() - 1.0)).round() as i32 + self.shake;
        let row = 2 + ((1.0 - y / SCREEN_HEIGHT) * (self.rows() - 1.0)).round() as i32;
        let max_col = self.width as i32 - 2;
        let max_row = self.height as i32 - 3;
        if col < 1 || col > max_col || row < 2 || row > max_row {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Cell for a glyph `len` columns wide centred on `(x, y)`.
    fn centered(&self, x: f32, y: f32, len: u16) -> Option<(u16, u16)> {
        let (col, row) = self.cell(x, y)?;
        let left = col.saturating_sub(len / 2).max(1);
        if left + len > self.width.saturating_sub(1) {
            return None;
        }
        Some((left, row))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    snap: &Snapshot,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let shake = match snap.screen_shake {
        0 => 0,
        n if n % 2 == 0 => 1,
        _ => -1,
    };
    let view = Viewport { width, height, shake };

    draw_border(out, &view)?;
    draw_hud(out, snap, &view)?;
    draw_high_scores(out, snap, &view)?;

    for particle in &snap.particles {
        draw_particle(out, &view, particle)?;
    }
    for &(x, y, kind) in &snap.aliens {
        draw_alien(out, &view, x, y, kind)?;
    }
    for &(x, y) in &snap.drifters {
        put(out, &view, x, y, "•", C_DRIFTER)?;
    }
    if let Some(boss) = &snap.boss {
        draw_boss(out, &view, boss)?;
    }
    for &(x, y, kind) in &snap.power_ups {
        draw_power_up(out, &view, x, y, kind)?;
    }
    for b in &snap.player_bullets {
        put(out, &view, b.x, b.y, "║", C_BULLET_PLAYER)?;
    }
    for b in &snap.alien_bullets {
        put(out, &view, b.x, b.y, "↓", C_BULLET_ALIEN)?;
    }

    draw_player(out, snap, &view)?;
    draw_controls_hint(out, &view)?;

    if snap.is_paused() {
        draw_pause(out, &view)?;
    }
    if snap.is_game_over() {
        draw_game_over(out, snap, &view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn put<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: f32,
    y: f32,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.centered(x, y, glyph.chars().count() as u16) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    // Score, wave and multiplier, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>7}  Wave:{:>3}  x{}",
        snap.score, snap.wave, snap.multiplier
    )))?;

    // Active buffs + lives, right-aligned
    let mut buffs = String::new();
    for (label, frames) in [
        ("SHIELD", snap.player.shield),
        ("SPREAD", snap.player.spread),
        ("RAPID", snap.player.rapid_fire),
    ] {
        if frames > 0 {
            buffs.push_str(&format!("[{} {:>2}s] ", label, frames / FPS));
        }
    }
    let lives_str = format!("Lives:{}", "♥".repeat(snap.lives.min(10) as usize));
    let right_len = (buffs.chars().count() + lives_str.chars().count()) as u16;
    out.queue(cursor::MoveTo(view.width.saturating_sub(right_len + 1), 0))?;
    if !buffs.is_empty() {
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&buffs))?;
    }
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

/// Non-zero entries only, top-right corner of the field.
fn draw_high_scores<W: Write>(
    out: &mut W,
    snap: &Snapshot,
    view: &Viewport,
) -> std::io::Result<()> {
    let col = view.width.saturating_sub(14);
    let best = snap.high_scores[0];
    for (i, &score) in snap.high_scores.iter().enumerate().filter(|&(_, &s)| s > 0) {
        out.queue(cursor::MoveTo(col, 2 + i as u16))?;
        let color = if score == best { Color::Yellow } else { C_HINT };
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(format!("{}. {:>8}", i + 1, score)))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← row y      (tip)
    //  /█\      ← row y+1    (fuselage + wings)
    let p = &snap.player;
    let Some((col, row)) = view.cell(p.x, p.y) else {
        return Ok(());
    };
    let color = if p.shield > 0 { C_SHIELD } else { C_PLAYER };
    out.queue(style::SetForegroundColor(color))?;

    out.queue(cursor::MoveTo(col, row.saturating_sub(1)))?;
    out.queue(Print("▲"))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(Print(if p.shield > 0 { "(█)" } else { "/█\\" }))?;

    Ok(())
}

fn draw_alien<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: f32,
    y: f32,
    kind: AlienKind,
) -> std::io::Result<()> {
    let (glyph, color) = match kind {
        AlienKind::Green => ("«▼»", Color::Green),
        AlienKind::Red => ("(◎)", Color::Red),
        AlienKind::Extra => ("<$>", Color::Yellow),
        AlienKind::Swarm => ("{*}", Color::Magenta),
    };
    put(out, view, x, y, glyph, color)
}

/// Hull plus a health bar pinned under the top border.
fn draw_boss<W: Write>(out: &mut W, view: &Viewport, boss: &BossView) -> std::io::Result<()> {
    put(out, view, boss.x, boss.y + boss.size / 4.0, "╔═▀▀▀═╗", C_BOSS)?;
    put(out, view, boss.x, boss.y, "║ ◉ ◉ ║", C_BOSS)?;
    put(out, view, boss.x, boss.y - boss.size / 4.0, "╚╦═╦═╦╝", C_BOSS)?;

    let bar_width = 20usize;
    let filled = (boss.health_ratio * bar_width as f32).round() as usize;
    let bar = format!(
        "BOSS [{}{}] {}",
        "█".repeat(filled),
        "·".repeat(bar_width - filled.min(bar_width)),
        boss.health
    );
    let col = (view.width / 2).saturating_sub(bar.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, 2))?;
    out.queue(style::SetForegroundColor(C_BOSS))?;
    out.queue(Print(bar))?;
    Ok(())
}

/// Symbols:
///   S  (blue)    Shield
///   ♥  (green)   ExtraLife
///   ★  (yellow)  Spread
///   ☢  (red)     Nuke
///   !  (cyan)    RapidFire
fn draw_power_up<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: f32,
    y: f32,
    kind: PowerUpKind,
) -> std::io::Result<()> {
    let (glyph, color) = match kind {
        PowerUpKind::Shield => ("S", Color::Blue),
        PowerUpKind::ExtraLife => ("♥", Color::Green),
        PowerUpKind::Spread => ("★", Color::Yellow),
        PowerUpKind::Nuke => ("☢", Color::Red),
        PowerUpKind::RapidFire => ("!", Color::Cyan),
    };
    put(out, view, x, y, glyph, color)
}

fn draw_particle<W: Write>(out: &mut W, view: &Viewport, p: &ParticleView) -> std::io::Result<()> {
    let color = match p.tint {
        Tint::Orange => Color::DarkYellow,
        Tint::Red => Color::Red,
        Tint::Blue => Color::Blue,
        Tint::Purple => Color::DarkMagenta,
        Tint::Gold => Color::Yellow,
    };
    put(out, view, p.x, p.y, if p.fade > 0.5 { "*" } else { "·" }, color)
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑↓→ / WASD : Move   SPACE : Shoot   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn centered_line<W: Write>(
    out: &mut W,
    view: &Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_pause<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let mid = view.height / 2;
    centered_line(out, view, mid.saturating_sub(1), "P A U S E D", Color::White)?;
    centered_line(out, view, mid + 1, "Press P to Resume", Color::White)
}

fn draw_game_over<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    let best = snap.high_scores[0];
    let new_best = snap.score > 0 && snap.score >= best;
    let lines: [(String, Color); 6] = [
        ("╔════════════════════╗".to_string(), Color::Red),
        ("║    GAME  OVER      ║".to_string(), Color::Red),
        ("╚════════════════════╝".to_string(), Color::Red),
        (format!("Final Score: {:>7}   Wave: {}", snap.score, snap.wave), Color::Yellow),
        (
            if new_best {
                format!("★ NEW BEST: {:>7} ★", best)
            } else {
                format!("Best Score:  {:>7}", best)
            },
            if new_best { Color::Yellow } else { C_HINT },
        ),
        ("R - Play Again  Q - Quit".to_string(), Color::White),
    ];

    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (text, color)) in lines.iter().enumerate() {
        centered_line(out, view, start_row + i as u16, text, *color)?;
    }
    Ok(())
}
