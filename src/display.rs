/// Terminal renderer for the playfield, HUD and overlays.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state. No game logic is performed; this module only scales the
/// logical playfield onto the terminal grid and emits terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use galaga::enemy::EnemyAgent;
use galaga::entities::{CountdownKind, EnemyState, GameState, GameStatus, Position};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::White;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY_ENTERING: Color = Color::Cyan;
const C_ENEMY_FORMATION: Color = Color::Green;
const C_ENEMY_DIVING: Color = Color::Red;
const C_SHOT: Color = Color::Yellow;
const C_BANNER: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Terminal view of the playfield: rows 2..height-2, columns 1..width-1.
struct Viewport {
    width: u16,
    height: u16,
    field_w: f32,
    field_h: f32,
}

impl Viewport {
    fn new(state: &GameState, width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            field_w: state.tuning.playfield.width,
            field_h: state.tuning.playfield.height,
        }
    }

    /// Terminal cell for a playfield point, or `None` when it is off-screen.
    fn cell(&self, pos: Position) -> Option<(u16, u16)> {
        if pos.x < 0.0 || pos.y < 0.0 || pos.x >= self.field_w || pos.y >= self.field_h {
            return None;
        }
        let inner_w = self.width.saturating_sub(2) as f32;
        let inner_h = self.height.saturating_sub(4) as f32;
        let col = 1 + (pos.x / self.field_w * inner_w) as u16;
        let row = 2 + (pos.y / self.field_h * inner_h) as u16;
        Some((col, row))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(state, width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, state, &view)?;

    for enemy in state.live_enemies() {
        draw_enemy(out, enemy, &view)?;
    }

    let ship_destroyed = matches!(
        state.countdown.map(|c| c.kind),
        Some(CountdownKind::Respawn)
    );
    if !ship_destroyed && state.status == GameStatus::Playing {
        draw_player(out, state, &view)?;
    }

    draw_banner(out, state, &view)?;
    draw_controls_hint(out, &view)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, &view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
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

fn draw_hud<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>8}", state.score)))?;

    let level_str = format!("[ LEVEL {} ]", state.level);
    let lx = (view.width / 2).saturating_sub(level_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    let hearts: String = "♥".repeat(state.lives as usize);
    let lives_text = format!("Lives: {}", hearts);
    let rx = view
        .width
        .saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    //   /▲\     ← ship, centred on its column
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    if let Some((col, row)) = view.cell(state.player.pos) {
        out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
        out.queue(Print("/▲\\"))?;
    }

    if let Some(shot) = &state.player.projectile {
        if let Some((col, row)) = view.cell(shot.pos) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(C_SHOT))?;
            out.queue(Print("║"))?;
        }
    }

    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &EnemyAgent, view: &Viewport) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(enemy.pos) else {
        return Ok(());
    };
    let (sprite, color) = match enemy.state {
        EnemyState::Entering => ("<◊>", C_ENEMY_ENTERING),
        EnemyState::Formation => ("«▼»", C_ENEMY_FORMATION),
        EnemyState::Diving => ("(◎)", C_ENEMY_DIVING),
    };
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(sprite))?;
    Ok(())
}

// ── Banners ───────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let text = if !state.intro.done {
        "READY".to_string()
    } else {
        match state.countdown {
            Some(c) if c.kind == CountdownKind::NextWave => format!("STAGE {}", state.level),
            Some(_) => "GET READY".to_string(),
            None => return Ok(()),
        }
    };
    let col = (view.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, view.height / 2))?;
    out.queue(style::SetForegroundColor(C_BANNER))?;
    out.queue(Print(&text))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("R - Restart  Q - Quit", Color::White),
    ];

    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
