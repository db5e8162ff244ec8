mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, IsTerminal, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use galaga::audio::{AudioSink, Bell, Muted};
use galaga::compute::{init_state, player_shoot, restart, steer, tick};
use galaga::config::{self, Settings, FRAME};
use galaga::entities::{GameStatus, Steer};

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// at 60 FPS, 8 frames (≈133 ms) outlasts the OS key-repeat interval.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the renderer, so logs go to a file.
fn init_logging() -> galaga::Result<()> {
    let file = File::create(config::log_path())?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let _ = terminal::disable_raw_mode();
        let _ = stdout().execute(terminal::LeaveAlternateScreen);
        let backtrace = std::backtrace::Backtrace::capture();
        error!(%info, ?backtrace, "panic");
    }));
    Ok(())
}

fn audio_sink(settings: &Settings) -> Box<dyn AudioSink> {
    if !settings.audio.enabled {
        info!("audio disabled by settings");
        return Box::new(Muted);
    }
    if !stdout().is_terminal() {
        warn!("stdout is not a terminal, sound disabled");
        return Box::new(Muted);
    }
    Box::new(Bell::new(stdout()))
}

// ── Title ─────────────────────────────────────────────────────────────────────

enum TitleResult {
    Start,
    Quit,
}

fn show_title<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<TitleResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let lines: &[(&str, Color, u16)] = &[
        ("★  G A L A G A  ★", Color::Green, cy.saturating_sub(4)),
        ("> 1 PLAYER", Color::White, cy),
        ("(Press Enter to Start)", Color::DarkGrey, cy + 2),
        ("← → / A D : Move   SPACE : Shoot   Q : Quit", Color::DarkGrey, cy + 4),
    ];
    for (text, color, row) in lines {
        out.queue(cursor::MoveTo(
            cx.saturating_sub(text.chars().count() as u16 / 2),
            *row,
        ))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Enter | KeyCode::Char('1') => return Ok(TitleResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(TitleResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Held keys are tracked in `key_frame` (frame of the last press/repeat) so
/// steering and firing can overlap. Terminals with keyboard enhancement send
/// proper releases; classic ones rely on the key expiring after
/// `HOLD_WINDOW` frames of silence.
fn game_loop<W: Write>(
    out: &mut W,
    settings: &Settings,
    audio: &mut dyn AudioSink,
    rx: &mpsc::Receiver<Event>,
) -> galaga::Result<()> {
    audio.start_soundtrack(settings.audio.soundtrack.as_deref())?;

    let mut rng = thread_rng();
    let mut state = init_state(settings.tuning);
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    // Not `state.frame`: that one stops during game over and resets on restart.
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let mut fire = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => state = restart(&state),
                        KeyCode::Char(' ') | KeyCode::Enter => fire = true,
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Apply held-key actions every frame ────────────────────────────────
        let left = is_held(&key_frame, &KeyCode::Left, frame)
            || is_held(&key_frame, &KeyCode::Char('a'), frame)
            || is_held(&key_frame, &KeyCode::Char('A'), frame);
        let right = is_held(&key_frame, &KeyCode::Right, frame)
            || is_held(&key_frame, &KeyCode::Char('d'), frame)
            || is_held(&key_frame, &KeyCode::Char('D'), frame);
        let direction = match (left, right) {
            (true, false) => Steer::Left,
            (false, true) => Steer::Right,
            _ => Steer::Idle,
        };

        state = steer(&state, direction);
        if fire {
            state = player_shoot(&state);
        }
        if state.status == GameStatus::Playing {
            state = tick(&state, &mut rng);
        }

        let events = std::mem::take(&mut state.events);
        audio.play_events(&events);

        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> galaga::Result<()> {
    // Settings errors are reported before the terminal is taken over.
    let settings_path = config::settings_path(std::env::args().nth(1));
    let settings = config::load_settings(settings_path.as_deref())?;
    init_logging()?;
    info!(?settings_path, "starting");

    let mut audio = audio_sink(&settings);
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &settings, audio.as_mut(), &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        error!(error = %e, "aborting");
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    settings: &Settings,
    audio: &mut dyn AudioSink,
    rx: &mpsc::Receiver<Event>,
) -> galaga::Result<()> {
    match show_title(out, rx)? {
        TitleResult::Quit => Ok(()),
        TitleResult::Start => game_loop(out, settings, audio, rx),
    }
}
