use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::filter::EnvFilter;

use spacek::audio::Audio;
use spacek::compute::{
    is_jump, key_down, key_up, mouse_down, mouse_move, new_world, tick, toggle_audio,
};
use spacek::config::Args;
use spacek::display::{self, terminal::TerminalCanvas};
use spacek::entities::{Command, GameWorld, Key};

// ── Key mapping ───────────────────────────────────────────────────────────────

fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => Key::A,
            'd' => Key::D,
            'w' => Key::W,
            'x' => Key::X,
            'm' => Key::M,
            't' => Key::T,
            ' ' => Key::Space,
            _ => return None,
        },
        _ => return None,
    };
    Some(key)
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fixed-step loop: drain input, tick, play cues, draw, sleep.
///
/// Input model: `held` records the frame each movement key was last seen.
/// Terminals with keyboard enhancement (kitty protocol, Ghostty, ...)
/// report releases and keys leave the map on `Release`.  Classic terminals
/// only send repeated presses, so a key that goes quiet for longer than
/// the hold window gets a synthesised release.
fn game_loop<W: Write>(
    out: &mut W,
    world: &mut GameWorld,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    audio: &Audio,
    args: &Args,
    keyboard_enhanced: bool,
) -> Result<()> {
    let frame_time: Duration = args.frame_duration();
    let window = args.hold_frames();
    let (cols, rows) = terminal::size().context("cannot query terminal size")?;
    let mut canvas = TerminalCanvas::new(cols, rows);
    let mut held: HashMap<Key, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
                    if code == KeyCode::Char('c')
                        && modifiers.contains(KeyModifiers::CONTROL)
                        && kind != KeyEventKind::Release
                    {
                        info!("interrupted");
                        return Ok(());
                    }
                    let Some(key) = map_key(code) else { continue };
                    match kind {
                        KeyEventKind::Press => {
                            held.insert(key, frame);
                            if key_down(world, key, rng) == Some(Command::Quit) {
                                return Ok(());
                            }
                        }
                        // Held jump keeps the jetpack burning.
                        KeyEventKind::Repeat => {
                            held.insert(key, frame);
                            if is_jump(key) {
                                key_down(world, key, rng);
                            }
                        }
                        KeyEventKind::Release => {
                            held.remove(&key);
                            key_up(world, key);
                        }
                    }
                }
                Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                    let (x, y) = canvas.cell_to_world(column, row);
                    match kind {
                        MouseEventKind::Moved | MouseEventKind::Drag(_) => mouse_move(world, x, y),
                        MouseEventKind::Down(MouseButton::Left) => {
                            mouse_move(world, x, y);
                            if mouse_down(world, x, y, rng) == Some(Command::Quit) {
                                return Ok(());
                            }
                        }
                        _ => {}
                    }
                }
                Event::Resize(cols, rows) => canvas = TerminalCanvas::new(cols, rows),
                _ => {}
            }
        }

        if !keyboard_enhanced {
            let expired: Vec<Key> = held
                .iter()
                .filter(|&(_, &last)| frame.saturating_sub(last) > window)
                .map(|(&key, _)| key)
                .collect();
            for key in expired {
                held.remove(&key);
                key_up(world, key);
            }
        }

        tick(world, rng);

        let cues = std::mem::take(&mut world.sounds);
        audio.play_all(out, &cues).context("cannot play sounds")?;

        display::draw(world, &mut canvas);
        canvas.flush(out).context("cannot draw frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;
    info!(
        variant = ?args.variant,
        seed = ?args.seed,
        fps = args.fps,
        sounds_dir = %args.sounds_dir.display(),
        mute = args.mute,
        "starting spacek"
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let audio = if args.mute {
        Audio::muted()
    } else {
        Audio::load(&args.sounds_dir)
    };
    let mut world = new_world(args.variant.into(), &mut rng);
    if args.mute {
        toggle_audio(&mut world);
    }

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("cannot enable raw mode")?;
    let setup = out
        .execute(terminal::EnterAlternateScreen)
        .and_then(|o| o.execute(cursor::Hide))
        .and_then(|o| o.execute(EnableMouseCapture))
        .map(|_| ());

    // Ask for key-release events; terminals without the protocol fall
    // back to the hold-window expiry in the game loop.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!(keyboard_enhanced, "terminal ready");

    // Dedicate a thread to blocking event reads so the game loop never
    // blocks on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = setup
        .context("cannot set up terminal")
        .and_then(|()| {
            game_loop(&mut out, &mut world, &rx, &mut rng, &audio, &args, keyboard_enhanced)
        });

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(()) => info!(high_score = world.high_score, "bye"),
        Err(err) => warn!(%err, "exiting with error"),
    }
    result
}
