//! Terminal runner (default binary).
//!
//! Polls keys until the next tick deadline, feeds one queued event per tick
//! into the core, and draws the snapshot with the framebuffer renderer.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{tick_into, GameSession, RenderSnapshot};
use blockfall::input::{is_restart, map_key_event, should_exit, EventQueue};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{InputEvent, DEFAULT_TICK_MS};

const FLASH_FRAMES: u32 = 3;
const FLASH_FRAME: Duration = Duration::from_millis(60);

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the shape sequence (random when omitted).
    #[arg(short, long)]
    seed: Option<u32>,

    /// Milliseconds per game tick.
    #[arg(short, long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,
}

/// Final numbers printed after the terminal is restored.
struct Summary {
    score: u32,
    level: u32,
    lines: u32,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score {}  level {}  lines {}",
            self.score, self.level, self.lines
        )
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();

    println!("{}", result?);
    Ok(())
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<Summary> {
    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut session = GameSession::with_seed(seed);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = RenderSnapshot::default();
    session.snapshot_into(&mut snap);
    let mut queue: EventQueue = EventQueue::new();

    let tick_duration = Duration::from_millis(args.tick_ms.max(1));
    let mut next_tick = Instant::now() + tick_duration;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the tick deadline.
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_exit(key) {
                        return Ok(summary(&session));
                    }
                    if session.is_game_over() {
                        if is_restart(key) {
                            session.restart();
                            queue.clear();
                        } else if map_key_event(key) == Some(InputEvent::Quit) {
                            return Ok(summary(&session));
                        }
                        continue;
                    }
                    if let Some(ev) = map_key_event(key) {
                        queue.push(ev);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        next_tick += tick_duration;
        if next_tick < now {
            // Fell behind (suspended terminal, slow redraw): don't replay missed ticks.
            next_tick = now + tick_duration;
        }

        tick_into(&mut session, queue.pop(), &mut snap);

        if let Some(lock) = session.take_last_lock() {
            if !lock.cleared_rows.is_empty() {
                flash_rows(term, &view, &snap, &mut fb, &lock.cleared_rows)?;
                // The blink holds the game still.
                next_tick = Instant::now() + tick_duration;
            }
        }
    }
}

/// Blink cleared rows white and dark gray before the collapsed board shows.
fn flash_rows(
    term: &mut TerminalRenderer,
    view: &GameView,
    snap: &RenderSnapshot,
    fb: &mut FrameBuffer,
    rows: &[u8],
) -> Result<()> {
    for frame in 0..FLASH_FRAMES {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(snap, viewport, fb);
        view.draw_row_flash(fb, viewport, rows, frame % 2 == 0);
        term.draw_swap(fb)?;
        thread::sleep(FLASH_FRAME);
    }
    Ok(())
}

fn summary(session: &GameSession) -> Summary {
    Summary {
        score: session.score(),
        level: session.level(),
        lines: session.lines(),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
