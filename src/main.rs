//! Terminal Tetris runner (default binary).
//!
//! Drives the engine from a fixed frame clock: one `step` per frame, plus one
//! intent per decoded key press. Rendering goes through the framebuffer view
//! in `frame_tetris::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use frame_tetris::config::{parse_run_args, RunConfig};
use frame_tetris::input::{handle_key_event, is_restart, should_quit};
use frame_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_run_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut engine = config.new_engine();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(config.frame_ms);
    let mut next_frame = Instant::now() + frame;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&engine.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the next frame boundary.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        engine = config.new_engine();
                        next_frame = Instant::now() + frame;
                        continue;
                    }
                    if let Some(intent) = handle_key_event(key) {
                        engine.apply_intent(intent);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if Instant::now() >= next_frame {
            next_frame += frame;
            // The clock stops driving a finished game; the overlay stays up.
            if !engine.game_over() {
                engine.step();
            }
        }
    }
}
