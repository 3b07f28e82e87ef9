//! Line-oriented driver: replays intents and frame steps against an engine.
//!
//! ```text
//! # comments and blank lines are ignored
//! left
//! rotate
//! step 36
//! drop
//! print
//! ```
//!
//! `left`, `right`, `rotate` and `drop` (or the intent names `moveLeft`,
//! `moveRight`, `rotateCw`, `softDrop`) apply one intent; `step [n]` runs `n`
//! frames (default 1); `print` emits the current snapshot as one JSON line.

use std::io::Write;

use anyhow::{anyhow, Context, Result};

use crate::core::Engine;
use crate::types::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Step(u32),
    Print,
}

/// Parse a script. Errors name the 1-based line number.
pub fn parse_script(src: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();

    for (idx, raw) in src.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command =
            parse_line(line).with_context(|| format!("script: line {}: {}", idx + 1, line))?;
        commands.push(command);
    }

    Ok(commands)
}

fn parse_line(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let word = parts.next().unwrap_or_default();
    let arg = parts.next();

    if let Some(extra) = parts.next() {
        return Err(anyhow!("unexpected argument: {}", extra));
    }

    let command = match word.to_lowercase().as_str() {
        "left" => Command::Intent(Intent::MoveLeft),
        "right" => Command::Intent(Intent::MoveRight),
        "rotate" => Command::Intent(Intent::RotateCw),
        "drop" => Command::Intent(Intent::SoftDrop),
        "print" => Command::Print,
        "step" => {
            let frames = match arg {
                Some(n) => n
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid frame count: {}", n))?,
                None => 1,
            };
            return Ok(Command::Step(frames));
        }
        other => match Intent::from_str(other) {
            Some(intent) => Command::Intent(intent),
            None => return Err(anyhow!("unknown command: {}", word)),
        },
    };

    if let Some(a) = arg {
        return Err(anyhow!("unexpected argument: {}", a));
    }
    Ok(command)
}

/// Run commands in order, writing a JSON snapshot line for every `print` and
/// one final snapshot line after the last command.
pub fn run_script<W: Write>(engine: &mut Engine, commands: &[Command], out: &mut W) -> Result<()> {
    for command in commands {
        match *command {
            Command::Intent(intent) => {
                engine.apply_intent(intent);
            }
            Command::Step(frames) => {
                for _ in 0..frames {
                    engine.step();
                }
            }
            Command::Print => write_snapshot(engine, out)?,
        }
    }

    write_snapshot(engine, out)
}

fn write_snapshot<W: Write>(engine: &Engine, out: &mut W) -> Result<()> {
    serde_json::to_writer(&mut *out, &engine.snapshot())?;
    writeln!(out)?;
    Ok(())
}
