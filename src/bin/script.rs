//! Scripted driver: reads commands from a file (or stdin) and prints JSON
//! snapshots.
//!
//! Usage: `frame-tetris-script [--seed <u64>] [script-file]` (flags and the
//! path may come in any order)

use std::io::{self, Read};

use anyhow::{Context, Result};

use frame_tetris::config::{parse_run_args, split_positional};
use frame_tetris::script::{parse_script, run_script};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (flags, path) = split_positional(&args)?;
    let config = parse_run_args(&flags)?;

    let src = match &path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("script: reading {}", p))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let commands = parse_script(&src)?;
    let mut engine = config.new_engine();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&mut engine, &commands, &mut out)
}
