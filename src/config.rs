//! Command-line configuration shared by the binaries.

use anyhow::{anyhow, Result};

use crate::core::Engine;
use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Fixed bag seed; `None` seeds from the operating system
    pub seed: Option<u64>,
    /// Milliseconds between `step` calls in the terminal runner
    pub frame_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS,
        }
    }
}

impl RunConfig {
    /// A fresh engine for this configuration
    pub fn new_engine(&self) -> Engine {
        match self.seed {
            Some(seed) => Engine::new(seed),
            None => Engine::from_entropy(),
        }
    }
}

/// Parse `--seed <u64>` and `--frame-ms <u64>` (argv without the program name).
pub fn parse_run_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                config.seed = Some(parse_u64(args.get(i), "--seed")?);
            }
            "--frame-ms" => {
                i += 1;
                let ms = parse_u64(args.get(i), "--frame-ms")?;
                if ms == 0 {
                    return Err(anyhow!("config: --frame-ms must be positive"));
                }
                config.frame_ms = ms;
            }
            other => {
                return Err(anyhow!("config: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Split out a single positional argument (the script path) from the flags.
///
/// The path may appear anywhere; tokens that follow a value-taking flag are
/// left to [`parse_run_args`].
pub fn split_positional(args: &[String]) -> Result<(Vec<String>, Option<String>)> {
    let mut flags = Vec::with_capacity(args.len());
    let mut positional = None;
    let mut expects_value = false;

    for arg in args {
        if expects_value {
            expects_value = false;
            flags.push(arg.clone());
        } else if arg.starts_with("--") {
            expects_value = VALUE_FLAGS.contains(&arg.as_str());
            flags.push(arg.clone());
        } else if positional.is_none() {
            positional = Some(arg.clone());
        } else {
            return Err(anyhow!("config: unexpected argument: {}", arg));
        }
    }

    Ok((flags, positional))
}

const VALUE_FLAGS: [&str; 2] = ["--seed", "--frame-ms"];

fn parse_u64(value: Option<&String>, flag: &str) -> Result<u64> {
    let v = value.ok_or_else(|| anyhow!("config: missing value for {}", flag))?;
    v.parse::<u64>()
        .map_err(|_| anyhow!("config: invalid {} value: {}", flag, v))
}
