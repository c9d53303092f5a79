//! Command-line configuration for the `fruit-rage` binary.
//!
//! Every flag can also come from a `FRUIT_*` environment variable; the flag
//! wins when both are set.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "fruit-rage")]
#[command(about = "Chooses one move for a fruit-rage position")]
#[command(
    long_about = "Reads the board, player count and remaining time from the input file,
searches for the move with the best score difference and writes the move and
the resulting board to the output file."
)]
pub struct Config {
    /// Game input file
    #[arg(long, env = "FRUIT_INPUT", default_value = "input.txt")]
    pub input: PathBuf,

    /// Decision output file
    #[arg(long, env = "FRUIT_OUTPUT", default_value = "output.txt")]
    pub output: PathBuf,

    /// Fixed search depth; skips the depth table
    #[arg(long, env = "FRUIT_DEPTH")]
    pub depth: Option<u32>,

    /// Depth table in TOML; the built-in table is used otherwise
    #[arg(long, env = "FRUIT_POLICY")]
    pub policy: Option<PathBuf>,

    /// Abort the search after this fraction of the remaining time (0, 1]
    #[arg(long, env = "FRUIT_DEADLINE_FRACTION")]
    pub deadline_fraction: Option<f64>,

    /// Split the root moves across threads
    #[arg(long, env = "FRUIT_PARALLEL")]
    pub parallel: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FRUIT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.depth == Some(0) {
            return Err(anyhow!("depth must be at least 1"));
        }

        if let Some(fraction) = self.deadline_fraction {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(anyhow!(
                    "deadline_fraction must be in (0, 1], got {fraction}"
                ));
            }
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }
}
