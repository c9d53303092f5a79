use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use fruit_core::{format_output, GameInput};
use fruit_policy::DepthPolicy;
use fruit_search::{Decision, SearchEngine};
use tracing::{info, warn};

use crate::config::Config;

/// Reads the game, searches it and writes the decision file.
pub fn run(config: &Config) -> Result<Decision> {
    let text = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read game input {}", config.input.display()))?;
    let game = GameInput::parse(&text)
        .with_context(|| format!("malformed game input {}", config.input.display()))?;

    let depth_limit = depth_limit(config, &game)?;
    info!(
        size = game.size,
        players = game.players,
        time_remaining = game.time_remaining,
        fruits = game.fruits_found(),
        depth_limit,
        "Loaded game"
    );

    let mut engine = SearchEngine::new(depth_limit)?.with_parallel(config.parallel);
    if let Some(fraction) = config.deadline_fraction {
        let budget = Duration::try_from_secs_f64(game.time_remaining * fraction)
            .with_context(|| format!("no usable deadline from {}s", game.time_remaining))?;
        engine = engine.with_deadline(budget);
    }

    let decision = engine.decide(&game.board);
    if decision.chosen.is_none() {
        warn!(output = %config.output.display(), "No move available, writing an empty decision");
    }

    fs::write(&config.output, format_output(decision.chosen, &decision.board))
        .with_context(|| format!("failed to write decision {}", config.output.display()))?;
    Ok(decision)
}

fn depth_limit(config: &Config, game: &GameInput) -> Result<u32> {
    if let Some(depth) = config.depth {
        return Ok(depth);
    }

    let loaded;
    let policy = match &config.policy {
        Some(path) => {
            loaded = DepthPolicy::from_path(path)?;
            &loaded
        }
        None => fruit_policy::standard(),
    };
    let depth = policy
        .choose_depth(game.size, game.time_remaining, game.fruits_found())
        .context("no depth for this game")?;
    Ok(depth)
}
