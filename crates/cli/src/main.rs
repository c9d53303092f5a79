use anyhow::Result;
use clap::Parser;
use fruit_cli::{run, Config};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config.log_level)?;

    let decision = run(&config)?;
    if let Some(mv) = decision.chosen {
        tracing::info!(
            mv = %mv,
            score = decision.score,
            output = %config.output.display(),
            "Decision written"
        );
    }
    Ok(())
}
