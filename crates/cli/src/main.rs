#![warn(clippy::pedantic)]

mod input;
mod log;
mod settings;

use std::path::PathBuf;

use ::log::{LevelFilter, debug};
use anyhow::{Context, bail};
use clap::Parser;
use pace_domain::{Locale, report};

#[derive(Parser)]
#[command(
    name = "pace",
    about = "Compute distance, mean speed and spent calories of workouts"
)]
struct Cli {
    /// JSON file with sensor packages (the demo packages are used if omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Settings file
    #[arg(long, short, default_value = "pace.json")]
    config: PathBuf,

    /// Language of the rendered messages (en, ru)
    #[arg(long, short)]
    locale: Option<Locale>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = settings::read_settings(&cli.config)
        .with_context(|| format!("failed to read settings from {}", cli.config.display()))?;

    log::init(if cli.verbose {
        LevelFilter::Debug
    } else {
        settings.log_level
    })
    .context("failed to initialize logger")?;

    let locale = cli.locale.unwrap_or(settings.locale);

    let packages = match &cli.input {
        Some(path) => input::read_packages(path)
            .with_context(|| format!("failed to read packages from {}", path.display()))?,
        None => input::demo_packages(),
    };

    debug!("processing {} packages", packages.len());

    let results = report(&packages, locale);

    for message in results.iter().flatten() {
        println!("{message}");
    }

    let failed = results.iter().filter(|r| r.is_err()).count();

    if failed > 0 {
        bail!("failed to process {failed} of {} packages", results.len());
    }

    Ok(())
}
