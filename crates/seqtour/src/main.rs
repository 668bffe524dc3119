use anyhow::{Context, Result};
use clap::Parser;
use seqtour::{show, Category};
use seqtour_render::Dumper;
use tracing_subscriber::EnvFilter;

mod settings;

use settings::{Cli, Settings};

fn main() -> Result<()> {
    // RUST_LOG, when set, replaces the default directive entirely.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seqtour=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from(Cli::parse());
    tracing::debug!(?settings, "starting");

    if settings.list {
        print_categories();
        return Ok(());
    }

    let mut dumper = Dumper::to_destination(&settings.destination, settings.mode)
        .with_context(|| format!("cannot open output {:?}", settings.destination))?;
    show(settings.category, &mut dumper)
        .with_context(|| format!("category '{}' failed", settings.category))?;
    dumper.finish().context("cannot flush output")?;
    Ok(())
}

fn print_categories() {
    for category in Category::iter() {
        let operators = category.operators().join(", ");
        if operators.is_empty() {
            println!("{:<30} {}", category.cli_name(), category.execution());
        } else {
            println!(
                "{:<30} {:<24} {}",
                category.cli_name(),
                category.execution(),
                operators
            );
        }
    }
}
