//! classrip - Main Entry Point

mod cli;
mod config;
mod output;

use anyhow::Context;
use clap::Parser;
use rip_engine::Ripper;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::resolve(&cli)?;

    tracing::info!("classrip v{}: {} html, {} css", rip_engine::VERSION, cli.html.len(), cli.css.len());

    let html = output::read_sources(&cli.html)?;
    let css = output::read_sources(&cli.css)?;

    let result = Ripper::new(config)
        .rip(&html, &css)
        .context("build unit failed")?;

    let written = output::write_output(&cli.out, &cli.bundle_name, &result)
        .with_context(|| format!("failed to write output to {}", cli.out.display()))?;
    tracing::info!("Wrote {} files to {}", written.len(), cli.out.display());

    println!("{}", result.report);
    if cli.print_map {
        for (from, to) in result.rename_map.iter() {
            println!("{} -> {}", from, to);
        }
    }

    Ok(())
}
