use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lotka_volterra::io::{csv, report};
use lotka_volterra::{integrator, SimConfig};

#[derive(Parser)]
#[command(name = "lotka-volterra")]
#[command(about = "Simulate the Lotka-Volterra predator-prey model with explicit Euler steps")]
struct Cli {
    /// TOML file with any of: a, b, c, d, x0, y0, t0, t_end, h
    #[arg(long)]
    config: Option<PathBuf>,
    /// Also write the full trajectory as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let (params, initial, grid) = config.split()?;

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let trajectory = integrator::simulate(&params, &initial, &grid);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &trajectory)?;
    out.flush()?;

    if let Some(path) = &cli.csv {
        csv::write_trajectory_file(path, &trajectory)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        tracing::info!(path = %path.display(), samples = trajectory.len(), "exported trajectory");
    }

    Ok(())
}
