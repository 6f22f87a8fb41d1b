//! Commande de simulation

use crate::{create_progress_bar, display, OutputFormat};
use anyhow::{Context, Result};
use kmerjac_simulation::{Simulation, SimulationConfig};

pub fn run(config: SimulationConfig, format: OutputFormat) -> Result<()> {
    let mut simulation = Simulation::new(config).context("configuration de simulation invalide")?;

    let pb = create_progress_bar(config.trials as u64, "Simulation en cours...")?;
    let report = simulation.run(|_| pb.inc(1))?;
    pb.finish_and_clear();

    println!("{}", display::render_report(&report, format)?);
    Ok(())
}
