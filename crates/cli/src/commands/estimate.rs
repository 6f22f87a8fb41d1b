//! Évaluation directe des formules

use crate::display;
use crate::OutputFormat;
use anyhow::{Context, Result};
use kmerjac_core::{Estimate, Formula, JaccardModel};

/// Évalue les formules dans l'ordre sur la même entrée
///
/// Rien n'est affiché si une des évaluations échoue.
pub fn evaluate(model: &JaccardModel, formulas: &[Formula], input: f64) -> kmerjac_core::Result<Vec<Estimate>> {
    formulas.iter().map(|&f| model.estimate(f, input)).collect()
}

pub fn run(formulas: &[Formula], input: f64, kmer_length: u32, format: OutputFormat) -> Result<()> {
    let model = JaccardModel::with_kmer_length(kmer_length);
    let estimates = evaluate(&model, formulas, input)
        .with_context(|| format!("évaluation impossible pour l'entrée {input:?}, k = {kmer_length}"))?;

    println!("{}", display::render_estimates(&estimates, format)?);
    Ok(())
}
