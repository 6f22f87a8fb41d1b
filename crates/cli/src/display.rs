//! Rendu texte et JSON des résultats

use crate::OutputFormat;
use anyhow::Result;
use kmerjac_core::{Estimate, Formula};
use kmerjac_simulation::SimulationReport;
use tabled::{Table, Tabled};

/// Une ligne par estimation, ou un tableau JSON
pub fn render_estimates(estimates: &[Estimate], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(estimates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(estimates)?),
    }
}

#[derive(Tabled)]
struct TrialRow {
    #[tabled(rename = "Essai")]
    trial: usize,
    #[tabled(rename = "Bases")]
    bases: usize,
    #[tabled(rename = "Substitutions")]
    substitutions: usize,
    #[tabled(rename = "Taux réalisé")]
    rate: String,
    #[tabled(rename = "Jaccard observé")]
    jaccard: String,
}

/// Tableau des essais suivi du résumé
pub fn render_report(report: &SimulationReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let rows: Vec<TrialRow> = report
        .trials
        .iter()
        .enumerate()
        .map(|(i, t)| TrialRow {
            trial: i + 1,
            bases: t.total_bases,
            substitutions: t.substitutions,
            rate: format!("{:.4}", t.substitution_rate()),
            jaccard: format!("{:.6}", t.observed_jaccard),
        })
        .collect();

    let config = &report.config;
    let expected = Estimate {
        formula: Formula::Jaccard,
        input: config.model.error_rate,
        kmer_length: config.kmer_length,
        value: report.expected_jaccard,
    };

    let mut lines = vec![
        Table::new(rows).to_string(),
        String::new(),
        expected.to_string(),
        format!(
            "Jaccard observé: moyenne {:.6}, min {:.6}, max {:.6}",
            report.mean_jaccard, report.min_jaccard, report.max_jaccard
        ),
        format!("Taux de substitution réalisé: {:.6}", report.mean_substitution_rate),
    ];

    match report.implied_error_rate {
        Some(value) => lines.push(
            Estimate {
                formula: Formula::ErrorRate,
                input: report.mean_jaccard,
                kmer_length: config.kmer_length,
                value,
            }
            .to_string(),
        ),
        None => lines.push("E(eps) indéfini: aucun k-mer partagé".to_string()),
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmerjac_core::JaccardModel;
    use kmerjac_simulation::{Simulation, SimulationConfig, SubstitutionModel};

    #[test]
    fn test_render_text_lines() {
        let model = JaccardModel::default();
        let estimates = vec![
            model.estimate(Formula::ErrorRate, 1.0).unwrap(),
            model.estimate(Formula::Jaccard, 0.0).unwrap(),
        ];
        let text = render_estimates(&estimates, OutputFormat::Text).unwrap();
        assert_eq!(text, "E(eps) = F(1.0, 16) = 0.0\nE(Jac) = G(0.0, 16) = 1.0");
    }

    #[test]
    fn test_render_json() {
        let model = JaccardModel::with_kmer_length(21);
        let estimates = vec![model.estimate(Formula::Identity, 1.0).unwrap()];
        let json = render_estimates(&estimates, OutputFormat::Json).unwrap();
        let parsed: Vec<Estimate> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, estimates);
    }

    #[test]
    fn test_render_report_text() {
        let config = SimulationConfig {
            model: SubstitutionModel::new(0.0),
            kmer_length: 8,
            sequence_length: 200,
            trials: 2,
        };
        let report = Simulation::new(config).unwrap().run(|_| {}).unwrap();
        let text = render_report(&report, OutputFormat::Text).unwrap();

        assert!(text.contains("Jaccard observé"));
        assert!(text.contains("E(Jac) = G(0.0, 8) = 1.0"));
        assert!(text.contains("E(eps) = F(1.0, 8) = 0.0"));
    }
}
