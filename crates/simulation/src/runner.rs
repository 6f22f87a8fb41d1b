//! Comparaison du Jaccard simulé avec G(ε, k)

use crate::channel::SubstitutionChannel;
use crate::error_model::SubstitutionModel;
use crate::metrics::{MetricsCollector, TrialMetrics};
use kmerjac_core::{
    expected_error_rate, expected_jaccard, jaccard_index, log_operation, ModelError, Result,
    DEFAULT_KMER_LENGTH,
};
use serde::{Deserialize, Serialize};

/// Paramètres d'une simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Modèle d'erreur
    pub model: SubstitutionModel,

    /// Longueur des k-mers comparés
    pub kmer_length: u32,

    /// Longueur de chaque séquence aléatoire
    pub sequence_length: usize,

    /// Nombre d'essais
    pub trials: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            model: SubstitutionModel::default(),
            kmer_length: DEFAULT_KMER_LENGTH,
            sequence_length: 10_000,
            trials: 10,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        self.model.validate()?;

        if self.kmer_length == 0 {
            return Err(ModelError::invalid_argument(
                "kmer_length",
                "la longueur de k-mer doit être positive",
            ));
        }
        if self.trials == 0 {
            return Err(ModelError::invalid_argument(
                "trials",
                "au moins un essai est requis",
            ));
        }
        if self.sequence_length < self.kmer_length as usize {
            return Err(ModelError::invalid_argument(
                "sequence_length",
                format!(
                    "{} bases ne contiennent aucun {}-mer",
                    self.sequence_length, self.kmer_length
                ),
            ));
        }
        Ok(())
    }
}

/// Résultat agrégé d'une simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,

    /// G(ε, k)
    pub expected_jaccard: f64,

    pub mean_jaccard: f64,
    pub min_jaccard: f64,
    pub max_jaccard: f64,
    pub mean_substitution_rate: f64,

    /// F(Jaccard moyen, k), absent si aucun k-mer n'est partagé
    pub implied_error_rate: Option<f64>,

    pub trials: Vec<TrialMetrics>,
}

/// Simulation d'essais indépendants sur des séquences aléatoires
pub struct Simulation {
    config: SimulationConfig,
    channel: SubstitutionChannel,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            channel: SubstitutionChannel::new(config.model),
        })
    }

    /// Un essai : séquence aléatoire, copie bruitée, Jaccard mesuré
    pub fn run_trial(&mut self) -> Result<TrialMetrics> {
        let original = self.channel.random_sequence(self.config.sequence_length);
        let (copy, substitutions) = self.channel.transmit(&original);
        let observed_jaccard = jaccard_index(&original, &copy, self.config.kmer_length as usize)?;

        Ok(TrialMetrics {
            total_bases: original.len(),
            substitutions,
            observed_jaccard,
        })
    }

    /// Lance tous les essais; `on_trial` est appelé après chacun
    pub fn run(&mut self, mut on_trial: impl FnMut(&TrialMetrics)) -> Result<SimulationReport> {
        let config = self.config;
        let expected = expected_jaccard(config.model.error_rate, config.kmer_length)?;

        let collector = log_operation!("simulation", {
            let mut collector = MetricsCollector::new();
            for trial in 0..config.trials {
                let metrics = self.run_trial()?;
                tracing::debug!(
                    trial,
                    substitutions = metrics.substitutions,
                    observed = metrics.observed_jaccard,
                    "essai terminé"
                );
                on_trial(&metrics);
                collector.add(metrics);
            }
            collector
        });

        let mean_jaccard = collector.mean_jaccard();
        Ok(SimulationReport {
            config,
            expected_jaccard: expected,
            mean_jaccard,
            min_jaccard: collector.min_jaccard(),
            max_jaccard: collector.max_jaccard(),
            mean_substitution_rate: collector.mean_substitution_rate(),
            implied_error_rate: expected_error_rate(mean_jaccard, config.kmer_length).ok(),
            trials: collector.trials().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(error_rate: f64, sequence_length: usize, trials: usize) -> SimulationConfig {
        SimulationConfig {
            model: SubstitutionModel::new(error_rate),
            kmer_length: 16,
            sequence_length,
            trials,
        }
    }

    #[test]
    fn test_invalid_configs() {
        assert!(Simulation::new(config(0.01, 1000, 0)).is_err());
        assert!(Simulation::new(config(0.01, 8, 1)).is_err());
        assert!(Simulation::new(config(2.0, 1000, 1)).is_err());

        let mut zero_k = config(0.01, 1000, 1);
        zero_k.kmer_length = 0;
        assert!(matches!(
            Simulation::new(zero_k),
            Err(ModelError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_no_error_gives_full_jaccard() {
        let mut simulation = Simulation::new(config(0.0, 2000, 3)).unwrap();
        let report = simulation.run(|_| {}).unwrap();

        assert_eq!(report.expected_jaccard, 1.0);
        assert_eq!(report.mean_jaccard, 1.0);
        assert_eq!(report.implied_error_rate, Some(0.0));
        assert!(report.trials.iter().all(|t| t.substitutions == 0));
    }

    #[test]
    fn test_observed_matches_model() {
        let mut simulation = Simulation::new(config(0.01, 20_000, 5)).unwrap();
        let report = simulation.run(|_| {}).unwrap();

        assert!((report.mean_jaccard - report.expected_jaccard).abs() < 0.05);
        let implied = report.implied_error_rate.unwrap();
        assert!((implied - 0.01).abs() < 0.005);
        assert!((report.mean_substitution_rate - 0.01).abs() < 0.005);
    }

    #[test]
    fn test_callback_per_trial() {
        let mut simulation = Simulation::new(config(0.05, 500, 4)).unwrap();
        let mut seen = 0;
        let report = simulation.run(|_| seen += 1).unwrap();
        assert_eq!(seen, 4);
        assert_eq!(report.trials.len(), 4);
        assert!(report.min_jaccard <= report.mean_jaccard);
        assert!(report.mean_jaccard <= report.max_jaccard);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let first = Simulation::new(config(0.02, 1000, 3)).unwrap().run(|_| {}).unwrap();
        let second = Simulation::new(config(0.02, 1000, 3)).unwrap().run(|_| {}).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_json() {
        let report = Simulation::new(config(0.0, 100, 1)).unwrap().run(|_| {}).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["expected_jaccard"], 1.0);
        assert_eq!(json["config"]["kmer_length"], 16);
    }
}
