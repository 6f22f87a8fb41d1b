//! Métriques de simulation

use serde::{Deserialize, Serialize};

/// Métriques d'un essai
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialMetrics {
    /// Nombre total de bases
    pub total_bases: usize,

    /// Nombre de substitutions
    pub substitutions: usize,

    /// Jaccard mesuré entre original et copie
    pub observed_jaccard: f64,
}

impl TrialMetrics {
    /// Taux de substitution réalisé
    pub fn substitution_rate(&self) -> f64 {
        if self.total_bases == 0 {
            return 0.0;
        }
        self.substitutions as f64 / self.total_bases as f64
    }
}

/// Collecteur de métriques pour plusieurs essais
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsCollector {
    trials: Vec<TrialMetrics>,
}

impl MetricsCollector {
    /// Crée un nouveau collecteur
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute des métriques
    pub fn add(&mut self, metrics: TrialMetrics) {
        self.trials.push(metrics);
    }

    /// Jaccard moyen (0.0 si vide)
    pub fn mean_jaccard(&self) -> f64 {
        self.mean_of(|m| m.observed_jaccard)
    }

    pub fn min_jaccard(&self) -> f64 {
        self.trials
            .iter()
            .map(|m| m.observed_jaccard)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    pub fn max_jaccard(&self) -> f64 {
        self.trials
            .iter()
            .map(|m| m.observed_jaccard)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Taux de substitution moyen
    pub fn mean_substitution_rate(&self) -> f64 {
        self.mean_of(TrialMetrics::substitution_rate)
    }

    fn mean_of(&self, value: impl Fn(&TrialMetrics) -> f64) -> f64 {
        if self.trials.is_empty() {
            return 0.0;
        }
        self.trials.iter().map(value).sum::<f64>() / self.trials.len() as f64
    }

    pub fn trials(&self) -> &[TrialMetrics] {
        &self.trials
    }

    /// Nombre d'essais
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(substitutions: usize, observed_jaccard: f64) -> TrialMetrics {
        TrialMetrics {
            total_bases: 100,
            substitutions,
            observed_jaccard,
        }
    }

    #[test]
    fn test_empty_collector() {
        let collector = MetricsCollector::new();
        assert!(collector.is_empty());
        assert_eq!(collector.mean_jaccard(), 0.0);
        assert_eq!(collector.min_jaccard(), 0.0);
        assert_eq!(TrialMetrics::default().substitution_rate(), 0.0);
    }

    #[test]
    fn test_aggregates() {
        let mut collector = MetricsCollector::new();
        collector.add(trial(1, 0.8));
        collector.add(trial(3, 0.6));

        assert_eq!(collector.len(), 2);
        assert!((collector.mean_jaccard() - 0.7).abs() < 1e-12);
        assert_eq!(collector.min_jaccard(), 0.6);
        assert_eq!(collector.max_jaccard(), 0.8);
        assert!((collector.mean_substitution_rate() - 0.02).abs() < 1e-12);
    }
}
