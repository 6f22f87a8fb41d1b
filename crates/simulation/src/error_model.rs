//! Modèle d'erreur de substitution pour la simulation

use kmerjac_core::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Substitutions indépendantes, de probabilité fixe par base
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionModel {
    /// Taux de substitution (par base)
    pub error_rate: f64,

    /// Seed pour reproductibilité
    pub seed: u64,
}

impl Default for SubstitutionModel {
    fn default() -> Self {
        Self {
            error_rate: 0.01, // 1%
            seed: 42,
        }
    }
}

impl SubstitutionModel {
    pub fn new(error_rate: f64) -> Self {
        Self {
            error_rate,
            ..Self::default()
        }
    }

    /// Définit le seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Le taux doit être une probabilité
    pub fn validate(&self) -> Result<()> {
        if !self.error_rate.is_finite() || !(0.0..=1.0).contains(&self.error_rate) {
            return Err(ModelError::invalid_argument(
                "error_rate",
                format!("{} n'est pas dans [0, 1]", self.error_rate),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        let model = SubstitutionModel::default();
        assert_eq!(model.error_rate, 0.01);
        assert_eq!(model.seed, 42);
    }

    #[test]
    fn test_with_seed() {
        let model = SubstitutionModel::new(0.05).with_seed(123);
        assert_eq!(model.error_rate, 0.05);
        assert_eq!(model.seed, 123);
    }

    #[test]
    fn test_validity() {
        assert!(SubstitutionModel::new(0.0).validate().is_ok());
        assert!(SubstitutionModel::new(1.0).validate().is_ok());
        assert!(SubstitutionModel::new(-0.1).validate().is_err());
        assert!(SubstitutionModel::new(1.5).validate().is_err());
        assert!(SubstitutionModel::new(f64::NAN).validate().is_err());
    }
}
