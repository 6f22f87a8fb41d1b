//! Modèle analytique reliant taux d'erreur par base et indice de Jaccard
//!
//! Pour une séquence et sa copie bruitée (substitutions indépendantes de taux ε),
//! l'indice de Jaccard attendu entre leurs ensembles de k-mers vaut
//! `G(ε, k) = 1 / (2·e^(ε·k) − 1)`. L'inverse algébrique
//! `F(J, k) = −(1/k) · ln(2J / (1 + J))` retrouve le taux d'erreur implicite.
//!
//! Les deux fonctions sont pures : aucun état, aucune synchronisation.

use crate::distance;
use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longueur de k-mer par défaut
pub const DEFAULT_KMER_LENGTH: u32 = 16;

/// G(ε, k) : indice de Jaccard attendu pour un taux d'erreur par base
///
/// Aucun bornage du résultat. Le dénominateur ne s'annule que pour ε·k = −ln 2,
/// donc uniquement avec un taux négatif.
pub fn expected_jaccard(error_rate: f64, kmer_length: u32) -> Result<f64> {
    let denom = 2.0 * (error_rate * f64::from(kmer_length)).exp() - 1.0;
    if denom == 0.0 {
        return Err(ModelError::DivisionByZero(format!(
            "2·e^(ε·k) − 1 s'annule pour ε = {error_rate}, k = {kmer_length}"
        )));
    }
    Ok(1.0 / denom)
}

/// F(J, k) : taux d'erreur par base implicite pour un indice de Jaccard
///
/// Le logarithme n'est défini que pour J > 0. J > 1 est évalué tel quel
/// (taux négatif).
pub fn expected_error_rate(jaccard: f64, kmer_length: u32) -> Result<f64> {
    if kmer_length == 0 {
        return Err(ModelError::DivisionByZero(
            "longueur de k-mer nulle".to_string(),
        ));
    }
    if jaccard.is_nan() || jaccard <= 0.0 {
        return Err(ModelError::OutOfDomain { jaccard });
    }

    let ratio = 2.0 * jaccard / (1.0 + jaccard);
    let error_rate = -(1.0 / f64::from(kmer_length)) * ratio.ln();

    // ln(1) donne -0.0 après la multiplication
    Ok(error_rate + 0.0)
}

/// Lit une valeur réelle passée en ligne de commande
pub fn parse_real(name: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ModelError::invalid_argument(name, "valeur vide"));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        ModelError::invalid_argument(name, format!("'{raw}' n'est pas un nombre réel"))
    })?;

    if !value.is_finite() {
        return Err(ModelError::invalid_argument(
            name,
            format!("'{raw}' n'est pas un nombre fini"),
        ));
    }

    Ok(value)
}

/// Formules exposées par le modèle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// F(J, k) : Jaccard → taux d'erreur
    ErrorRate,
    /// G(ε, k) : taux d'erreur → Jaccard
    Jaccard,
    /// Distance de Mash, bornée aux extrémités
    MashDistance,
    /// Identité estimée, 1 − distance de Mash
    Identity,
}

impl Formula {
    /// Quantité estimée, telle qu'affichée
    pub fn label(self) -> &'static str {
        match self {
            Formula::ErrorRate => "E(eps)",
            Formula::Jaccard => "E(Jac)",
            Formula::MashDistance => "D(Jac)",
            Formula::Identity => "ANI",
        }
    }

    /// Nom court de la fonction
    pub fn symbol(self) -> &'static str {
        match self {
            Formula::ErrorRate => "F",
            Formula::Jaccard => "G",
            Formula::MashDistance => "mash",
            Formula::Identity => "identity",
        }
    }

    pub fn evaluate(self, input: f64, kmer_length: u32) -> Result<f64> {
        match self {
            Formula::ErrorRate => expected_error_rate(input, kmer_length),
            Formula::Jaccard => expected_jaccard(input, kmer_length),
            Formula::MashDistance => distance::mash_distance(input, kmer_length),
            Formula::Identity => distance::identity(input, kmer_length),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Résultat d'une évaluation, avec ses entrées
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub formula: Formula,
    pub input: f64,
    pub kmer_length: u32,
    pub value: f64,
}

impl fmt::Display for Estimate {
    /// `E(eps) = F(0.05, 16) = 0.0032...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}({:?}, {}) = {:?}",
            self.formula.label(),
            self.formula.symbol(),
            self.input,
            self.kmer_length,
            self.value
        )
    }
}

/// Configuration du modèle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Longueur des k-mers comparés
    pub kmer_length: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            kmer_length: DEFAULT_KMER_LENGTH,
        }
    }
}

/// Modèle à longueur de k-mer fixée
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardModel {
    config: ModelConfig,
}

impl JaccardModel {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn with_kmer_length(kmer_length: u32) -> Self {
        Self::new(ModelConfig { kmer_length })
    }

    pub fn kmer_length(&self) -> u32 {
        self.config.kmer_length
    }

    /// Évalue une formule et conserve ses entrées
    pub fn estimate(&self, formula: Formula, input: f64) -> Result<Estimate> {
        let kmer_length = self.config.kmer_length;
        let value = formula.evaluate(input, kmer_length)?;
        tracing::trace!(%formula, input, kmer_length, value, "évaluation");

        Ok(Estimate {
            formula,
            input,
            kmer_length,
            value,
        })
    }

    /// G(ε, k)
    pub fn forward(&self, error_rate: f64) -> Result<f64> {
        self.estimate(Formula::Jaccard, error_rate).map(|e| e.value)
    }

    /// F(J, k)
    pub fn inverse(&self, jaccard: f64) -> Result<f64> {
        self.estimate(Formula::ErrorRate, jaccard).map(|e| e.value)
    }

    pub fn mash_distance(&self, jaccard: f64) -> Result<f64> {
        self.estimate(Formula::MashDistance, jaccard).map(|e| e.value)
    }

    pub fn identity(&self, jaccard: f64) -> Result<f64> {
        self.estimate(Formula::Identity, jaccard).map(|e| e.value)
    }
}
