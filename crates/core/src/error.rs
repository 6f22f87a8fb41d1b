//! Types d'erreurs pour le modèle Jaccard / taux d'erreur

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Argument invalide pour {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Indice de Jaccard hors domaine: {jaccard} (le logarithme exige J > 0)")]
    OutOfDomain { jaccard: f64 },

    #[error("Division par zéro: {0}")]
    DivisionByZero(String),

    #[error("Séquence trop courte: {len} bases pour des k-mers de longueur {kmer_length}")]
    SequenceTooShort { len: usize, kmer_length: usize },

    #[error("Base invalide: {0}")]
    InvalidBase(char),
}

impl ModelError {
    /// Raccourci pour construire une erreur d'argument
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
