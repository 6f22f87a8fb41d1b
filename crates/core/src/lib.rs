//! kmerjac Core Library
//!
//! Modèle reliant le taux d'erreur par base à l'indice de Jaccard attendu
//! entre ensembles de k-mers (modèle de Mash), et son inverse.

pub mod distance;
pub mod error;
pub mod kmer;
pub mod logging;
pub mod model;

// Réexportations principales
pub use distance::{identity, mash_distance};
pub use error::{ModelError, Result};
pub use kmer::{jaccard_index, kmer_set, parse_sequence, Nucleotide};
pub use logging::init_logging;
pub use model::{
    expected_error_rate, expected_jaccard, parse_real, Estimate, Formula, JaccardModel,
    ModelConfig, DEFAULT_KMER_LENGTH,
};
