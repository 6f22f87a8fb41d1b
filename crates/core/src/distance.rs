//! Distance de Mash et identité estimée à partir d'un indice de Jaccard

use crate::error::{ModelError, Result};
use crate::model::expected_error_rate;

/// Distance de Mash, F(J, k) bornée aux extrémités
///
/// J = 0 (aucun k-mer partagé) vaut 1.0 au lieu d'une distance infinie,
/// J = 1 vaut exactement 0.0.
pub fn mash_distance(jaccard: f64, kmer_length: u32) -> Result<f64> {
    if kmer_length == 0 {
        return Err(ModelError::DivisionByZero(
            "longueur de k-mer nulle".to_string(),
        ));
    }
    if jaccard.is_nan() || jaccard < 0.0 {
        return Err(ModelError::OutOfDomain { jaccard });
    }

    if jaccard == 0.0 {
        return Ok(1.0);
    }
    if jaccard == 1.0 {
        return Ok(0.0);
    }

    expected_error_rate(jaccard, kmer_length)
}

/// Identité de séquence estimée, 1 − distance de Mash
pub fn identity(jaccard: f64, kmer_length: u32) -> Result<f64> {
    Ok(1.0 - mash_distance(jaccard, kmer_length)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mash_distance_bounds() {
        assert_eq!(mash_distance(0.0, 16).unwrap(), 1.0);
        assert_eq!(mash_distance(1.0, 16).unwrap(), 0.0);
    }

    #[test]
    fn test_mash_distance_matches_inverse_model() {
        for &j in &[0.01, 0.2, 0.5, 0.99] {
            assert_eq!(
                mash_distance(j, 21).unwrap(),
                expected_error_rate(j, 21).unwrap()
            );
        }
    }

    #[test]
    fn test_mash_distance_rejects_negative() {
        assert!(matches!(
            mash_distance(-0.1, 16),
            Err(ModelError::OutOfDomain { .. })
        ));
        assert!(matches!(
            mash_distance(0.5, 0),
            Err(ModelError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_identity() {
        assert_eq!(identity(1.0, 16).unwrap(), 1.0);
        assert_eq!(identity(0.0, 16).unwrap(), 0.0);

        let d = mash_distance(0.4, 16).unwrap();
        assert!((identity(0.4, 16).unwrap() - (1.0 - d)).abs() < 1e-15);
    }
}
