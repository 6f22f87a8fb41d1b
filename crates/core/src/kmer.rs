//! Nucléotides, ensembles de k-mers et indice de Jaccard observé

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Base standard (non ambiguë)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Convertit un caractère en base
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            'T' => Ok(Nucleotide::T),
            _ => Err(ModelError::InvalidBase(c)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Rang de la base dans `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Base de rang `index % 4`
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = ModelError;

    fn try_from(c: char) -> Result<Self> {
        Nucleotide::from_char(c)
    }
}

/// Lit une séquence ACGT
pub fn parse_sequence(s: &str) -> Result<Vec<Nucleotide>> {
    s.chars().map(Nucleotide::from_char).collect()
}

/// Ensemble des k-mers distincts d'une séquence
pub fn kmer_set(sequence: &[Nucleotide], kmer_length: usize) -> Result<HashSet<&[Nucleotide]>> {
    if kmer_length == 0 {
        return Err(ModelError::invalid_argument(
            "kmer_length",
            "la longueur de k-mer doit être positive",
        ));
    }
    if sequence.len() < kmer_length {
        return Err(ModelError::SequenceTooShort {
            len: sequence.len(),
            kmer_length,
        });
    }

    Ok(sequence.windows(kmer_length).collect())
}

/// Indice de Jaccard entre les ensembles de k-mers de deux séquences
pub fn jaccard_index(a: &[Nucleotide], b: &[Nucleotide], kmer_length: usize) -> Result<f64> {
    let set_a = kmer_set(a, kmer_length)?;
    let set_b = kmer_set(b, kmer_length)?;

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    Ok(intersection as f64 / union as f64)
}
