//! Canal de substitution simulé

use crate::error_model::SubstitutionModel;
use kmerjac_core::Nucleotide;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Canal qui recopie une séquence en substituant des bases
pub struct SubstitutionChannel {
    model: SubstitutionModel,
    rng: ChaCha8Rng,
}

impl SubstitutionChannel {
    /// Crée un nouveau canal
    pub fn new(model: SubstitutionModel) -> Self {
        Self {
            model,
            rng: ChaCha8Rng::seed_from_u64(model.seed),
        }
    }

    pub fn model(&self) -> &SubstitutionModel {
        &self.model
    }

    /// Génère une séquence uniforme sur ACGT
    pub fn random_sequence(&mut self, len: usize) -> Vec<Nucleotide> {
        (0..len)
            .map(|_| Nucleotide::from_index(self.rng.gen_range(0..4)))
            .collect()
    }

    /// Recopie la séquence avec erreurs, retourne la copie et le nombre de substitutions
    pub fn transmit(&mut self, sequence: &[Nucleotide]) -> (Vec<Nucleotide>, usize) {
        let rate = self.model.error_rate;
        let mut substitutions = 0;

        let corrupted = sequence
            .iter()
            .map(|&base| {
                let roll: f64 = self.rng.gen();
                if roll < rate {
                    substitutions += 1;
                    self.substitute_base(base)
                } else {
                    base
                }
            })
            .collect();

        (corrupted, substitutions)
    }

    /// Substitue une base par une autre, toujours différente
    fn substitute_base(&mut self, base: Nucleotide) -> Nucleotide {
        Nucleotide::from_index(base.index() + self.rng.gen_range(1..4))
    }

    /// Réinitialise le RNG
    pub fn reset_rng(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.model.seed);
    }
}
