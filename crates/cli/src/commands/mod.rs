//! Sous-commandes

pub mod estimate;
pub mod simulate;
