//! Simulation de substitutions et mesure du Jaccard entre k-mers

pub mod channel;
pub mod error_model;
pub mod metrics;
pub mod runner;

pub use channel::SubstitutionChannel;
pub use error_model::SubstitutionModel;
pub use metrics::{MetricsCollector, TrialMetrics};
pub use runner::{Simulation, SimulationConfig, SimulationReport};
