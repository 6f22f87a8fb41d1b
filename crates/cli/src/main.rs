//! CLI du modèle taux d'erreur / Jaccard attendu

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use kmerjac_core::{parse_real, Formula, ModelError, DEFAULT_KMER_LENGTH};
use kmerjac_simulation::{SimulationConfig, SubstitutionModel};

mod commands;
mod display;

use commands::{estimate, simulate};

#[derive(Parser, Debug)]
#[command(name = "kmerjac")]
#[command(about = "Taux d'erreur par base et Jaccard attendu entre ensembles de k-mers", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Format de sortie
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Applique F puis G à la même valeur (lue comme J, puis comme ε)
    Both {
        /// Valeur réelle
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        value: f64,

        /// Longueur de k-mer
        #[arg(default_value_t = DEFAULT_KMER_LENGTH)]
        kmer: u32,
    },

    /// Jaccard attendu pour un taux d'erreur, G(ε, k)
    Jaccard {
        /// Taux d'erreur par base
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        error_rate: f64,

        /// Longueur de k-mer
        #[arg(default_value_t = DEFAULT_KMER_LENGTH)]
        kmer: u32,
    },

    /// Taux d'erreur implicite pour un indice de Jaccard, F(J, k)
    ErrorRate {
        /// Indice de Jaccard
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        jaccard: f64,

        /// Longueur de k-mer
        #[arg(default_value_t = DEFAULT_KMER_LENGTH)]
        kmer: u32,
    },

    /// Distance de Mash et identité estimée pour un indice de Jaccard
    Distance {
        /// Indice de Jaccard
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        jaccard: f64,

        /// Longueur de k-mer
        #[arg(default_value_t = DEFAULT_KMER_LENGTH)]
        kmer: u32,
    },

    /// Compare G(ε, k) au Jaccard mesuré sur des séquences aléatoires bruitées
    Simulate {
        /// Taux de substitution (0.0-1.0)
        #[arg(value_parser = parse_value)]
        error_rate: f64,

        /// Longueur de k-mer
        #[arg(default_value_t = DEFAULT_KMER_LENGTH)]
        kmer: u32,

        /// Longueur des séquences simulées
        #[arg(short, long, default_value = "10000")]
        length: usize,

        /// Nombre d'essais
        #[arg(short = 'n', long, default_value = "10")]
        trials: usize,

        /// Seed du générateur
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_value(raw: &str) -> Result<f64, ModelError> {
    parse_real("valeur", raw)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    kmerjac_core::init_logging(cli.verbose);

    match cli.command {
        Commands::Both { value, kmer } => {
            estimate::run(&[Formula::ErrorRate, Formula::Jaccard], value, kmer, cli.format)?;
        }
        Commands::Jaccard { error_rate, kmer } => {
            estimate::run(&[Formula::Jaccard], error_rate, kmer, cli.format)?;
        }
        Commands::ErrorRate { jaccard, kmer } => {
            estimate::run(&[Formula::ErrorRate], jaccard, kmer, cli.format)?;
        }
        Commands::Distance { jaccard, kmer } => {
            estimate::run(&[Formula::MashDistance, Formula::Identity], jaccard, kmer, cli.format)?;
        }
        Commands::Simulate {
            error_rate,
            kmer,
            length,
            trials,
            seed,
        } => {
            let config = SimulationConfig {
                model: SubstitutionModel::new(error_rate).with_seed(seed),
                kmer_length: kmer,
                sequence_length: length,
                trials,
            };
            simulate::run(config, cli.format)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    Ok(pb)
}
