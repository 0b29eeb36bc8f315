//! Command line argument parsing for the symptom-nb CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// symptom-nb - Naive Bayes classifier for free-form symptom descriptions
#[derive(Parser, Debug, Clone)]
#[command(name = "symptom-nb")]
#[command(about = "Train and query a Naive Bayes symptom classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SymptomArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SymptomArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log filter matching the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Synthesize a corpus, train a model, evaluate it and save it
    Train(TrainArgs),

    /// Classify text with a saved model
    Classify(ClassifyArgs),

    /// Show what a saved model contains
    Inspect(InspectArgs),

    /// Write the synthetic corpus as JSON lines
    Generate(GenerateArgs),
}

/// Corpus synthesis options shared by `train` and `generate`.
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Seed table and context phrases (JSON); defaults to the built-in table
    #[arg(long, value_name = "SEEDS_FILE")]
    pub seeds_file: Option<PathBuf>,

    /// Noisy examples per category
    #[arg(long, default_value = "900")]
    pub examples_per_category: usize,

    /// Blended two-category examples
    #[arg(long, default_value = "600")]
    pub blended: usize,

    /// Random seed of the run
    #[arg(long, default_value = "7")]
    pub seed: u64,
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Where to write the model
    #[arg(short, long, value_name = "MODEL_FILE", default_value = "symptom_model_nb_v2.json")]
    pub output: PathBuf,

    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Maximum vocabulary size
    #[arg(long, default_value = "2200")]
    pub vocab_cap: usize,

    /// Additive smoothing constant
    #[arg(long, default_value = "1.0")]
    pub alpha: f64,

    /// Share of the corpus used for training
    #[arg(long, default_value = "0.85")]
    pub train_ratio: f64,
}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the model file
    #[arg(value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Text to classify (words are joined with spaces)
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,

    /// Also print the log-posterior score of every category
    #[arg(long)]
    pub scores: bool,
}

/// Arguments for model inspection
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Path to the model file
    #[arg(value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Number of leading vocabulary features to list
    #[arg(long, default_value = "20")]
    pub top: usize,
}

/// Arguments for corpus generation
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Output file (JSON lines); standard output when omitted
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

impl ClassifyArgs {
    /// The text argument words joined back into one utterance.
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}
