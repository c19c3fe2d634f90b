//! wordrec CLI - train and run an isolated-word recognizer from the command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{ClassifyCommand, ConfigCommand, StatsCommand, TrainCommand};

/// wordrec CLI - isolated-word recognition over feature sequences.
///
/// Feature sequences are read from JSON or YAML files holding a list of
/// per-frame coefficient lists, e.g. `[[1.2, -0.4, ...], ...]`.
///
/// The corpus is stored in ~/.wordrec/corpus.json and grows with every
/// training call and every accepted recognition.
#[derive(Parser)]
#[command(name = "wordrec")]
#[command(about = "Isolated-word recognizer CLI")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.wordrec/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Corpus file (default is ~/.wordrec/corpus.json)
    #[arg(long, global = true)]
    pub corpus: Option<String>,

    /// Input feature sequence file (YAML or JSON)
    #[arg(short = 'f', long = "file", global = true)]
    pub input: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a labeled feature sequence to the corpus
    Train(TrainCommand),
    /// Recognize a feature sequence
    Classify(ClassifyCommand),
    /// Show corpus size and per-label counts
    Stats(StatsCommand),
    /// Print the effective configuration
    Config(ConfigCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .init();
    }

    match &cli.command {
        Commands::Train(cmd) => cmd.run(&cli),
        Commands::Classify(cmd) => cmd.run(&cli),
        Commands::Stats(cmd) => cmd.run(&cli),
        Commands::Config(cmd) => cmd.run(&cli),
    }
}
