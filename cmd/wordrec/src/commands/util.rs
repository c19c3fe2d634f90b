//! Utility functions for CLI commands.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use wordrec_recognizer::{Config, FeatureSequence, JsonFileStore};

use crate::Cli;

/// Base directory under the home directory.
pub const DEFAULT_BASE_DIR: &str = ".wordrec";
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_CORPUS_FILE: &str = "corpus.json";

fn default_path(file: &str) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR).join(file))
}

/// Loads the recognizer configuration.
///
/// An explicit `--config` must exist; the default file is optional.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    match cli.config.as_deref() {
        Some(path) => Ok(Config::load(Path::new(path))?),
        None => match default_path(DEFAULT_CONFIG_FILE) {
            Some(path) if path.exists() => Ok(Config::load(&path)?),
            _ => Ok(Config::default()),
        },
    }
}

/// Returns the corpus store selected by `--corpus` or the default path.
pub fn get_store(cli: &Cli) -> anyhow::Result<JsonFileStore> {
    let path = match cli.corpus.as_deref() {
        Some(p) => PathBuf::from(p),
        None => default_path(DEFAULT_CORPUS_FILE)
            .ok_or_else(|| anyhow::anyhow!("cannot find home directory, use --corpus"))?,
    };
    Ok(JsonFileStore::new(path))
}

/// Loads a feature sequence from a YAML or JSON file.
pub fn load_sequence(path: &str) -> anyhow::Result<FeatureSequence> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("yaml");

    let seq = match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {} as JSON", path))?,
        _ => serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse {} as YAML", path))?,
    };
    Ok(seq)
}

/// Requires input file to be provided.
pub fn require_input_file(cli: &Cli) -> anyhow::Result<&str> {
    cli.input
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("input file is required, use -f flag"))
}

/// Outputs result as JSON or YAML.
pub fn output_result<T: serde::Serialize>(result: &T, as_json: bool) -> anyhow::Result<()> {
    let output = if as_json {
        serde_json::to_string_pretty(result)? + "\n"
    } else {
        serde_yaml::to_string(result)?
    };
    print!("{}", output);
    Ok(())
}

/// Prints verbose output if enabled.
pub fn print_verbose(cli: &Cli, msg: &str) {
    if cli.verbose {
        eprintln!("[verbose] {}", msg);
    }
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", msg);
}

/// Prints info message.
pub fn print_info(msg: &str) {
    eprintln!("\x1b[34mℹ\x1b[0m {}", msg);
}

/// Prints warning message.
pub fn print_warning(msg: &str) {
    eprintln!("\x1b[33m⚠\x1b[0m {}", msg);
}
