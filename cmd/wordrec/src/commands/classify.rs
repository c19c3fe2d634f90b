//! Classify command.

use clap::Args;
use serde::Serialize;
use wordrec_recognizer::{CorpusStore, Recognizer, Verdict};

use super::{
    get_config, get_store, load_sequence, output_result, print_info, print_verbose,
    require_input_file,
};
use crate::Cli;

/// Recognize a feature sequence against the corpus.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Do not save the corpus, even if the recognition was accepted
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
struct ClassifyOutput {
    recognized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    process_time_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ClassifyCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let input = require_input_file(cli)?;
        let cfg = get_config(cli)?;
        let store = get_store(cli)?;

        let sequence = load_sequence(input)?;
        print_verbose(cli, &format!("loaded {} frames from {}", sequence.len(), input));

        let mut rec = Recognizer::with_corpus(cfg, store.load()?);
        let before = rec.corpus().len();
        let verdict = rec.classify_verdict(sequence)?;

        if rec.corpus().len() != before && !self.dry_run {
            store.save(rec.corpus())?;
            print_verbose(cli, &format!("corpus grew to {} examples", rec.corpus().len()));
        }

        let output = match verdict {
            Verdict::Accepted(r) => ClassifyOutput {
                recognized: true,
                label: Some(r.label),
                confidence: Some(r.confidence),
                process_time_ms: Some(r.process_time_ms),
                reason: None,
            },
            Verdict::Rejected(reason) => {
                if !cli.json {
                    print_info(&format!("not recognized: {}", reason));
                }
                ClassifyOutput {
                    recognized: false,
                    label: None,
                    confidence: None,
                    process_time_ms: None,
                    reason: Some(reason.to_string()),
                }
            }
        };
        output_result(&output, cli.json)
    }
}
