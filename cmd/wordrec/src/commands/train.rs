//! Train command.

use clap::Args;
use serde::Serialize;
use wordrec_recognizer::{Config, Corpus, CorpusStore, Recognizer, TrainingSession};

use super::{
    get_config, get_store, load_sequence, output_result, print_info, print_success,
    print_verbose, print_warning, require_input_file,
};
use crate::Cli;

/// Add a labeled feature sequence to the corpus.
#[derive(Args)]
pub struct TrainCommand {
    /// Word the input sequence is an utterance of (default: the next word
    /// of the guided training schedule)
    #[arg(short, long)]
    pub label: Option<String>,
}

#[derive(Serialize)]
struct TrainOutput<'a> {
    label: &'a str,
    frames: usize,
    count: usize,
    corpus: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<&'a str>,
}

/// Picks the label: the explicit one, else the schedule's next word.
pub(crate) fn resolve_label(
    explicit: Option<&str>,
    cfg: &Config,
    corpus: &Corpus,
) -> anyhow::Result<String> {
    if let Some(label) = explicit {
        return Ok(label.to_string());
    }
    match TrainingSession::resume(cfg, corpus).next_word() {
        Some(word) => Ok(word.to_string()),
        None => anyhow::bail!("training schedule is complete; pass --label to add more examples"),
    }
}

impl TrainCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let input = require_input_file(cli)?;
        let cfg = get_config(cli)?;
        let store = get_store(cli)?;

        let sequence = load_sequence(input)?;
        let frames = sequence.len();
        print_verbose(cli, &format!("loaded {} frames from {}", frames, input));

        let corpus = store.load()?;
        let label = resolve_label(self.label.as_deref(), &cfg, &corpus)?;
        if !cfg.vocabulary.contains(&label) {
            print_warning(&format!(
                "'{}' is not in the vocabulary; it will be stored but never recognized",
                label
            ));
        }

        let mut rec = Recognizer::with_corpus(cfg, corpus);
        if !rec.train(sequence, &label) {
            anyhow::bail!("{}: empty feature sequence", input);
        }
        store.save(rec.corpus())?;

        let corpus = rec.corpus();
        let session = TrainingSession::resume(rec.config(), corpus);
        let next = session.next_word();
        if cli.json {
            output_result(
                &TrainOutput {
                    label: &label,
                    frames,
                    count: corpus.count(&label),
                    corpus: corpus.len(),
                    next,
                },
                true,
            )?;
        } else {
            print_success(&format!(
                "trained '{}' ({} frames), {} examples of '{}', {} total",
                label,
                frames,
                corpus.count(&label),
                label,
                corpus.len()
            ));
            match next {
                Some(word) => print_info(&format!(
                    "next word: '{}' ({}/{})",
                    word,
                    session.completed(),
                    session.total()
                )),
                None => print_info("training schedule complete; ready to classify"),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordrec_recognizer::{FeatureSequence, Vocabulary};

    fn cfg() -> Config {
        Config {
            vocabulary: Vocabulary::new(["yes", "no"]),
            training_passes: 1,
            ..Config::default()
        }
    }

    #[test]
    fn explicit_label_wins() {
        let label = resolve_label(Some("maybe"), &cfg(), &Corpus::new()).unwrap();
        assert_eq!(label, "maybe");
    }

    #[test]
    fn omitted_label_follows_schedule() {
        let cfg = cfg();
        let mut rec = Recognizer::new(cfg.clone());
        assert_eq!(resolve_label(None, &cfg, rec.corpus()).unwrap(), "yes");

        rec.train(FeatureSequence::from(vec![vec![0.0]]), "yes");
        assert_eq!(resolve_label(None, &cfg, rec.corpus()).unwrap(), "no");

        rec.train(FeatureSequence::from(vec![vec![1.0]]), "no");
        assert!(resolve_label(None, &cfg, rec.corpus()).is_err());
    }
}
