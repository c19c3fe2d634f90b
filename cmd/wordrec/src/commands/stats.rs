//! Stats command.

use clap::Args;
use serde::Serialize;
use wordrec_recognizer::{Config, Corpus, CorpusStore};

use super::{get_config, get_store, output_result};
use crate::Cli;

/// Show corpus size and per-label counts.
#[derive(Args)]
pub struct StatsCommand {}

#[derive(Debug, Serialize)]
pub(crate) struct Stats {
    corpus: usize,
    labels: Vec<LabelStat>,
}

#[derive(Debug, Serialize)]
struct LabelStat {
    label: String,
    count: usize,
    in_vocabulary: bool,
}

/// Vocabulary words first, in vocabulary order (including untrained ones),
/// then out-of-vocabulary labels sorted by name.
pub(crate) fn collect(cfg: &Config, corpus: &Corpus) -> Stats {
    let mut labels: Vec<LabelStat> = cfg
        .vocabulary
        .words()
        .iter()
        .map(|w| LabelStat {
            label: w.clone(),
            count: corpus.count(w),
            in_vocabulary: true,
        })
        .collect();

    for label in corpus.labels() {
        if !cfg.vocabulary.contains(label) {
            labels.push(LabelStat {
                label: label.to_string(),
                count: corpus.count(label),
                in_vocabulary: false,
            });
        }
    }

    Stats {
        corpus: corpus.len(),
        labels,
    }
}

impl StatsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;
        let corpus = get_store(cli)?.load()?;
        output_result(&collect(&cfg, &corpus), cli.json)
    }
}
