//! Config command.

use clap::Args;

use super::{get_config, output_result};
use crate::Cli;

/// Print the effective configuration (file values merged over defaults).
#[derive(Args)]
pub struct ConfigCommand {}

impl ConfigCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;
        output_result(&cfg, cli.json)
    }
}
