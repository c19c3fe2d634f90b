//! CLI commands module.

mod classify;
mod config;
mod stats;
mod train;
mod util;

pub use classify::ClassifyCommand;
pub use config::ConfigCommand;
pub use stats::StatsCommand;
pub use train::TrainCommand;

pub(crate) use util::*;
