//! CLI module for sizemap
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, OutputArgs, OutputFormat, ThresholdArgs};
pub use setup::{init_logging, log_level_for};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
