//! CLI command implementations for sizemap.
//!
//! Available commands:
//! - **classify**: Label each given integer
//! - **check**: Run a case table against the classifier
//! - **init**: Initialize a new sizemap configuration file

pub mod check;
pub mod classify;
pub mod init;

pub use check::{run_check, CheckConfig};
pub use classify::{run_classify, ClassifyConfig};
pub use init::{init_config, init_config_in};

use crate::cli::ThresholdArgs;
use crate::config::{self, SizemapConfig};
use crate::size::SizeThresholds;
use anyhow::{Context, Result};

/// Load configuration and apply threshold overrides from the command line
pub(crate) fn resolve_settings(args: &ThresholdArgs) -> Result<(SizemapConfig, SizeThresholds)> {
    let config = match &args.config {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load_config(),
    };
    let thresholds = config
        .resolve_thresholds(args.small_below, args.big_below)
        .context("Invalid thresholds")?;
    log::info!(
        "Using thresholds: small < {}, big < {}",
        thresholds.small_below,
        thresholds.big_below
    );
    Ok((config, thresholds))
}
