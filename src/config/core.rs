use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::io::output::OutputFormat;
use crate::size::SizeThresholds;

/// Name of the configuration file searched for in the directory hierarchy
pub const CONFIG_FILE_NAME: &str = ".sizemap.toml";

/// Root configuration structure for sizemap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SizemapConfig {
    /// Bucket boundaries for positive values
    #[serde(default)]
    pub thresholds: Option<SizeThresholds>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
}

impl SizemapConfig {
    /// Configured thresholds, or the defaults
    pub fn thresholds(&self) -> SizeThresholds {
        self.thresholds.unwrap_or_default()
    }

    /// Resolve thresholds with per-bound overrides taking precedence
    pub fn resolve_thresholds(
        &self,
        small_below: Option<i64>,
        big_below: Option<i64>,
    ) -> Result<SizeThresholds> {
        let base = self.thresholds();
        SizeThresholds::new(
            small_below.unwrap_or(base.small_below),
            big_below.unwrap_or(base.big_below),
        )
    }

    /// Resolve the output format with an override taking precedence
    pub fn resolve_format(&self, format: Option<OutputFormat>) -> OutputFormat {
        format
            .or_else(|| self.output.as_ref().and_then(|o| o.default_format))
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds().validate()
    }
}
