//! Table-driven checks of the classifier.
//!
//! A case table is an ordered list of inputs with the label each one is
//! expected to receive. Tables load from TOML or YAML:
//!
//! ```toml
//! [[cases]]
//! input = -1
//! expected = "negative"
//! ```
//!
//! ```yaml
//! cases:
//!   - input: 99
//!     expected: big
//! ```

use crate::errors::{Error, Result};
use crate::size::{classify_with, SizeLabel, SizeThresholds};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeCase {
    pub input: i64,
    pub expected: SizeLabel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseTable {
    #[serde(default)]
    pub cases: Vec<SizeCase>,
}

impl CaseTable {
    /// Reference cases covering every label
    pub fn builtin() -> Self {
        let cases = [
            (-1, SizeLabel::Negative),
            (5, SizeLabel::Small),
            (0, SizeLabel::Zero),
            (99, SizeLabel::Big),
            (999, SizeLabel::Huge),
        ]
        .into_iter()
        .map(|(input, expected)| SizeCase { input, expected })
        .collect();

        Self { cases }
    }

    /// Load a table, picking the format from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = CaseFormat::from_path(path)?;
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read case table", path, e))?;
        let table = format
            .parse(&contents)
            .map_err(|e| Error::parse(path, e.to_string()))?;
        log::debug!("Loaded {} cases from {}", table.cases.len(), path.display());
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseFormat {
    Toml,
    Yaml,
}

impl CaseFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(CaseFormat::Toml),
            Some("yaml") | Some("yml") => Ok(CaseFormat::Yaml),
            _ => Err(Error::parse(
                path,
                "unsupported case table format (expected .toml, .yaml or .yml)",
            )),
        }
    }

    fn parse(self, contents: &str) -> Result<CaseTable> {
        match self {
            CaseFormat::Toml => Ok(toml::from_str(contents)?),
            CaseFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
        }
    }
}

/// A case whose computed label differs from the expected one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFailure {
    pub index: usize,
    pub input: i64,
    pub got: SizeLabel,
    pub want: SizeLabel,
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}: Size({})={}; want {}",
            self.index, self.input, self.got, self.want
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub thresholds: SizeThresholds,
    pub total: usize,
    pub failures: Vec<CaseFailure>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every case and collect the mismatches
pub fn check_cases(table: &CaseTable, thresholds: &SizeThresholds) -> CheckOutcome {
    let failures: Vec<CaseFailure> = table
        .cases
        .iter()
        .enumerate()
        .filter_map(|(index, case)| {
            let got = classify_with(case.input, thresholds);
            (got != case.expected).then_some(CaseFailure {
                index,
                input: case.input,
                got,
                want: case.expected,
            })
        })
        .collect();

    for failure in &failures {
        log::debug!("{}", failure);
    }

    CheckOutcome {
        thresholds: *thresholds,
        total: table.len(),
        failures,
    }
}
