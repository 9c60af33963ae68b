use crate::cases::{check_cases, CaseTable, CheckOutcome};
use crate::cli::{OutputArgs, ThresholdArgs};
use crate::io::output::create_writer;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub cases: Option<PathBuf>,
    pub thresholds: ThresholdArgs,
    pub output: OutputArgs,
}

pub fn run_check(config: CheckConfig) -> Result<CheckOutcome> {
    let (settings, thresholds) = super::resolve_settings(&config.thresholds)?;
    let format = settings.resolve_format(config.output.format);

    let table = match &config.cases {
        Some(path) => CaseTable::load(path)
            .with_context(|| format!("Failed to load case table {}", path.display()))?,
        None => {
            log::info!("No case table given, using the built-in cases");
            CaseTable::builtin()
        }
    };
    if table.is_empty() {
        log::warn!("Case table is empty");
    }

    let outcome = check_cases(&table, &thresholds);

    let mut writer = create_writer(format, config.output.output.as_deref(), false)?;
    writer.write_check(&outcome)?;
    writer.flush()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    fn quiet_output(dir: &TempDir) -> OutputArgs {
        OutputArgs {
            format: Some(OutputFormat::Json),
            output: Some(dir.path().join("out.json")),
        }
    }

    #[test]
    fn test_run_check_builtin_table() {
        let dir = TempDir::new().unwrap();
        let outcome = run_check(CheckConfig {
            cases: None,
            thresholds: ThresholdArgs::default(),
            output: quiet_output(&dir),
        })
        .unwrap();
        assert!(outcome.passed());
        assert_eq!(outcome.total, 5);
    }

    #[test]
    fn test_run_check_reports_failures() {
        let dir = TempDir::new().unwrap();
        let cases = dir.path().join("cases.toml");
        fs::write(&cases, "[[cases]]\ninput = 10\nexpected = \"small\"\n").unwrap();

        let outcome = run_check(CheckConfig {
            cases: Some(cases),
            thresholds: ThresholdArgs::default(),
            output: quiet_output(&dir),
        })
        .unwrap();
        assert!(!outcome.passed());
        assert_eq!(outcome.failures[0].to_string(), "#0: Size(10)=big; want small");
    }

    #[test]
    fn test_run_check_missing_table_is_error() {
        let dir = TempDir::new().unwrap();
        let result = run_check(CheckConfig {
            cases: Some(dir.path().join("nope.yaml")),
            thresholds: ThresholdArgs::default(),
            output: quiet_output(&dir),
        });
        assert!(result.is_err());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_run_check_fails_when_output_cannot_be_written() {
        let result = run_check(CheckConfig {
            cases: None,
            thresholds: ThresholdArgs::default(),
            output: OutputArgs {
                format: Some(OutputFormat::Markdown),
                output: Some("/dev/full".into()),
            },
        });
        assert!(result.is_err());
    }
}
