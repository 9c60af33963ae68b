use crate::cli::{OutputArgs, ThresholdArgs};
use crate::io::output::create_writer;
use crate::report::{classify_all, SizeReport};
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    pub values: Vec<i64>,
    pub thresholds: ThresholdArgs,
    pub output: OutputArgs,
    pub summary: bool,
}

pub fn run_classify(config: ClassifyConfig) -> Result<SizeReport> {
    let (settings, thresholds) = super::resolve_settings(&config.thresholds)?;
    let format = settings.resolve_format(config.output.format);

    let report = classify_all(&config.values, &thresholds);

    let mut writer = create_writer(format, config.output.output.as_deref(), config.summary)?;
    writer.write_report(&report)?;
    writer.flush()?;
    Ok(report)
}
