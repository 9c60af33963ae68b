use crate::cases::CheckOutcome;
use crate::errors::{Error, Result};
use crate::report::SizeReport;
use crate::size::SizeLabel;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &SizeReport) -> Result<()>;
    fn write_check(&mut self, outcome: &CheckOutcome) -> Result<()>;

    /// Push buffered output to its destination, surfacing any write error
    fn flush(&mut self) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &SizeReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_check(&mut self, outcome: &CheckOutcome) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, outcome)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &SizeReport) -> Result<()> {
        writeln!(self.writer, "# Size Classification")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Thresholds: small < {}, big < {}",
            report.thresholds.small_below, report.thresholds.big_below
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Input | Label |")?;
        writeln!(self.writer, "|-------|-------|")?;
        for c in &report.classifications {
            writeln!(self.writer, "| {} | {} |", c.input, c.label)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Label | Count |")?;
        writeln!(self.writer, "|-------|-------|")?;
        for (label, count) in &report.summary {
            writeln!(self.writer, "| {} | {} |", label, count)?;
        }
        Ok(())
    }

    fn write_check(&mut self, outcome: &CheckOutcome) -> Result<()> {
        writeln!(self.writer, "# Case Check")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}**: {} of {} cases passed",
            if outcome.passed() { "PASS" } else { "FAIL" },
            outcome.total - outcome.failures.len(),
            outcome.total
        )?;
        if !outcome.failures.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "| # | Input | Got | Want |")?;
            writeln!(self.writer, "|---|-------|-----|------|")?;
            for f in &outcome.failures {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} |",
                    f.index, f.input, f.got, f.want
                )?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    show_summary: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_summary: false,
        }
    }

    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &SizeReport) -> Result<()> {
        let width = report
            .classifications
            .iter()
            .map(|c| c.input.to_string().len())
            .max()
            .unwrap_or(0);

        for c in &report.classifications {
            writeln!(
                self.writer,
                "{:>width$}  {}",
                c.input,
                paint_label(c.label),
                width = width
            )?;
        }

        if self.show_summary {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Summary:".bold())?;
            for (label, count) in &report.summary {
                writeln!(self.writer, "  {:<8} {}", label.as_str(), count)?;
            }
        }
        Ok(())
    }

    fn write_check(&mut self, outcome: &CheckOutcome) -> Result<()> {
        for failure in &outcome.failures {
            writeln!(self.writer, "{}", failure.to_string().red())?;
        }

        let status = if outcome.passed() {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        writeln!(
            self.writer,
            "{status}: {} of {} cases passed",
            outcome.total - outcome.failures.len(),
            outcome.total
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn paint_label(label: SizeLabel) -> ColoredString {
    match label {
        SizeLabel::Negative => label.as_str().blue(),
        SizeLabel::Zero => label.as_str().dimmed(),
        SizeLabel::Small => label.as_str().green(),
        SizeLabel::Big => label.as_str().yellow(),
        SizeLabel::Huge => label.as_str().red().bold(),
    }
}

/// Create a writer for `format`, targeting `output` or stdout
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    show_summary: bool,
) -> Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| Error::file_system("Failed to create output file", path, e))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink).with_summary(show_summary)),
    })
}
