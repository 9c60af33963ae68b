use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "sizemap")]
#[command(about = "Classify integers into size categories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    ///
    /// Default: warnings only
    /// -v: Show info messages
    /// -vv: Show debug messages
    /// -vvv: Show all trace information
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one or more integers
    Classify {
        /// Values to classify
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        #[command(flatten)]
        thresholds: ThresholdArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Show per-label counts after the listing (terminal format)
        #[arg(long)]
        summary: bool,
    },

    /// Check a table of expected labels against the classifier
    Check {
        /// Case table (.toml, .yaml or .yml); the built-in table when omitted
        cases: Option<PathBuf>,

        #[command(flatten)]
        thresholds: ThresholdArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Initialize a .sizemap.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ThresholdArgs {
    /// Exclusive upper bound of the "small" bucket
    #[arg(long = "small-below")]
    pub small_below: Option<i64>,

    /// Exclusive upper bound of the "big" bucket
    #[arg(long = "big-below")]
    pub big_below: Option<i64>,

    /// Configuration file (defaults to the nearest .sizemap.toml)
    #[arg(long, env = "SIZEMAP_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (defaults to the configured format, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_classify_accepts_negative_values() {
        let cli = Cli::try_parse_from(["sizemap", "classify", "-1", "0", "999"]).unwrap();
        match cli.command {
            Commands::Classify { values, .. } => assert_eq!(values, vec![-1, 0, 999]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_classify_requires_values() {
        assert!(Cli::try_parse_from(["sizemap", "classify"]).is_err());
    }

    #[test]
    fn test_check_flags() {
        let cli = Cli::try_parse_from([
            "sizemap",
            "check",
            "cases.yaml",
            "--small-below",
            "20",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Check {
                cases,
                thresholds,
                output,
            } => {
                assert_eq!(cases, Some(PathBuf::from("cases.yaml")));
                assert_eq!(thresholds.small_below, Some(20));
                assert_eq!(thresholds.big_below, None);
                assert_eq!(output.format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
