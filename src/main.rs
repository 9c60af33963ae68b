use anyhow::Result;
use sizemap::cli::{init_logging, parse_args, Commands};
use sizemap::commands::{self, CheckConfig, ClassifyConfig};
use std::process::ExitCode;

// Main orchestrator function
fn main() -> Result<ExitCode> {
    let cli = parse_args();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Classify {
            values,
            thresholds,
            output,
            summary,
        } => {
            commands::run_classify(ClassifyConfig {
                values,
                thresholds,
                output,
                summary,
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            cases,
            thresholds,
            output,
        } => {
            let outcome = commands::run_check(CheckConfig {
                cases,
                thresholds,
                output,
            })?;
            Ok(exit_code_for(outcome.passed()))
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// Pure function to map a check result to the process status
fn exit_code_for(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
