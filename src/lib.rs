// Export modules for library usage
pub mod cases;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod report;
pub mod size;

// Re-export commonly used types
pub use crate::cases::{check_cases, CaseFailure, CaseTable, CheckOutcome, SizeCase};
pub use crate::config::SizemapConfig;
pub use crate::errors::{Error, Result};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::report::{classify_all, Classification, SizeReport};
pub use crate::size::{classify, classify_with, size, SizeLabel, SizeThresholds};
