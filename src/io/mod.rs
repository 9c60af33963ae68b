pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system("Failed to write file", path, e))
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
