use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Sizemap Configuration

# Exclusive upper bounds for positive values:
#   1 <= n < small_below          -> small
#   small_below <= n < big_below  -> big
#   n >= big_below                -> huge
[thresholds]
small_below = 10
big_below = 100

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default configuration into `dir`, returning the file path
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    log::debug!("Wrote {}", config_path.display());
    Ok(config_path)
}
