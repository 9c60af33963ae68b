use std::fs;
use std::path::{Path, PathBuf};

use super::core::{SizemapConfig, CONFIG_FILE_NAME};
use crate::errors::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<SizemapConfig> {
    let config = toml::from_str::<SizemapConfig>(contents).map_err(|e| {
        Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;
    config.validate()?;
    Ok(config)
}

/// Load a config file the user asked for explicitly; any failure is an error
pub fn load_config_file(path: &Path) -> Result<SizemapConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    parse_and_validate_config(&contents).map_err(|e| match e {
        Error::Configuration(message) => Error::parse(path, message),
        other => other,
    })
}

/// Try loading config from a discovered path, falling back on any problem
fn try_load_config_from_path(config_path: &Path) -> Option<SizemapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, config_path.display());
            Some(SizemapConfig::default())
        }
    }
}

/// Only log actual errors, not "file not found"
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit, starting with `start`
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest config file
pub fn load_config_from(start: PathBuf) -> SizemapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SizemapConfig::default()
        })
}

pub fn load_config() -> SizemapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            SizemapConfig::default()
        }
    }
}
