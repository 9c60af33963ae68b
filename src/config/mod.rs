// Core configuration types
mod core;
mod loader;

pub use self::core::{OutputConfig, SizemapConfig, CONFIG_FILE_NAME};
pub use self::loader::{
    directory_ancestors, load_config, load_config_file, load_config_from, parse_and_validate_config,
};
