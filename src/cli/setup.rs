//! Setup and initialization functions for CLI

use log::LevelFilter;

/// Map the `-v` count to a log level
pub fn log_level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize env_logger once at startup; `RUST_LOG` wins when set
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level_for(verbosity));
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format_timestamp(None);

    if let Err(e) = builder.try_init() {
        eprintln!("Note: Logger already configured: {}", e);
    }
}
