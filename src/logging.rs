//! Logger setup for the native binary.

use crate::config::LogLevel;

/// Initialize `env_logger` at the configured level. `RUST_LOG` still wins
/// for anything it names.
pub fn init(level: LogLevel) {
    let result = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init();

    if let Err(e) = result {
        log::warn!("Logger already initialized: {}", e);
    }
}
