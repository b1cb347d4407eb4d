//! Browser logging setup.
//!
//! In web builds `tracing` events go to the browser console through a
//! reloadable level filter; the chosen level is kept in localStorage so it
//! survives reloads. Native builds (tests) install nothing.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

/// localStorage key for the persisted log level.
pub const LOG_LEVEL_KEY: &str = "er_web_log_level";

static INIT: Once = Once::new();

/// Initialize logging once; later calls do nothing.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
static RELOAD_HANDLE: std::sync::OnceLock<tracing_subscriber::reload::Handle<LevelFilter, tracing_subscriber::Registry>> =
    std::sync::OnceLock::new();

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // WASM doesn't have std::time

    let initial_level = stored_level().unwrap_or(LevelFilter::WARN);

    let (filter, handle) = tracing_subscriber::reload::Layer::new(initial_level);
    let _ = RELOAD_HANDLE.set(handle);

    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

pub fn level_name(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::OFF => "off",
        LevelFilter::ERROR => "error",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
        _ => "warn",
    }
}

#[cfg(feature = "web")]
fn stored_level() -> Option<LevelFilter> {
    use crate::app::storage::{BrowserStorage, StorageType};

    BrowserStorage::new(StorageType::Local)
        .get(LOG_LEVEL_KEY)
        .as_deref()
        .and_then(parse_level)
}

/// Change the level at runtime and persist it.
pub fn set_log_level(level: LevelFilter) {
    #[cfg(feature = "web")]
    {
        use crate::app::storage::{BrowserStorage, StorageType};

        if let Some(handle) = RELOAD_HANDLE.get() {
            let _ = handle.reload(level);
        }
        let _ = BrowserStorage::new(StorageType::Local).set(LOG_LEVEL_KEY, level_name(level));
    }
    #[cfg(not(feature = "web"))]
    let _ = level;
}

pub fn get_log_level() -> LevelFilter {
    #[cfg(feature = "web")]
    return stored_level().unwrap_or(LevelFilter::WARN);

    #[cfg(not(feature = "web"))]
    return LevelFilter::INFO;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" warn "), Some(LevelFilter::WARN));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn level_names_round_trip() {
        for level in [LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE] {
            assert_eq!(parse_level(level_name(level)), Some(level));
        }
    }
}
