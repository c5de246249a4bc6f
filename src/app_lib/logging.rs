//! Logging initialization for the browser build.
//!
//! `tracing` events are routed to the browser console through a fmt layer.
//! The filter accepts `EnvFilter` directives (`doorway=debug,warn`), a bare
//! level name, or a verbosity number `0..=4`. Native builds only log when a
//! test installs its own subscriber.

use std::sync::Once;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// Initializes logging once; later calls are ignored.
pub fn init(filter: &str) {
    INIT.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        init_web_logging(filter);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = filter;
    });
}

#[cfg(target_arch = "wasm32")]
fn init_web_logging(filter: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level(filter).into())
        .parse_lossy(directives(filter));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = crate::app_lib::GIT_COMMIT_HASH,
        "doorway starting"
    );
}

/// Parses a single level name or verbosity number.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    let value = value.trim();
    if let Ok(verbosity) = value.parse::<u8>() {
        return match verbosity {
            0 => Some(LevelFilter::ERROR),
            1 => Some(LevelFilter::WARN),
            2 => Some(LevelFilter::INFO),
            3 => Some(LevelFilter::DEBUG),
            4 => Some(LevelFilter::TRACE),
            _ => None,
        };
    }

    match value.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// Default level used when the filter holds only target-scoped directives.
fn default_level(filter: &str) -> LevelFilter {
    parse_level(filter).unwrap_or(LevelFilter::WARN)
}

/// A bare level or number becomes the default directive; anything else is
/// handed to `EnvFilter` untouched.
fn directives(filter: &str) -> &str {
    if parse_level(filter).is_some() {
        ""
    } else {
        filter.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::{default_level, directives, parse_level};
    use tracing::level_filters::LevelFilter;

    #[test]
    fn parse_level_accepts_names_and_numbers() {
        assert_eq!(parse_level("warn"), Some(LevelFilter::WARN));
        assert_eq!(parse_level(" DEBUG "), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("0"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("4"), Some(LevelFilter::TRACE));
        assert_eq!(parse_level("9"), None);
        assert_eq!(parse_level("doorway=debug"), None);
    }

    #[test]
    fn bare_level_becomes_default_directive() {
        assert_eq!(default_level("info"), LevelFilter::INFO);
        assert_eq!(directives("info"), "");
    }

    #[test]
    fn scoped_directives_pass_through() {
        assert_eq!(default_level("doorway=debug"), LevelFilter::WARN);
        assert_eq!(directives(" doorway=debug,warn "), "doorway=debug,warn");
    }
}
