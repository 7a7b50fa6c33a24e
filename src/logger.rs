use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Map a `LOGLEVEL` value to a tracing level, defaulting to WARN
pub fn parse_level(raw: Option<&str>) -> Level {
    match raw.map(|s| s.trim().to_uppercase()).as_deref() {
        Some("TRACE") => Level::TRACE,
        Some("DEBUG") => Level::DEBUG,
        Some("INFO") => Level::INFO,
        Some("ERROR") => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Sets up the logger on stderr.
///
/// Environment variables:
/// - LOGLEVEL: Sets the log level (TRACE, DEBUG, INFO, WARN, ERROR), default WARN
/// - RUST_LOG: Extra per-target directives on top of LOGLEVEL
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(env::var("LOGLEVEL").ok().as_deref());

        let registry = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()));

        // Another subscriber may already be installed (e.g. by a test harness)
        if registry.try_init().is_err() {
            return;
        }

        tracing::debug!("Log level set to: {}", level);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), Level::WARN);
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some(" INFO ")), Level::INFO);
        assert_eq!(parse_level(Some("ERROR")), Level::ERROR);
        assert_eq!(parse_level(Some("trace")), Level::TRACE);
        assert_eq!(parse_level(Some("verbose")), Level::WARN);
    }

    #[test]
    fn test_setup_logger_twice() {
        setup_logger();
        setup_logger();
        tracing::warn!("logger test message");
    }
}
