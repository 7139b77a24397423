#![allow(clippy::unwrap_used, clippy::expect_used)]

use inkwell_platform::logging;
use inkwell_platform::{LogFormat, LoggingConfig, PlatformError};

#[test]
fn test_subscriber_installs_once() {
    let config = LoggingConfig {
        level: "debug".to_owned(),
        format: LogFormat::Json,
    };

    temp_env::with_var_unset("RUST_LOG", || {
        logging::init(&config).unwrap();
        tracing::debug!(check = true, "logging initialised");

        let second = logging::init(&config);
        assert!(matches!(second, Err(PlatformError::Logging(_))));
    });
}

#[test]
fn test_configured_level_is_used_without_rust_log() {
    let config = LoggingConfig {
        level: "warn".to_owned(),
        ..LoggingConfig::default()
    };

    temp_env::with_var_unset("RUST_LOG", || {
        let filter = logging::filter(&config).unwrap();
        assert_eq!(filter.to_string(), "warn");
    });
}

#[test]
fn test_rust_log_takes_precedence() {
    temp_env::with_var("RUST_LOG", Some("inkwell=trace"), || {
        let filter = logging::filter(&LoggingConfig::default()).unwrap();
        assert_eq!(filter.to_string(), "inkwell=trace");
    });
}
