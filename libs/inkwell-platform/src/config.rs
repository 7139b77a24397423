//! Platform configuration.
//!
//! Layers, lowest precedence first: built-in defaults, an optional YAML file,
//! then `INKWELL_`-prefixed environment variables using `__` as the nesting
//! separator (`INKWELL_LOGGING__LEVEL=debug`).

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "INKWELL_";

/// Properties file consulted for build metadata unless configured otherwise.
pub const DEFAULT_BUILD_PROPERTIES: &str = "inkwell-build.properties";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformConfig {
    /// Root directory holding blog data.
    pub data_directory: PathBuf,
    /// Public base URL, e.g. `https://blog.example.com/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Directory the web application is deployed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_application_root: Option<PathBuf>,
    /// Properties file carrying `build.version` and `build.date`.
    pub build_properties: PathBuf,
    pub logging: LoggingConfig,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::from("data"),
            url: None,
            web_application_root: None,
            build_properties: PathBuf::from(DEFAULT_BUILD_PROPERTIES),
            logging: LoggingConfig::default(),
        }
    }
}

impl PlatformConfig {
    /// Load configuration from defaults, `path` (if given) and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::ConfigNotFound`] if `path` does not exist and
    /// [`PlatformError::Config`] if the merged layers do not form a valid config.
    pub fn load(path: Option<&Path>) -> Result<Self, PlatformError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(PlatformError::ConfigNotFound(path.to_path_buf()));
            }
            tracing::debug!(path = %path.display(), "loading configuration file");
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;
        Ok(config)
    }
}

/// Output format of log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use super::*;

    const OVERRIDE_VAR: &str = "INKWELL_LOGGING__LEVEL";

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        temp_env::with_var_unset(OVERRIDE_VAR, || {
            let config = PlatformConfig::load(None).unwrap();

            assert_eq!(config, PlatformConfig::default());
            assert_eq!(config.logging.level, "info");
            assert_eq!(
                config.build_properties,
                PathBuf::from(DEFAULT_BUILD_PROPERTIES)
            );
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = yaml_file(
            "url: https://blog.example.com/\n\
             data_directory: /var/lib/inkwell\n\
             logging:\n  level: warn\n  format: json\n",
        );

        temp_env::with_var_unset(OVERRIDE_VAR, || {
            let config = PlatformConfig::load(Some(file.path())).unwrap();

            assert_eq!(config.url.as_deref(), Some("https://blog.example.com/"));
            assert_eq!(config.data_directory, PathBuf::from("/var/lib/inkwell"));
            assert_eq!(config.logging.level, "warn");
            assert_eq!(config.logging.format, LogFormat::Json);
            assert!(config.web_application_root.is_none());
        });
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = yaml_file("logging:\n  level: warn\n");

        temp_env::with_var(OVERRIDE_VAR, Some("debug"), || {
            let config = PlatformConfig::load(Some(file.path())).unwrap();

            assert_eq!(config.logging.level, "debug");
        });
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = PlatformConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, PlatformError::ConfigNotFound(p) if p == path));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let file = yaml_file("colour_scheme: dark\n");

        temp_env::with_var_unset(OVERRIDE_VAR, || {
            let err = PlatformConfig::load(Some(file.path())).unwrap_err();
            assert!(matches!(err, PlatformError::Config(_)));
        });
    }
}
