//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod media;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::media::MediaConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Media URL settings.
    #[serde(default)]
    pub media: MediaConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `OPENBOOK__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("OPENBOOK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.media.base_url()?;
        Ok(config)
    }

    /// Load configuration from an in-memory TOML string.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.media.base_url()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = AppConfig::from_toml("").expect("empty config should load");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.media.base_url, "http://localhost:8000/media/");
    }

    #[test]
    fn test_overrides_from_toml() {
        let config = AppConfig::from_toml(
            r#"
            [media]
            base_url = "https://cdn.openbook.social/media/"

            [logging]
            level = "debug"
            format = "pretty"
            "#,
        )
        .expect("config should load");
        assert_eq!(config.media.base_url, "https://cdn.openbook.social/media/");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_relative_media_base_is_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [media]
            base_url = "media/"
            "#,
        )
        .expect_err("relative base url must fail");
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_load_applies_environment_overrides() {
        // Only test touching OPENBOOK__* variables.
        unsafe {
            std::env::set_var("OPENBOOK__MEDIA__BASE_URL", "https://cdn.openbook.social/media");
            std::env::set_var("OPENBOOK__LOGGING__LEVEL", "warn");
        }
        let loaded = AppConfig::load("load-test");
        unsafe {
            std::env::remove_var("OPENBOOK__MEDIA__BASE_URL");
            std::env::remove_var("OPENBOOK__LOGGING__LEVEL");
        }

        let config = loaded.expect("config should load");
        assert_eq!(config.media.base_url, "https://cdn.openbook.social/media");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(
            config.media.base_url().unwrap().as_str(),
            "https://cdn.openbook.social/media/"
        );
    }
}
