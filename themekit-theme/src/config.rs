//! # Theme Configuration
//!
//! Selects which theme variant a [ThemeVendor](crate::vendor::ThemeVendor)
//! starts with. Configuration comes from environment variables, a TOML file,
//! or is built programmatically.
//!
//! ## Environment Variables
//!
//! - `THEMEKIT_THEME`: the default variant (`light`, `dark`, or `custom:name`)
//! - `THEMEKIT_THEME_FALLBACK`: the variant used when the default is not registered
//! - `THEMEKIT_THEME_CONFIG`: path to a TOML configuration file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "dark"
//! fallback = "light"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use themekit_theme::config::ThemeKitConfig;
//! use themekit_theme::vendor::{ThemeVendor, ThemeVariant};
//!
//! let config = ThemeKitConfig::new().with_default_theme(ThemeVariant::Dark);
//! let vendor = ThemeVendor::from_config(&config);
//! assert_eq!(vendor.current_variant(), Some(ThemeVariant::Dark));
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::vendor::ThemeVariant;

/// Environment variable selecting the default theme variant.
pub const THEME_ENV: &str = "THEMEKIT_THEME";
/// Environment variable selecting the fallback theme variant.
pub const THEME_FALLBACK_ENV: &str = "THEMEKIT_THEME_FALLBACK";
/// Environment variable naming a TOML configuration file.
pub const THEME_CONFIG_ENV: &str = "THEMEKIT_THEME_CONFIG";

/// Theme selection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeKitConfig {
    /// The variant to activate.
    pub default_theme: ThemeVariant,
    /// The variant to activate if the default is not registered.
    pub fallback_theme: Option<ThemeVariant>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ThemeSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<ThemeVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fallback: Option<ThemeVariant>,
}

impl ThemeKitConfig {
    /// Light theme with the dark theme as fallback.
    pub fn new() -> Self {
        Self {
            default_theme: ThemeVariant::Light,
            fallback_theme: Some(ThemeVariant::Dark),
        }
    }

    /// Set the default variant.
    pub fn with_default_theme(mut self, theme: ThemeVariant) -> Self {
        self.default_theme = theme;
        self
    }

    /// Set the fallback variant.
    pub fn with_fallback_theme(mut self, theme: ThemeVariant) -> Self {
        self.fallback_theme = Some(theme);
        self
    }

    /// Remove the fallback variant.
    pub fn without_fallback(mut self) -> Self {
        self.fallback_theme = None;
        self
    }

    /// Read configuration from the process environment, or use defaults.
    ///
    /// A file named by `THEMEKIT_THEME_CONFIG` is loaded first; `THEMEKIT_THEME`
    /// and `THEMEKIT_THEME_FALLBACK` then override it. An unreadable file is
    /// logged and ignored.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [ThemeKitConfig::from_env_or_default], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match lookup(THEME_CONFIG_ENV) {
            Some(path) => Self::from_file(&path).unwrap_or_else(|err| {
                log::warn!("Ignoring theme configuration {}: {}", path, err);
                Self::new()
            }),
            None => Self::new(),
        };

        if let Some(theme) = lookup(THEME_ENV) {
            config.default_theme = ThemeVariant::parse(&theme);
        }

        if let Some(fallback) = lookup(THEME_FALLBACK_ENV) {
            config.fallback_theme = Some(ThemeVariant::parse(&fallback));
        }

        config
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();

        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }

        if !path.exists() {
            return Err(ThemeError::config_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        Self::parse_toml(&content).map_err(|details| ThemeError::parse_error(Some(path.to_path_buf()), details))
    }

    /// Load configuration from TOML content.
    ///
    /// Keys that are absent keep their [ThemeKitConfig::new] values.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        Self::parse_toml(content).map_err(|details| ThemeError::parse_error(None, details))
    }

    fn parse_toml(content: &str) -> Result<Self, String> {
        let file: ConfigFile = toml::from_str(content).map_err(|err| err.to_string())?;
        let mut config = Self::new();

        if let Some(default) = file.theme.default {
            config.default_theme = default;
        }
        if let Some(fallback) = file.theme.fallback {
            config.fallback_theme = Some(fallback);
        }

        Ok(config)
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml(&self) -> ThemeResult<String> {
        let file = ConfigFile {
            theme: ThemeSection {
                default: Some(self.default_theme.clone()),
                fallback: self.fallback_theme.clone(),
            },
        };
        toml::to_string(&file).map_err(|err| ThemeError::parse_error(None, err.to_string()))
    }
}

impl Default for ThemeKitConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_toml() {
        let config = ThemeKitConfig::from_toml(
            r#"
            [theme]
            default = "dark"
            fallback = "custom:brand"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_theme, ThemeVariant::Dark);
        assert_eq!(
            config.fallback_theme,
            Some(ThemeVariant::Custom("brand".to_string()))
        );
    }

    #[test]
    fn test_from_toml_keeps_defaults_for_missing_keys() {
        let config = ThemeKitConfig::from_toml("").unwrap();
        assert_eq!(config, ThemeKitConfig::new());
    }

    #[test]
    fn test_from_toml_rejects_invalid_content() {
        let err = ThemeKitConfig::from_toml("[theme\ndefault = ").unwrap_err();
        assert!(matches!(err, ThemeError::ConfigParse { path: None, .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ThemeKitConfig::new()
            .with_default_theme(ThemeVariant::Dark)
            .with_fallback_theme(ThemeVariant::Light);

        let toml = config.to_toml().unwrap();
        assert_eq!(ThemeKitConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_from_file_requires_toml_extension() {
        let err = ThemeKitConfig::from_file("theme.json").unwrap_err();
        assert!(matches!(err, ThemeError::UnsupportedFormat { .. }));

        let err = ThemeKitConfig::from_file("/nonexistent/themekit/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> =
            [(THEME_ENV, "DARK"), (THEME_FALLBACK_ENV, "custom:brand")].into_iter().collect();

        let config = ThemeKitConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.default_theme, ThemeVariant::Dark);
        assert_eq!(
            config.fallback_theme,
            Some(ThemeVariant::Custom("brand".to_string()))
        );
    }

    #[test]
    fn test_from_lookup_ignores_missing_file() {
        let config = ThemeKitConfig::from_lookup(|key| {
            (key == THEME_CONFIG_ENV).then(|| "/nonexistent/themekit/theme.toml".to_string())
        });
        assert_eq!(config, ThemeKitConfig::new());
    }
}
