//! CLI configuration.
//!
//! Loaded from a TOML file (`reckon.toml` by default; a missing file means
//! defaults), then overridden from `RECKON_*` environment variables, then
//! validated.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use calc_core::calculations::growth::opportunity_cost::DEFAULT_HORIZONS_YEARS;
use calc_core::equations::EARTH_MEAN_RADIUS_KM;

/// Most decimals a number is printed with
pub const MAX_PRECISION: usize = 12;

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Decimal places in text output
    pub precision: usize,
    pub format: OutputFormat,
    /// Filter used when RUST_LOG is unset
    pub log_level: String,
    /// Sphere radius for `distance`
    pub earth_radius_km: f64,
    /// Horizons reported by `opportunity`
    pub opportunity_horizons: Vec<u32>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
            earth_radius_km: EARTH_MEAN_RADIUS_KM,
            opportunity_horizons: DEFAULT_HORIZONS_YEARS.to_vec(),
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    /// Apply overrides from `RECKON_*` environment variables
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the environment in production)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(precision) = lookup("RECKON_PRECISION") {
            self.precision = precision
                .trim()
                .parse()
                .map_err(|_| ConfigError::Env("RECKON_PRECISION".to_string(), precision.clone()))?;
        }

        if let Some(format) = lookup("RECKON_FORMAT") {
            self.format = OutputFormat::parse(&format).ok_or_else(|| ConfigError::Env("RECKON_FORMAT".to_string(), format.clone()))?;
        }

        if let Some(log_level) = lookup("RECKON_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(radius) = lookup("RECKON_EARTH_RADIUS_KM") {
            self.earth_radius_km = radius
                .trim()
                .parse()
                .map_err(|_| ConfigError::Env("RECKON_EARTH_RADIUS_KM".to_string(), radius.clone()))?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.precision > MAX_PRECISION {
            errors.push(format!("precision {} exceeds maximum of {}", self.precision, MAX_PRECISION));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if !(self.earth_radius_km.is_finite() && self.earth_radius_km > 0.0) {
            errors.push(format!("earth_radius_km must be positive, got {}", self.earth_radius_km));
        }

        if self.opportunity_horizons.is_empty() {
            errors.push("opportunity_horizons cannot be empty".to_string());
        }
        if self.opportunity_horizons.contains(&0) {
            errors.push("opportunity_horizons must all be at least 1 year".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Environment variable with an unusable value
    #[error("Invalid value for {0}: '{1}'")]
    Env(String, String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.opportunity_horizons, vec![10, 20, 30]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml("precision = 2\nformat = \"json\"\n").unwrap();
        assert_eq!(config.precision, 2);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.earth_radius_km, EARTH_MEAN_RADIUS_KM);
    }

    #[test]
    fn test_full_toml() {
        let config = CliConfig::from_toml(
            r#"
            precision = 6
            format = "text"
            log_level = "debug"
            earth_radius_km = 6378.137
            opportunity_horizons = [5, 15]
            "#,
        )
        .unwrap();
        assert_eq!(config.earth_radius_km, 6378.137);
        assert_eq!(config.opportunity_horizons, vec![5, 15]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(CliConfig::from_toml("colour = true"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = CliConfig::load(Path::new("/nonexistent/reckon/reckon.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::default()
            .with_overrides(env(&[
                ("RECKON_PRECISION", "8"),
                ("RECKON_FORMAT", "JSON"),
                ("RECKON_LOG_LEVEL", "info"),
                ("RECKON_EARTH_RADIUS_KM", "6000"),
            ]))
            .unwrap();
        assert_eq!(config.precision, 8);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.earth_radius_km, 6000.0);
    }

    #[test]
    fn test_bad_env_value() {
        let err = CliConfig::default()
            .with_overrides(env(&[("RECKON_PRECISION", "many")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Env("RECKON_PRECISION".to_string(), "many".to_string()));
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let config = CliConfig {
            precision: 20,
            log_level: "loud".to_string(),
            earth_radius_km: -1.0,
            opportunity_horizons: vec![],
            ..CliConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }
}
