//! CLI configuration management.
//!
//! Handles loading of `paleo.toml` with environment variable override
//! support. Command-line arguments take precedence over both.

use std::path::Path;

use paleo_bootstrap::{DEFAULT_CURVE_SAMPLES, MAX_ITERATIONS};
use paleo_estimators::UnfoldConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON report
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown output format '{}'. Valid values: table, json", other)),
        }
    }
}

/// `[bootstrap]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BootstrapSection {
    /// E/I resampling iterations
    pub iterations_ei: usize,
    /// Fold test resampling iterations
    pub iterations_fold: usize,
    /// Bootstrap curves kept per run
    pub curve_samples: usize,
    /// Resampling seed; unseeded runs draw one from entropy
    pub seed: Option<u64>,
}

impl Default for BootstrapSection {
    fn default() -> Self {
        Self {
            iterations_ei: 1000,
            iterations_fold: 1000,
            curve_samples: DEFAULT_CURVE_SAMPLES,
            seed: None,
        }
    }
}

/// `[fold]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FoldSection {
    /// Lowest percent unfolding searched
    pub min_percent: i32,
    /// Highest percent unfolding searched
    pub max_percent: i32,
}

impl Default for FoldSection {
    fn default() -> Self {
        Self {
            min_percent: UnfoldConfig::DEFAULT_MIN,
            max_percent: UnfoldConfig::DEFAULT_MAX,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaleoConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Default output format
    pub output: OutputFormat,
    /// Bootstrap settings
    pub bootstrap: BootstrapSection,
    /// Fold test settings
    pub fold: FoldSection,
}

impl Default for PaleoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output: OutputFormat::default(),
            bootstrap: BootstrapSection::default(),
            fold: FoldSection::default(),
        }
    }
}

impl PaleoConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `PALEO_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        if let Some(iterations) = lookup("PALEO_ITERATIONS") {
            match iterations.parse() {
                Ok(n) => {
                    self.bootstrap.iterations_ei = n;
                    self.bootstrap.iterations_fold = n;
                }
                Err(_) => errors.push(format!("PALEO_ITERATIONS '{}' is not a count", iterations)),
            }
        }

        if let Some(seed) = lookup("PALEO_SEED") {
            match seed.parse() {
                Ok(s) => self.bootstrap.seed = Some(s),
                Err(_) => errors.push(format!("PALEO_SEED '{}' is not a 64-bit integer", seed)),
            }
        }

        if let Some(log_level) = lookup("PALEO_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(output) = lookup("PALEO_OUTPUT") {
            match output.parse() {
                Ok(format) => self.output = format,
                Err(e) => errors.push(format!("PALEO_OUTPUT: {}", e)),
            }
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        // Validate iteration counts
        for (name, count) in [
            ("iterations_ei", self.bootstrap.iterations_ei),
            ("iterations_fold", self.bootstrap.iterations_fold),
        ] {
            if count == 0 {
                errors.push(format!("{} must be greater than 0", name));
            }
            if count > MAX_ITERATIONS {
                errors.push(format!(
                    "{} {} exceeds maximum allowed (1,000,000)",
                    name, count
                ));
            }
        }

        // Validate unfolding range
        if self.fold.min_percent >= self.fold.max_percent {
            errors.push(format!(
                "fold.min_percent ({}) must be below fold.max_percent ({})",
                self.fold.min_percent, self.fold.max_percent
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn validation_errors(result: Result<(), ConfigError>) -> Vec<String> {
        match result {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config() {
        let config = PaleoConfig::default();
        assert_eq!(config.bootstrap.iterations_ei, 1000);
        assert_eq!(config.bootstrap.iterations_fold, 1000);
        assert_eq!(config.bootstrap.curve_samples, 25);
        assert_eq!(config.fold.min_percent, -50);
        assert_eq!(config.fold.max_percent, 150);
        assert_eq!(config.output, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "log_level = \"debug\"\noutput = \"json\"\n\n[bootstrap]\niterations_ei = 200\nseed = 5\n\n[fold]\nmin_percent = -20"
        )
        .unwrap();

        let config = PaleoConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.bootstrap.iterations_ei, 200);
        assert_eq!(config.bootstrap.iterations_fold, 1000);
        assert_eq!(config.bootstrap.seed, Some(5));
        assert_eq!(config.fold.min_percent, -20);
        assert_eq!(config.fold.max_percent, 150);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PaleoConfig::load_or_default(&dir.path().join("paleo.toml")).unwrap();
        assert_eq!(config, PaleoConfig::default());
    }

    #[test]
    fn test_malformed_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bootstrap]\niterations_ei = \"many\"").unwrap();

        let err = PaleoConfig::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides_applied() {
        let config = PaleoConfig::default()
            .with_overrides(lookup(&[
                ("PALEO_ITERATIONS", "250"),
                ("PALEO_SEED", "42"),
                ("PALEO_LOG_LEVEL", "warn"),
                ("PALEO_OUTPUT", "JSON"),
            ]))
            .unwrap();

        assert_eq!(config.bootstrap.iterations_ei, 250);
        assert_eq!(config.bootstrap.iterations_fold, 250);
        assert_eq!(config.bootstrap.seed, Some(42));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_unparsable_overrides_collected() {
        let err = PaleoConfig::default()
            .with_overrides(lookup(&[
                ("PALEO_ITERATIONS", "lots"),
                ("PALEO_SEED", "-1"),
                ("PALEO_OUTPUT", "xml"),
            ]))
            .unwrap_err();

        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 3),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = PaleoConfig::default();
        config.log_level = "loud".to_string();

        let errors = validation_errors(config.validate());
        assert!(errors.iter().any(|e| e.contains("log_level")));
    }

    #[test]
    fn test_validate_iteration_bounds() {
        let mut config = PaleoConfig::default();
        config.bootstrap.iterations_ei = 0;
        config.bootstrap.iterations_fold = 2_000_000;

        let errors = validation_errors(config.validate());
        assert!(errors.iter().any(|e| e.contains("iterations_ei")));
        assert!(errors.iter().any(|e| e.contains("exceeds maximum")));
    }

    #[test]
    fn test_validate_fold_range() {
        let mut config = PaleoConfig::default();
        config.fold.min_percent = 100;
        config.fold.max_percent = 0;

        let errors = validation_errors(config.validate());
        assert!(errors.iter().any(|e| e.contains("fold.min_percent")));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
