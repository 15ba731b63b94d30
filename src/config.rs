//! Calculator configuration file support.
//!
//! Settings are read from an optional TOML file. Every section and key may
//! be omitted; missing values fall back to the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ArccosError;
use crate::series::SeriesConfig;

/// File name searched for by `CalculatorConfig::from_default_location`.
pub const DEFAULT_CONFIG_FILE: &str = "arcseries.toml";

/// Calculator configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub series: SeriesConfig,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// How an evaluation is rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_input_precision")]
    pub input_precision: usize,
    #[serde(default = "default_radian_precision")]
    pub radian_precision: usize,
    #[serde(default = "default_degree_precision")]
    pub degree_precision: usize,
    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
}

fn default_input_precision() -> usize {
    6
}

fn default_radian_precision() -> usize {
    10
}

fn default_degree_precision() -> usize {
    6
}

fn default_show_timing() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            input_precision: default_input_precision(),
            radian_precision: default_radian_precision(),
            degree_precision: default_degree_precision(),
            show_timing: default_show_timing(),
        }
    }
}

impl CalculatorConfig {
    /// Parses configuration from TOML text and validates the series settings.
    pub fn from_toml_str(content: &str) -> Result<Self, ArccosError> {
        let config: CalculatorConfig = toml::from_str(content).map_err(|e| ArccosError::InvalidConfig {
            message: format!("Failed to parse config file: {}", e),
        })?;
        config.series.validate()?;
        Ok(config)
    }

    /// Load calculator configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(CalculatorConfig)` if successful
    /// * `Err(ArccosError::InvalidConfig)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ArccosError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ArccosError::InvalidConfig {
            message: format!("Failed to read config file {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from `arcseries.toml` in `dir`, or defaults if there is none.
    ///
    /// A file that exists but is invalid is still an error.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ArccosError> {
        let path: PathBuf = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from the current working directory, or defaults.
    pub fn from_default_location() -> Result<Self, ArccosError> {
        Self::from_dir(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_TAYLOR_SERIES_TERMS, TAYLOR_SERIES_TOLERANCE};
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.series.max_terms, MAX_TAYLOR_SERIES_TERMS);
        assert_eq!(config.series.tolerance, TAYLOR_SERIES_TOLERANCE);
        assert_eq!(config.display.radian_precision, 10);
        assert!(config.display.show_timing);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let toml = r#"
            [series]
            max_terms = 40

            [display]
            show_timing = false
        "#;
        let config = CalculatorConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.series.max_terms, 40);
        assert_eq!(config.series.tolerance, TAYLOR_SERIES_TOLERANCE);
        assert!(!config.display.show_timing);
        assert_eq!(config.display.degree_precision, 6);
    }

    #[test]
    fn invalid_series_settings_are_rejected() {
        let err = CalculatorConfig::from_toml_str("[series]\nmax_terms = 0\n").unwrap_err();
        assert!(matches!(err, ArccosError::InvalidConfig { .. }));

        let err = CalculatorConfig::from_toml_str("[series]\ntolerance = -1.0\n").unwrap_err();
        assert!(matches!(err, ArccosError::InvalidConfig { .. }));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = CalculatorConfig::from_toml_str("[series\nmax_terms = ").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Failed to parse config file"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CalculatorConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ArccosError::InvalidConfig { .. }));
    }

    #[test]
    fn directory_lookup() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(CalculatorConfig::from_dir(dir.path()).unwrap(), CalculatorConfig::default());

        let mut file = fs::File::create(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        writeln!(file, "[display]\nradian_precision = 4").unwrap();
        let config = CalculatorConfig::from_dir(dir.path()).unwrap();
        assert_eq!(config.display.radian_precision, 4);
    }
}
