use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FreqError, FreqResult};

/// Rules the table scanner matches against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Substrings that must all appear in the header line
    pub required_columns: Vec<String>,

    /// Cell delimiter; header and data rows start with it
    pub delimiter: char,

    /// Leading character of border/separator lines
    pub border_prefix: char,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            required_columns: vec!["Endpoint".to_string(), "Freq(MHz)".to_string()],
            delimiter: '|',
            border_prefix: '+',
        }
    }
}

impl ScanConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FreqResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FreqError::file_io(path.display().to_string(), e))?;

        let config: ScanConfig = toml::from_str(&content)
            .map_err(|e| FreqError::configuration(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> FreqResult<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| FreqError::configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| FreqError::file_io(path.display().to_string(), e))?;

        Ok(())
    }

    pub fn validate(&self) -> FreqResult<()> {
        if self.required_columns.iter().any(|c| c.is_empty()) {
            return Err(FreqError::configuration("required column names must not be empty"));
        }
        if self.delimiter == self.border_prefix {
            return Err(FreqError::configuration(format!(
                "delimiter and border prefix are both '{}'",
                self.delimiter
            )));
        }
        if self.delimiter.is_whitespace() || self.border_prefix.is_whitespace() {
            // Lines are trimmed before matching, so these could never be seen
            return Err(FreqError::configuration("delimiter and border prefix must be visible characters"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.required_columns, vec!["Endpoint", "Freq(MHz)"]);
        assert_eq!(config.delimiter, '|');
        assert_eq!(config.border_prefix, '+');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = ScanConfig::default();
        config.required_columns = vec!["Port".to_string(), "Speed".to_string()];
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("scan.toml");

        config.save_to_file(&config_path).unwrap();

        let loaded_config = ScanConfig::load_from_file(&config_path).unwrap();
        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("scan.toml");
        fs::write(&config_path, "border_prefix = \"=\"\n").unwrap();

        let config = ScanConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.border_prefix, '=');
        assert_eq!(config.delimiter, '|');
        assert_eq!(config.required_columns.len(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("scan.toml");
        fs::write(&config_path, "delimiter = \"+\"\n").unwrap();

        let err = ScanConfig::load_from_file(&config_path).unwrap_err();
        assert!(matches!(err, FreqError::Configuration { .. }));
    }

    #[test]
    fn test_whitespace_delimiter_rejected() {
        let config = ScanConfig {
            delimiter: ' ',
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let err = ScanConfig::load_from_file(temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, FreqError::FileIO { .. }));
    }
}
