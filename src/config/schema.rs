//! Configuration schema types
//!
//! This module defines the configuration structure for Roster. The endpoint
//! is an explicit configuration value injected at startup, replacing the
//! global mutable constant of the original client.

use serde::{Deserialize, Serialize};

/// Main Roster configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Directory endpoint configuration
    pub directory: DirectoryConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RosterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.directory.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name (used in logging)
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Directory endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// URL of the directory endpoint (search and export share it)
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// Disable only against development endpoints with self-signed
    /// certificates.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl DirectoryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("directory.endpoint cannot be empty".to_string());
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err("directory.endpoint must start with http:// or https://".to_string());
        }

        if url::Url::parse(&self.endpoint).is_err() {
            return Err(format!(
                "directory.endpoint is not a valid URL: {}",
                self.endpoint
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("directory.timeout_seconds must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/employees".to_string(),
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the date-stamped spreadsheet is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Whether transport-level export failures retry via the GET fallback
    #[serde(default = "default_true")]
    pub fallback_enabled: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            fallback_enabled: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging (console logging is always on)
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation (daily or hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_app_name() -> String {
    "roster".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> RosterConfig {
        RosterConfig {
            application: ApplicationConfig::default(),
            directory: DirectoryConfig::default(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level_fails() {
        let mut config = valid_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_endpoint_fails() {
        let mut config = valid_config();
        config.directory.endpoint = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_without_scheme_fails() {
        let mut config = valid_config();
        config.directory.endpoint = "directory.example.com/employees".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_fails() {
        let mut config = valid_config();
        config.directory.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_output_dir_fails() {
        let mut config = valid_config();
        config.export.output_dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_fails() {
        let mut config = valid_config();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_minimal_toml_applies_defaults() {
        let config: RosterConfig = toml::from_str(
            r#"
[directory]
endpoint = "https://directory.example.com/employees"
"#,
        )
        .unwrap();

        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.directory.timeout_seconds, 30);
        assert!(config.directory.tls_verify);
        assert_eq!(config.export.output_dir, ".");
        assert!(config.export.fallback_enabled);
        assert!(!config.logging.local_enabled);
        assert!(config.validate().is_ok());
    }
}
