//! Configuration domain models loaded from `formlink.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "formlink.toml";

/// Environment variable overriding `[endpoint].base_url`.
pub const BASE_URL_ENV: &str = "FORMLINK_BASE_URL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormlinkConfig {
    /// Remote form-generation service.
    #[serde(default)]
    pub endpoint: EndpointConfig,
    /// Local sheet file receiving the form link.
    #[serde(default)]
    pub sheet: SheetConfig,
    /// Diagnostic logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl FormlinkConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.endpoint.validate()?;
        self.sheet.validate()?;
        Ok(())
    }
}

/// Settings for the `run-for-cell` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    /// Service root; `/run-for-cell` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds. No client timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Fail on non-2xx responses instead of inspecting the body.
    #[serde(default)]
    pub reject_error_status: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: None, reject_error_status: false }
    }
}

impl EndpointConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "base_url must use http or https, got '{}'",
                self.base_url.scheme()
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("https://REGION-PROJECT.cloudfunctions.net/hr_auto_entrypoint")
        .expect("Default base URL must be valid")
}

/// Location of the local sheet file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetConfig {
    #[serde(default = "default_sheet_path")]
    pub path: PathBuf,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self { path: default_sheet_path() }
    }
}

impl SheetConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_os_str().is_empty() {
            return Err(AppError::config_error("sheet.path must not be empty"));
        }
        Ok(())
    }
}

fn default_sheet_path() -> PathBuf {
    PathBuf::from("sheet.csv")
}

/// Logging settings; `FORMLINK_LOG` takes precedence when set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<FormlinkConfig, AppError> {
    let config: FormlinkConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = FormlinkConfig::default();
        assert_eq!(
            config.endpoint.base_url.as_str(),
            "https://region-project.cloudfunctions.net/hr_auto_entrypoint"
        );
        assert_eq!(config.endpoint.timeout_secs, None);
        assert!(!config.endpoint.reject_error_status);
        assert_eq!(config.sheet.path, PathBuf::from("sheet.csv"));
        assert_eq!(config.log.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_content_uses_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config.sheet.path, PathBuf::from("sheet.csv"));
    }

    #[test]
    fn parses_full_config() {
        let toml = r#"
[endpoint]
base_url = "http://localhost:8080/hr_auto_entrypoint"
timeout_secs = 90
reject_error_status = true

[sheet]
path = "jobs.tsv"

[log]
level = "debug"
"#;
        let config = parse_config_content(toml).unwrap();
        assert_eq!(config.endpoint.base_url.as_str(), "http://localhost:8080/hr_auto_entrypoint");
        assert_eq!(config.endpoint.timeout_secs, Some(90));
        assert!(config.endpoint.reject_error_status);
        assert_eq!(config.sheet.path, PathBuf::from("jobs.tsv"));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = parse_config_content("[endpoint]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = parse_config_content("[endpoint]\nbase_url = \"ftp://example.com\"\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_empty_sheet_path() {
        let err = parse_config_content("[sheet]\npath = \"\"\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(ref m) if m.contains("sheet.path")));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = parse_config_content("[endpoint]\nretries = 3\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }
}
