//! Configuration loading from `formlink.toml`, the environment, and CLI flags.

use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::domain::config::{self, BASE_URL_ENV, CONFIG_FILE};
use crate::domain::{AppError, FormlinkConfig};

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--endpoint`, highest precedence for the base URL.
    pub base_url: Option<String>,
    /// `FORMLINK_BASE_URL`, used when no flag is given.
    pub base_url_env: Option<String>,
    /// `--sheet`.
    pub sheet_path: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Overrides from the process environment only.
    pub fn from_env() -> Self {
        Self { base_url_env: std::env::var(BASE_URL_ENV).ok(), ..Default::default() }
    }
}

/// Load configuration.
///
/// An explicit `path` must exist; the default `./formlink.toml` is optional and
/// falls back to built-in defaults.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<FormlinkConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::ConfigMissing(path.display().to_string()));
            }
            read_config(path)?
        }
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if default_path.exists() { read_config(default_path)? } else { FormlinkConfig::default() }
        }
    };

    apply_overrides(&mut config, overrides)?;
    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<FormlinkConfig, AppError> {
    debug!(path = %path.display(), "reading config");
    let content = std::fs::read_to_string(path)?;
    config::parse_config_content(&content)
}

fn apply_overrides(config: &mut FormlinkConfig, overrides: &ConfigOverrides) -> Result<(), AppError> {
    let base_url = overrides.base_url.as_deref().or(overrides.base_url_env.as_deref());
    if let Some(raw) = base_url.filter(|raw| !raw.trim().is_empty()) {
        config.endpoint.base_url = Url::parse(raw.trim()).map_err(|e| {
            AppError::config_error(format!("Invalid endpoint URL '{}': {}", raw, e))
        })?;
    }
    if let Some(sheet_path) = &overrides.sheet_path {
        config.sheet.path = sheet_path.clone();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn from_env_reads_base_url_variable() {
        unsafe {
            std::env::set_var(BASE_URL_ENV, "http://env.example/");
        }
        let overrides = ConfigOverrides::from_env();
        unsafe {
            std::env::remove_var(BASE_URL_ENV);
        }

        assert_eq!(overrides.base_url_env.as_deref(), Some("http://env.example/"));
        assert_eq!(overrides.base_url, None);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_config(Some(&path), &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, AppError::ConfigMissing(_)));
    }

    #[test]
    fn reads_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("formlink.toml");
        fs::write(&path, "[endpoint]\nbase_url = \"http://localhost:9000/svc\"\n").unwrap();

        let config = load_config(Some(&path), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.endpoint.base_url.as_str(), "http://localhost:9000/svc");
    }

    #[test]
    fn flag_beats_env_beats_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("formlink.toml");
        fs::write(&path, "[endpoint]\nbase_url = \"http://file.example/\"\n").unwrap();

        let env_only = ConfigOverrides {
            base_url_env: Some("http://env.example/".to_string()),
            ..Default::default()
        };
        let config = load_config(Some(&path), &env_only).unwrap();
        assert_eq!(config.endpoint.base_url.as_str(), "http://env.example/");

        let both = ConfigOverrides {
            base_url: Some("http://flag.example/".to_string()),
            base_url_env: Some("http://env.example/".to_string()),
            sheet_path: Some(PathBuf::from("out.csv")),
        };
        let config = load_config(Some(&path), &both).unwrap();
        assert_eq!(config.endpoint.base_url.as_str(), "http://flag.example/");
        assert_eq!(config.sheet.path, PathBuf::from("out.csv"));
    }

    #[test]
    fn invalid_override_url_is_rejected() {
        let mut config = FormlinkConfig::default();
        let overrides =
            ConfigOverrides { base_url: Some("not a url".to_string()), ..Default::default() };
        let err = apply_overrides(&mut config, &overrides).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }
}
