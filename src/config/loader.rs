//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{LedgerError, LedgerResult};

use super::types::AppConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "PAYROLL_CONFIG";

/// Configuration file used when [`CONFIG_ENV_VAR`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config/payroll.yaml";

/// Loads and provides access to the application configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind: "127.0.0.1:8080"
/// storage:
///   data_dir: "./data"
///   employees_file: "employees.csv"
///   payroll_file: "payroll.csv"
/// ```
///
/// Every key is optional.
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Tables live in {}", loader.config().storage.data_dir.display());
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    source: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for [`AppConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        info!(path = %path_str, "Loaded configuration");

        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> LedgerResult<Self> {
        Ok(Self {
            config: Self::parse(content, "<inline>")?,
            source: None,
        })
    }

    /// Loads the configuration the binary should use.
    ///
    /// If `PAYROLL_CONFIG` is set, that file must exist. Otherwise
    /// `config/payroll.yaml` is read when present, and built-in defaults are
    /// used when it is not.
    pub fn from_env() -> LedgerResult<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::load(path),
            Err(_) => Self::load_or_default(DEFAULT_CONFIG_PATH),
        }
    }

    /// Loads `path` if it exists, otherwise returns the default configuration.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self {
                config: AppConfig::default(),
                source: None,
            })
        }
    }

    fn parse(content: &str, path: &str) -> LedgerResult<AppConfig> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| LedgerError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// The file the configuration came from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
