//! Configuration types.
//!
//! These structs mirror the YAML configuration file. Every field has a
//! default, so an empty file (or no file at all) yields a working setup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Where the tables live on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the table files. Created on first use.
    pub data_dir: PathBuf,
    /// File name of the employees table inside `data_dir`.
    pub employees_file: String,
    /// File name of the payroll table inside `data_dir`.
    pub payroll_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            employees_file: "employees.csv".to_string(),
            payroll_file: "payroll.csv".to_string(),
        }
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Table storage settings.
    pub storage: StorageConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_working_directory_tables() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.storage.data_dir, PathBuf::from("."));
        assert_eq!(config.storage.employees_file, "employees.csv");
        assert_eq!(config.storage.payroll_file, "payroll.csv");
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "storage:\n  data_dir: /var/lib/payroll\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/payroll"));
        assert_eq!(config.storage.payroll_file, "payroll.csv");
    }
}
