//! Configuration loading and management for the payroll ledger.
//!
//! This module loads the server and storage settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Listening on {}", config.config().server.bind);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_ENV_VAR, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{AppConfig, ServerConfig, StorageConfig};
