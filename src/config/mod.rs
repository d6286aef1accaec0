//! Endpoint configuration loading, layering, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Source-tracked layering in [`layers`]
//! - Environment variable overrides in [`environment`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use endpoint_resolver::config::{load_config_with_env, EndpointConfig};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".endpoints");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("config.yml"),
//!     "production:\n  ws: wss://api.example.com\n  http: https://api.example.com\n",
//! )
//! .unwrap();
//!
//! let config = load_config_with_env(temp.path(), None, |_| {
//!     Err(std::env::VarError::NotPresent)
//! })
//! .unwrap();
//! assert_eq!(config.local, EndpointConfig::local_default());
//! assert_eq!(config.production.http, "https://api.example.com");
//! ```
//!
//! # Configuration Sources
//!
//! Later sources override earlier ones, key by key:
//! 1. Built-in defaults (local tier only)
//! 2. Project config (`.endpoints/config.yml`)
//! 3. Local overrides (`.endpoints/config.local.yml`)
//! 4. Environment variables (`ENDPOINTS_<TIER>_<FIELD>`)

pub mod environment;
pub mod layers;
pub mod loader;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{
    all_keys, config_key, EndpointConfig, EndpointField, EndpointOverride, EndpointsConfig,
    EndpointsFile, DEFAULT_LOCAL_HTTP, DEFAULT_LOCAL_WS,
};

// Loader re-exports
pub use loader::{
    build_layers, config_files, find_project_root, load_config, load_config_file,
    load_config_with_env, parse_config, ConfigPaths, CONFIG_DIR,
};

// Layer re-exports
pub use layers::{ConfigLayer, LayerStack};

// Environment re-exports
pub use environment::{env_var_name, load_env_overrides_with, ENV_PREFIX, ENV_SOURCE};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};
