//! Configuration file discovery and loading.
//!
//! This module finds the endpoint config files for a project, stacks them
//! on top of the built-in defaults, and applies environment overrides.

use crate::config::environment::load_env_overrides_with;
use crate::config::layers::{ConfigLayer, LayerStack};
use crate::config::schema::{EndpointsConfig, EndpointsFile};
use crate::config::validator::validate;
use crate::error::{ResolverError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project config directory.
pub const CONFIG_DIR: &str = ".endpoints";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.endpoints/config.yml`)
/// 2. Local overrides (`.endpoints/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .endpoints/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .endpoints/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(Self::project_path(project_root)),
            project_local: existing(Self::project_local_path(project_root)),
        }
    }

    /// Where the project config lives, whether or not it exists.
    pub fn project_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_DIR).join("config.yml")
    }

    /// Where local overrides live, whether or not they exist.
    pub fn project_local_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_DIR).join("config.local.yml")
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.endpoints` directory (primary indicator)
/// 2. `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid or has unknown keys.
pub fn load_config_file(path: &Path) -> Result<EndpointsFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ResolverError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ResolverError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into an [`EndpointsFile`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<EndpointsFile> {
    // A blank file is a valid "no overrides" file.
    if content.trim().is_empty() {
        return Ok(EndpointsFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| ResolverError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// The config files to read, in merge order.
///
/// `config_override` replaces discovery entirely.
pub fn config_files(project_root: &Path, config_override: Option<&Path>) -> Vec<PathBuf> {
    match config_override {
        Some(path) => vec![path.to_path_buf()],
        None => ConfigPaths::discover(project_root)
            .all_existing()
            .into_iter()
            .cloned()
            .collect(),
    }
}

/// Build the layer stack for a project.
///
/// Layers, lowest priority first:
/// 1. Built-in defaults
/// 2. `config_override` if given, else discovered project files
/// 3. Environment variables (looked up through `env_fn`)
pub fn build_layers<F>(
    project_root: &Path,
    config_override: Option<&Path>,
    env_fn: F,
) -> Result<LayerStack>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let mut stack = LayerStack::new();
    stack.push(ConfigLayer::defaults());

    for path in config_files(project_root, config_override) {
        tracing::debug!("Loading endpoint config from {}", path.display());
        let file = load_config_file(&path)?;
        stack.push(ConfigLayer::from_file(&file, path.display().to_string()));
    }

    stack.push(load_env_overrides_with(env_fn));
    tracing::debug!(layers = stack.layer_count(), "Built endpoint config layers");
    Ok(stack)
}

/// Load and validate the endpoint table using a custom env lookup.
pub fn load_config_with_env<F>(
    project_root: &Path,
    config_override: Option<&Path>,
    env_fn: F,
) -> Result<EndpointsConfig>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let config = build_layers(project_root, config_override, env_fn)?.to_config();
    validate(&config)?;
    Ok(config)
}

/// Load and validate the endpoint table from files and the process environment.
///
/// If `config_override` is provided, only that file is read; otherwise the
/// project's `.endpoints/config.yml` and `.endpoints/config.local.yml` are
/// stacked when present. Environment variables always apply last.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `config_override` does not exist.
/// Returns `ConfigParseError` if any config file is invalid.
/// Returns `ConfigValidationError` if a URL is missing or malformed.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<EndpointsConfig> {
    load_config_with_env(project_root, config_override, |key| std::env::var(key))
}
