//! Configuration layering.
//!
//! Each configuration source contributes a [`ConfigLayer`] of dotted keys
//! (`local.ws`, `production.http`, ...). A [`LayerStack`] resolves each key
//! to the value from the highest-priority layer that sets it, and remembers
//! which source that was.

use std::collections::HashMap;

use crate::config::schema::{
    all_keys, config_key, EndpointConfig, EndpointField, EndpointsConfig, EndpointsFile,
};
use crate::environment::Tier;

/// A single source's contributions.
///
/// # Example
///
/// ```
/// use endpoint_resolver::config::ConfigLayer;
///
/// let mut layer = ConfigLayer::new(".endpoints/config.yml");
/// layer.set("production.http", "https://api.example.com");
///
/// assert_eq!(layer.get("production.http"), Some("https://api.example.com"));
/// assert_eq!(layer.source, ".endpoints/config.yml");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLayer {
    /// Values in this layer, keyed by dotted config key.
    pub values: HashMap<String, String>,
    /// Where this layer came from (file path, "environment", ...).
    pub source: String,
}

impl ConfigLayer {
    /// Create an empty layer with the given source name.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            values: HashMap::new(),
            source: source.into(),
        }
    }

    /// The built-in defaults layer. Only the local tier has defaults.
    pub fn defaults() -> Self {
        let mut layer = Self::new("built-in default");
        layer.set_record(Tier::Local, &EndpointConfig::local_default());
        layer
    }

    /// Flatten a parsed config file into a layer.
    pub fn from_file(file: &EndpointsFile, source: impl Into<String>) -> Self {
        let mut layer = Self::new(source);
        for (tier, field) in all_keys() {
            if let Some(value) = file.for_tier(tier).and_then(|o| o.field(field)) {
                layer.set(config_key(tier, field), value);
            }
        }
        layer
    }

    /// Set a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Set both fields of a tier.
    pub fn set_record(&mut self, tier: Tier, record: &EndpointConfig) {
        for field in EndpointField::ALL {
            self.set(config_key(tier, field), record.field(field));
        }
    }

    /// Get a value set in this layer.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of values in this layer.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this layer sets nothing.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered stack of layers, lowest priority first.
///
/// # Example
///
/// ```
/// use endpoint_resolver::config::{ConfigLayer, LayerStack};
///
/// let mut stack = LayerStack::new();
/// stack.push(ConfigLayer::defaults());
///
/// let mut env = ConfigLayer::new("environment");
/// env.set("local.http", "http://localhost:9000");
/// stack.push(env);
///
/// assert_eq!(stack.get("local.http"), Some("http://localhost:9000"));
/// assert_eq!(stack.get("local.ws"), Some("ws://localhost:8000"));
/// assert_eq!(stack.source_of("local.http"), Some("environment"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    layers: Vec<ConfigLayer>,
}

impl LayerStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { layers: vec![] }
    }

    /// Add a layer above every existing one.
    pub fn push(&mut self, layer: ConfigLayer) {
        self.layers.push(layer);
    }

    /// The winning value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.layers.iter().rev().find_map(|layer| layer.get(key))
    }

    /// The source of the winning value for a key.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.values.contains_key(key))
            .map(|layer| layer.source.as_str())
    }

    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Collapse the stack into an endpoint table.
    ///
    /// Unset keys become empty strings; validation reports them.
    pub fn to_config(&self) -> EndpointsConfig {
        let record = |tier: Tier| {
            let value = |field| {
                self.get(&config_key(tier, field))
                    .unwrap_or_default()
                    .to_string()
            };
            EndpointConfig {
                ws: value(EndpointField::Ws),
                http: value(EndpointField::Http),
            }
        };

        EndpointsConfig::new(record(Tier::Local), record(Tier::Production))
    }
}
