//! Configuration schema types.
//!
//! [`EndpointsFile`] is the shape of a YAML config file on disk, where every
//! field is optional so a file may override a single URL. [`EndpointsConfig`]
//! is the fully layered table with both tiers present.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::environment::Tier;

/// Built-in local WebSocket endpoint.
pub const DEFAULT_LOCAL_WS: &str = "ws://localhost:8000";

/// Built-in local HTTP endpoint.
pub const DEFAULT_LOCAL_HTTP: &str = "http://localhost:8000";

/// A pair of endpoint URLs for one deployment tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub struct EndpointConfig {
    /// Base WebSocket endpoint (`ws://` or `wss://`).
    pub ws: String,

    /// Base HTTP endpoint (`http://` or `https://`).
    pub http: String,
}

impl EndpointConfig {
    /// Create an endpoint pair.
    pub fn new(ws: impl Into<String>, http: impl Into<String>) -> Self {
        Self {
            ws: ws.into(),
            http: http.into(),
        }
    }

    /// The built-in local development endpoints.
    pub fn local_default() -> Self {
        Self::new(DEFAULT_LOCAL_WS, DEFAULT_LOCAL_HTTP)
    }

    /// Look up a field by name.
    pub fn field(&self, field: EndpointField) -> &str {
        match field {
            EndpointField::Ws => &self.ws,
            EndpointField::Http => &self.http,
        }
    }
}

/// The endpoint table for both tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Endpoints used when the host is local.
    pub local: EndpointConfig,

    /// Endpoints used for every other host.
    pub production: EndpointConfig,
}

impl EndpointsConfig {
    /// Build a table from its two records.
    pub fn new(local: EndpointConfig, production: EndpointConfig) -> Self {
        Self { local, production }
    }

    /// The record for a tier.
    pub fn for_tier(&self, tier: Tier) -> &EndpointConfig {
        match tier {
            Tier::Local => &self.local,
            Tier::Production => &self.production,
        }
    }
}

/// One of the two URL fields of an [`EndpointConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointField {
    /// WebSocket URL.
    Ws,
    /// HTTP URL.
    Http,
}

impl EndpointField {
    /// Both fields, in output order.
    pub const ALL: [EndpointField; 2] = [EndpointField::Ws, EndpointField::Http];

    /// Field name as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointField::Ws => "ws",
            EndpointField::Http => "http",
        }
    }

    /// URL schemes accepted for this field.
    pub fn allowed_schemes(&self) -> &'static [&'static str] {
        match self {
            EndpointField::Ws => &["ws", "wss"],
            EndpointField::Http => &["http", "https"],
        }
    }
}

/// Dotted key for a tier field, e.g. `production.http`.
pub fn config_key(tier: Tier, field: EndpointField) -> String {
    format!("{}.{}", tier.as_str(), field.as_str())
}

/// All four config keys in display order.
pub fn all_keys() -> impl Iterator<Item = (Tier, EndpointField)> {
    Tier::ALL
        .into_iter()
        .flat_map(|tier| EndpointField::ALL.into_iter().map(move |f| (tier, f)))
}

/// Partial endpoint pair as written in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EndpointOverride {
    /// WebSocket URL for this tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws: Option<String>,

    /// HTTP URL for this tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<String>,
}

impl EndpointOverride {
    /// Look up a field by name.
    pub fn field(&self, field: EndpointField) -> Option<&str> {
        match field {
            EndpointField::Ws => self.ws.as_deref(),
            EndpointField::Http => self.http.as_deref(),
        }
    }
}

/// Endpoint configuration file (`.endpoints/config.yml`).
///
/// # Example
///
/// ```yaml
/// local:
///   ws: ws://localhost:8000
///   http: http://localhost:8000
/// production:
///   ws: wss://api.example.com
///   http: https://api.example.com
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
#[schemars(title = "Endpoint configuration")]
pub struct EndpointsFile {
    /// Endpoints for `localhost` and `127.0.0.1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<EndpointOverride>,

    /// Endpoints for every other host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<EndpointOverride>,
}

impl EndpointsFile {
    /// The override block for a tier, if the file has one.
    pub fn for_tier(&self, tier: Tier) -> Option<&EndpointOverride> {
        match tier {
            Tier::Local => self.local.as_ref(),
            Tier::Production => self.production.as_ref(),
        }
    }
}
