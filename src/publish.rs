//! Rendering resolved endpoints for other programs.
//!
//! A resolved pair is handed out as two named values, `API_URL` (the HTTP
//! endpoint) and `WS_URL` (the WebSocket endpoint), in one of a few text
//! formats.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::environment::ResolvedEndpoints;
use crate::error::{ResolverError, Result};

/// Name of the published HTTP endpoint.
pub const API_URL: &str = "API_URL";

/// Name of the published WebSocket endpoint.
pub const WS_URL: &str = "WS_URL";

/// Output format for published endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishFormat {
    /// Single-quoted `KEY='value'` lines, suitable for `source` or a dotenv loader.
    #[default]
    Env,
    /// Pretty-printed JSON object.
    Json,
    /// YAML mapping.
    Yaml,
}

impl FromStr for PublishFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "env" => Ok(Self::Env),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

impl fmt::Display for PublishFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => write!(f, "env"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// The two published values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedEndpoints<'a> {
    #[serde(rename = "API_URL")]
    pub api_url: &'a str,
    #[serde(rename = "WS_URL")]
    pub ws_url: &'a str,
}

impl<'a> From<&'a ResolvedEndpoints> for PublishedEndpoints<'a> {
    fn from(resolved: &'a ResolvedEndpoints) -> Self {
        Self {
            api_url: resolved.api_url(),
            ws_url: resolved.ws_url(),
        }
    }
}

/// Render a resolved pair in the given format.
///
/// Every format ends with a newline.
///
/// # Example
///
/// ```
/// use endpoint_resolver::config::{EndpointConfig, EndpointsConfig};
/// use endpoint_resolver::environment::ResolvedEndpoints;
/// use endpoint_resolver::publish::{render, PublishFormat};
///
/// let config = EndpointsConfig::new(
///     EndpointConfig::local_default(),
///     EndpointConfig::new("wss://api.example.com", "https://api.example.com"),
/// );
/// let resolved = ResolvedEndpoints::resolve("localhost", &config);
///
/// assert_eq!(
///     render(&resolved, PublishFormat::Env).unwrap(),
///     "API_URL='http://localhost:8000'\nWS_URL='ws://localhost:8000'\n"
/// );
/// ```
pub fn render(resolved: &ResolvedEndpoints, format: PublishFormat) -> Result<String> {
    let published = PublishedEndpoints::from(resolved);

    match format {
        PublishFormat::Env => Ok(format!(
            "{}={}\n{}={}\n",
            API_URL,
            shell_quote(published.api_url),
            WS_URL,
            shell_quote(published.ws_url)
        )),
        PublishFormat::Json => {
            let mut json = serde_json::to_string_pretty(&published)
                .map_err(|e| ResolverError::Other(e.into()))?;
            json.push('\n');
            Ok(json)
        }
        PublishFormat::Yaml => {
            serde_yaml::to_string(&published).map_err(|e| ResolverError::Other(e.into()))
        }
    }
}

/// Quote a value for a POSIX shell assignment.
///
/// The value is wrapped in single quotes, inside which the shell expands
/// nothing. Embedded single quotes become `'\''`.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
