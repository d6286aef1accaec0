//! Endpoint resolution.
//!
//! Maps a host identifier to one of the two endpoint records:
//! 1. Classify the host ([`Tier::classify`])
//! 2. Select that tier's record from the configuration
//!
//! Resolution is a pure function of the host and the configuration. The
//! result is handed back to the caller rather than stored anywhere.

use super::detection::Tier;
use crate::config::schema::{EndpointConfig, EndpointsConfig};

/// A resolved endpoint pair with the host and tier it was chosen for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedEndpoints {
    /// The host identifier that was classified.
    pub host: String,
    /// The tier the host classified as.
    pub tier: Tier,
    /// The selected record, copied whole from the configuration.
    pub endpoints: EndpointConfig,
}

impl ResolvedEndpoints {
    /// Resolve the endpoints for a host.
    ///
    /// # Example
    ///
    /// ```
    /// use endpoint_resolver::config::{EndpointConfig, EndpointsConfig};
    /// use endpoint_resolver::environment::{ResolvedEndpoints, Tier};
    ///
    /// let config = EndpointsConfig::new(
    ///     EndpointConfig::local_default(),
    ///     EndpointConfig::new("wss://api.example.com", "https://api.example.com"),
    /// );
    ///
    /// let resolved = ResolvedEndpoints::resolve("localhost", &config);
    /// assert_eq!(resolved.tier, Tier::Local);
    /// assert_eq!(resolved.api_url(), "http://localhost:8000");
    /// assert_eq!(resolved.ws_url(), "ws://localhost:8000");
    /// ```
    pub fn resolve(host: &str, config: &EndpointsConfig) -> Self {
        let tier = Tier::classify(host);
        tracing::debug!(host, %tier, "Resolved endpoint tier");

        Self {
            host: host.to_string(),
            tier,
            endpoints: config.for_tier(tier).clone(),
        }
    }

    /// Base HTTP endpoint, published as `API_URL`.
    pub fn api_url(&self) -> &str {
        &self.endpoints.http
    }

    /// Base WebSocket endpoint, published as `WS_URL`.
    pub fn ws_url(&self) -> &str {
        &self.endpoints.ws
    }
}

/// Resolve the endpoint record for a host.
///
/// Shorthand for [`ResolvedEndpoints::resolve`] when only the record is
/// needed.
pub fn resolve_endpoints(host: &str, config: &EndpointsConfig) -> EndpointConfig {
    ResolvedEndpoints::resolve(host, config).endpoints
}
