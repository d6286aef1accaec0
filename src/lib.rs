//! endpoint-resolver - pick local or production endpoint URLs for a host.
//!
//! A host identifier of exactly `localhost` or `127.0.0.1` selects the local
//! tier; anything else, including an empty host, selects production. The
//! selected tier's HTTP and WebSocket URLs are returned as `API_URL` and
//! `WS_URL`. Tier URLs come from configuration rather than source code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, layering, and validation
//! - [`environment`] - Tier classification and endpoint resolution
//! - [`error`] - Error types and result aliases
//! - [`publish`] - Rendering resolved endpoints as `API_URL` / `WS_URL`
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use endpoint_resolver::config::{EndpointConfig, EndpointsConfig};
//! use endpoint_resolver::environment::resolve_endpoints;
//!
//! let config = EndpointsConfig::new(
//!     EndpointConfig::local_default(),
//!     EndpointConfig::new("wss://api.example.com", "https://api.example.com"),
//! );
//!
//! let endpoints = resolve_endpoints("example.com", &config);
//! assert_eq!(endpoints.http, "https://api.example.com");
//! assert_eq!(endpoints.ws, "wss://api.example.com");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod publish;
pub mod ui;

pub use environment::{resolve_endpoints, ResolvedEndpoints, Tier};
pub use error::{ResolverError, Result};
