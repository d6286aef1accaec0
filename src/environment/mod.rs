//! Environment classification and endpoint resolution.
//!
//! Determines which deployment tier a host belongs to and picks that
//! tier's endpoints:
//!
//! 1. `localhost` or `127.0.0.1` → local
//! 2. Anything else (including an empty host) → production

pub mod detection;
pub mod resolver;

pub use detection::{host_from_address, Tier, LOCAL_HOSTS};
pub use resolver::{resolve_endpoints, ResolvedEndpoints};
