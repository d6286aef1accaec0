//! Environment variable overrides.
//!
//! Every config key can be overridden from the process environment:
//!
//! | Key               | Variable                    |
//! |-------------------|-----------------------------|
//! | `local.ws`        | `ENDPOINTS_LOCAL_WS`        |
//! | `local.http`      | `ENDPOINTS_LOCAL_HTTP`      |
//! | `production.ws`   | `ENDPOINTS_PRODUCTION_WS`   |
//! | `production.http` | `ENDPOINTS_PRODUCTION_HTTP` |
//!
//! Empty variables are ignored.

use crate::config::layers::ConfigLayer;
use crate::config::schema::{all_keys, config_key, EndpointField};
use crate::environment::Tier;

/// Prefix shared by all override variables.
pub const ENV_PREFIX: &str = "ENDPOINTS";

/// Source label for the environment layer.
pub const ENV_SOURCE: &str = "environment";

/// Name of the variable that overrides a config key.
pub fn env_var_name(tier: Tier, field: EndpointField) -> String {
    format!(
        "{}_{}_{}",
        ENV_PREFIX,
        tier.as_str().to_uppercase(),
        field.as_str().to_uppercase()
    )
}

/// Build the override layer, looking variables up through `env_fn`.
///
/// Pass `|key| std::env::var(key)` to read the process environment.
pub fn load_env_overrides_with<F>(env_fn: F) -> ConfigLayer
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let mut layer = ConfigLayer::new(ENV_SOURCE);

    for (tier, field) in all_keys() {
        let var = env_var_name(tier, field);
        match env_fn(&var) {
            Ok(value) if !value.is_empty() => {
                tracing::debug!("Config override {} from {}", config_key(tier, field), var);
                layer.set(config_key(tier, field), value);
            }
            _ => {}
        }
    }

    layer
}
