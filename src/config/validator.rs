//! Configuration validation rules.
//!
//! Every one of the four endpoint URLs must be:
//! - Present and non-empty (`missing-url`)
//! - An absolute URL with a host and no whitespace (`invalid-url`)
//! - Using a scheme that fits its field (`wrong-scheme`)
//!
//! Reachability is never checked.

use crate::config::environment::env_var_name;
use crate::config::schema::{all_keys, config_key, EndpointField, EndpointsConfig};
use crate::environment::Tier;
use crate::error::{ResolverError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Dotted config key the error is about
    pub key: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &EndpointsConfig) -> Vec<ValidationError> {
    all_keys()
        .filter_map(|(tier, field)| check_url(tier, field, config.for_tier(tier).field(field)))
        .collect()
}

fn check_url(tier: Tier, field: EndpointField, value: &str) -> Option<ValidationError> {
    let key = config_key(tier, field);
    let error = |rule: &str, message: String| ValidationError {
        rule: rule.to_string(),
        message,
        key: key.clone(),
    };

    if value.trim().is_empty() {
        return Some(error(
            "missing-url",
            format!(
                "{} is not configured (set it in .endpoints/config.yml or {})",
                key,
                env_var_name(tier, field)
            ),
        ));
    }

    // The url parser silently drops tabs and newlines; the raw value is what gets published.
    if value.chars().any(char::is_whitespace) {
        return Some(error(
            "invalid-url",
            format!("{} contains whitespace: '{}'", key, value.escape_default()),
        ));
    }

    // http(s) and ws(s) are special schemes, so a successful parse has a host.
    let parsed = match url::Url::parse(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            return Some(error(
                "invalid-url",
                format!("{} is not a valid URL '{}': {}", key, value, e),
            ))
        }
    };

    let allowed = field.allowed_schemes();
    if !allowed.contains(&parsed.scheme()) {
        return Some(error(
            "wrong-scheme",
            format!(
                "{} must use {} but '{}' uses '{}'",
                key,
                allowed.join(" or "),
                value,
                parsed.scheme()
            ),
        ));
    }

    None
}

/// Validate a configuration, returning one error that lists every problem.
pub fn validate(config: &EndpointsConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(ResolverError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
