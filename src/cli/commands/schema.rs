//! Schema command implementation.
//!
//! The `endpoint-resolver schema` command prints the JSON Schema for
//! `.endpoints/config.yml`, for editor completion and validation.

use crate::config::EndpointsFile;
use crate::error::{ResolverError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Generate the JSON Schema for the config file.
pub fn config_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(EndpointsFile))
        .unwrap_or(serde_json::Value::Null)
}

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let json = serde_json::to_string_pretty(&config_schema())
            .map_err(|e| ResolverError::Other(e.into()))?;
        ui.message(&json);
        Ok(CommandResult::success())
    }
}
