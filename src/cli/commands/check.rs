//! Check command implementation.
//!
//! The `endpoint-resolver check` command validates the layered endpoint
//! configuration and reports every problem it finds.

use std::path::{Path, PathBuf};

use crate::config::{build_layers, validate_config};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_override: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let stack = build_layers(
            &self.project_root,
            self.config_override.as_deref(),
            |key| std::env::var(key),
        )?;
        let errors = validate_config(&stack.to_config());

        if errors.is_empty() {
            ui.success("Endpoint configuration is valid");
            return Ok(CommandResult::success());
        }

        for error in &errors {
            ui.error(&format!("[{}] {}", error.rule, error.message));
        }
        let noun = if errors.len() == 1 { "problem" } else { "problems" };
        ui.error(&format!("Found {} {}", errors.len(), noun));

        Ok(CommandResult::failure(1))
    }
}
