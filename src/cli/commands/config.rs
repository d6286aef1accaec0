//! Config command implementation.
//!
//! The `endpoint-resolver config` command shows every layered URL together
//! with the source that supplied it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ConfigArgs;
use crate::config::{all_keys, build_layers, config_files, config_key, validate_config, LayerStack};
use crate::error::{ResolverError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// One row of the config listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    /// Dotted config key.
    pub key: String,
    /// Winning value, if any layer sets the key.
    pub value: Option<String>,
    /// Source of the winning value.
    pub source: Option<String>,
}

/// Flatten a layer stack into listing rows.
pub fn config_entries(stack: &LayerStack) -> Vec<ConfigEntry> {
    all_keys()
        .map(|(tier, field)| {
            let key = config_key(tier, field);
            ConfigEntry {
                value: stack.get(&key).map(str::to_string),
                source: stack.source_of(&key).map(str::to_string),
                key,
            }
        })
        .collect()
}

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let stack = build_layers(
            &self.project_root,
            self.config_override.as_deref(),
            |key| std::env::var(key),
        )?;
        let entries = config_entries(&stack);

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| ResolverError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let files = config_files(&self.project_root, self.config_override.as_deref());
            if files.is_empty() {
                ui.message("# no config files found");
            }
            for path in &files {
                ui.message(&format!("# {}", path.display()));
            }
            ui.message("");

            let width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);
            for entry in &entries {
                ui.message(&format!(
                    "{:width$}  {}  ({})",
                    entry.key,
                    entry.value.as_deref().unwrap_or("<not set>"),
                    entry.source.as_deref().unwrap_or("unset"),
                    width = width
                ));
            }
        }

        for error in validate_config(&stack.to_config()) {
            ui.warning(&error.message);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".endpoints");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    const CONFIG: &str = r#"
production:
  ws: wss://chat.example.com
  http: https://chat.example.com
"#;

    #[test]
    fn lists_values_with_sources() {
        let temp = setup_project(CONFIG);
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("config.yml"));
        assert!(ui.has_message("local.ws         ws://localhost:8000  (built-in default)"));
        let production = ui
            .messages()
            .iter()
            .find(|m| m.starts_with("production.http"))
            .unwrap();
        assert!(production.contains("https://chat.example.com"));
        assert!(production.contains(".endpoints"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn warns_about_missing_production() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("# no config files found"));
        assert!(ui.has_message("<not set>"));
        assert!(ui.has_warning("production.http is not configured"));
    }

    #[test]
    fn json_output() {
        let temp = setup_project(CONFIG);
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0]["key"], "local.ws");
        assert_eq!(entries[0]["source"], "built-in default");
        assert_eq!(entries[3]["value"], "https://chat.example.com");
    }

    #[test]
    fn parse_errors_propagate() {
        let temp = setup_project("production: [");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui);
        assert!(matches!(result, Err(ResolverError::ConfigParseError { .. })));
    }
}
