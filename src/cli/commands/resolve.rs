//! Resolve command implementation.
//!
//! The `endpoint-resolver resolve` command classifies a host and prints the
//! matching `API_URL` / `WS_URL` pair.

use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::config::load_config;
use crate::environment::{host_from_address, ResolvedEndpoints};
use crate::error::Result;
use crate::publish::render;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ResolveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// The host identifier this command will classify.
    ///
    /// `--host` is used as given. `--url` contributes its host portion. With
    /// neither, or an address without a host, the host is empty and
    /// classifies as production.
    pub fn host(&self) -> String {
        if let Some(host) = &self.args.host {
            return host.clone();
        }

        match &self.args.url {
            Some(address) => host_from_address(address).unwrap_or_else(|| {
                tracing::debug!("No host in address '{}', treating host as empty", address);
                String::new()
            }),
            None => {
                tracing::debug!("No host given, treating host as empty");
                String::new()
            }
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        let resolved = ResolvedEndpoints::resolve(&self.host(), &config);

        let rendered = render(&resolved, self.args.format)?;
        ui.message(rendered.trim_end_matches('\n'));

        Ok(CommandResult::success())
    }
}
