//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::publish::PublishFormat;

/// Resolve local or production endpoint URLs for a host.
#[derive(Debug, Parser)]
#[command(name = "endpoint-resolver")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (replaces .endpoints/config.yml and config.local.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only print data and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Resolve arguments used when no subcommand is given
    #[command(flatten)]
    pub resolve: ResolveArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the endpoints for a host (default if no command specified)
    Resolve(ResolveArgs),

    /// Show each configured URL and where it came from
    Config(ConfigArgs),

    /// Validate the endpoint configuration
    Check,

    /// Print the JSON Schema for the config file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Host identifier to classify, e.g. "localhost" or "app.example.com"
    #[arg(long, env = "ENDPOINTS_HOST", conflicts_with = "url")]
    pub host: Option<String>,

    /// Full address to take the host from, e.g. "http://localhost:3000/"
    #[arg(long, value_name = "ADDRESS")]
    pub url: Option<String>,

    /// Output format: env, json or yaml
    #[arg(short, long, default_value_t = PublishFormat::Env)]
    pub format: PublishFormat,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
