//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use graphtree_core::bail_usage;
use graphtree_core::config::Config;
use graphtree_core::error::Result;
use graphtree_core::format::{rejected_to_human, rejected_to_json};
use graphtree_core::graph::AdjacencyMatrix;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn format(&self) -> OutputFormat {
        self.cli.format
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Load `--config`, or the built-in data when no file was given
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load_or_builtin(self.cli.config.as_deref())?;
        debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(config)
    }

    /// Build the configured graph, reporting every skipped edge on stderr
    pub fn build_graph(&self, config: &Config) -> Result<AdjacencyMatrix> {
        let outcome = config.build_graph()?;
        if !self.quiet() {
            for rejected in &outcome.rejected {
                match self.format() {
                    OutputFormat::Json => eprintln!("{}", rejected_to_json(rejected)),
                    OutputFormat::Human => eprintln!("{}", rejected_to_human(rejected)),
                }
            }
        }
        debug!(elapsed = ?self.start.elapsed(), "build_graph");
        Ok(outcome.graph)
    }
}

/// Trim a raw label argument, rejecting blank input
pub fn clean_label(raw: &str, what: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail_usage!(format!("{} label must not be empty", what));
    }
    Ok(trimmed.to_string())
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphtree {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths on weighted graphs and subtree traversal on binary trees.");
        println!();
        println!("Run `graphtree --help` for usage information.");
        Ok(())
    }
}
