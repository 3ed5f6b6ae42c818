//! Command dispatch logic for graphtree

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use graphtree_core::error::Result;
use tracing::debug;

mod command;

pub use command::{clean_label, Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        debug!(command = ?self, "dispatch");
        match self {
            Commands::Path { source, target } => commands::path::execute(ctx, source, target),
            Commands::Distances { source } => commands::distances::execute(ctx, source),
            Commands::Inorder { label } => commands::inorder::execute(ctx, label),
            Commands::Labels => commands::labels::execute(ctx),
        }
    }
}
