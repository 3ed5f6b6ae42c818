//! `graphtree path` command - shortest path between two graph nodes

use crate::cli::OutputFormat;
use crate::commands::dispatch::{clean_label, CommandContext};
use graphtree_core::error::Result;
use graphtree_core::format::{path_to_human, path_to_json};
use graphtree_core::graph::shortest_path;

/// Execute the path command
pub fn execute(ctx: &CommandContext, source: &str, target: &str) -> Result<()> {
    let config = ctx.load_config()?;
    let label_case = config.graph.label_case;
    let source = label_case.normalize(&clean_label(source, "source")?);
    let target = label_case.normalize(&clean_label(target, "target")?);

    let graph = ctx.build_graph(&config)?;
    let result = shortest_path(&graph, &source, &target)?;

    match ctx.format() {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&path_to_json(&source, &target, &result))?
            );
        }
        OutputFormat::Human => {
            println!("{}", path_to_human(&source, &target, &result));
        }
    }

    Ok(())
}
