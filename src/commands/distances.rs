//! `graphtree distances` command - distance from one node to all others

use crate::cli::OutputFormat;
use crate::commands::dispatch::{clean_label, CommandContext};
use graphtree_core::error::Result;
use graphtree_core::format::{distances_to_human, distances_to_json};
use graphtree_core::graph::dijkstra;

/// Execute the distances command
pub fn execute(ctx: &CommandContext, source: &str) -> Result<()> {
    let config = ctx.load_config()?;
    let source = config
        .graph
        .label_case
        .normalize(&clean_label(source, "source")?);

    let graph = ctx.build_graph(&config)?;
    let tree = dijkstra(&graph, &source)?;
    let distances = tree.distances();

    match ctx.format() {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&distances_to_json(&source, &distances))?
            );
        }
        OutputFormat::Human => {
            println!("{}", distances_to_human(&source, &distances));
        }
    }

    Ok(())
}
