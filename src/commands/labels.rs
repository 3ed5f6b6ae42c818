//! `graphtree labels` command - list graph and tree labels

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphtree_core::error::Result;
use graphtree_core::tree::PreOrderIter;

/// Execute the labels command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.load_config()?;
    let graph = ctx.build_graph(&config)?;
    let tree = config.build_tree();
    let tree_labels: Vec<&str> = PreOrderIter::new(tree.as_ref())
        .map(|node| node.label.as_str())
        .collect();

    match ctx.format() {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "graph": graph.labels(),
                "edges": graph.edge_count(),
                "tree": tree_labels,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            println!("Graph nodes: {}", graph.labels().join(" "));
            println!("Graph edges: {}", graph.edge_count());
            println!("Tree nodes (preorder): {}", tree_labels.join(" "));
        }
    }

    Ok(())
}
