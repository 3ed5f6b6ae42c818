//! `graphtree inorder` command - inorder traversal of a labelled subtree

use crate::cli::OutputFormat;
use crate::commands::dispatch::{clean_label, CommandContext};
use graphtree_core::error::Result;
use graphtree_core::format::{traversal_to_human, traversal_to_json};
use graphtree_core::tree::{find_subtree, inorder_traversal};

/// Execute the inorder command.
///
/// A label that matches no node is reported on stdout and is not an error.
pub fn execute(ctx: &CommandContext, label: &str) -> Result<()> {
    let config = ctx.load_config()?;
    let label = clean_label(label, "subtree")?;

    let tree = config.build_tree();
    let labels = find_subtree(tree.as_ref(), label.as_str())
        .map(|subtree| inorder_traversal(Some(subtree)));

    match ctx.format() {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&traversal_to_json(&label, labels.as_deref()))?
            );
        }
        OutputFormat::Human => {
            println!("{}", traversal_to_human(&label, labels.as_deref()));
        }
    }

    Ok(())
}
