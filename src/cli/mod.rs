//! CLI argument parsing for graphtree
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use graphtree_core::format::OutputFormat;
use parse::parse_output_format;

/// Graphtree - shortest paths and subtree traversal
#[derive(Parser, Debug)]
#[command(name = "graphtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML file describing the graph and the tree (built-in data if omitted)
    #[arg(long, global = true, env = "GRAPHTREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `debug` or `graphtree_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest path between two graph nodes
    Path {
        /// Source node label
        source: String,

        /// Target node label
        target: String,
    },

    /// Distance from one graph node to every other node
    Distances {
        /// Source node label
        source: String,
    },

    /// Inorder traversal of the subtree rooted at the first node with LABEL
    Inorder {
        /// Label of the subtree root
        label: String,
    },

    /// List graph node labels and tree labels
    Labels,
}
