//! Output format handling for graphtree
//!
//! Supports two output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//!
//! Infinite costs are never written as numbers: human output uses
//! `inf` / `unreachable`, JSON uses `null` plus a `reachable` flag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GraphTreeError;
use crate::graph::{Cost, PathResult, RejectedEdge};

/// Output format for graphtree commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(GraphTreeError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Human rendering of a path query
pub fn path_to_human(source: &str, target: &str, result: &PathResult) -> String {
    if result.is_reachable() {
        format!(
            "Shortest path from {} to {}: {}\nWeighted sum of the shortest path: {}",
            source,
            target,
            result.path.join(" -> "),
            result.total_weight
        )
    } else {
        format!(
            "No path from {} to {}\nWeighted sum of the shortest path: unreachable",
            source, target
        )
    }
}

pub fn path_to_json(source: &str, target: &str, result: &PathResult) -> Value {
    serde_json::json!({
        "source": source,
        "target": target,
        "path": result.path,
        "total_weight": result.total_weight.to_json(),
        "reachable": result.is_reachable(),
        "hops": result.hops(),
    })
}

/// One `label: distance` line per node
pub fn distances_to_human(source: &str, distances: &[(&str, Cost)]) -> String {
    let mut out = format!("Distances from {}:", source);
    for (label, cost) in distances {
        out.push_str(&format!("\n  {}: {}", label, cost));
    }
    out
}

pub fn distances_to_json(source: &str, distances: &[(&str, Cost)]) -> Value {
    let entries: Vec<Value> = distances
        .iter()
        .map(|(label, cost)| {
            serde_json::json!({
                "label": label,
                "distance": cost.to_json(),
                "reachable": cost.is_finite(),
            })
        })
        .collect();
    serde_json::json!({ "source": source, "distances": entries })
}

/// Human rendering of an inorder traversal; `None` means the label was not found
pub fn traversal_to_human(label: &str, labels: Option<&[String]>) -> String {
    match labels {
        Some(labels) => format!(
            "Inorder traversal of subtree rooted at node {}:\n{}",
            label,
            labels.join(" ")
        ),
        None => format!("Node {} not found in the tree.", label),
    }
}

pub fn traversal_to_json(label: &str, labels: Option<&[String]>) -> Value {
    serde_json::json!({
        "label": label,
        "found": labels.is_some(),
        "inorder": labels.unwrap_or_default(),
    })
}

/// Warning line for an edge skipped while building the graph
pub fn rejected_to_human(rejected: &RejectedEdge) -> String {
    format!("warning: {}", rejected)
}

/// Structured warning for an edge skipped while building the graph
pub fn rejected_to_json(rejected: &RejectedEdge) -> Value {
    serde_json::json!({ "warning": { "rejected_edge": rejected } })
}
