//! Configuration type definitions

use crate::tree::TreeSpec;
use serde::{Deserialize, Serialize};

/// Top-level configuration: one graph and one tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Weighted undirected graph
    #[serde(default)]
    pub graph: GraphConfig,

    /// Binary tree
    #[serde(default)]
    pub tree: TreeConfig,
}

/// Graph section: node labels and weighted edges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Node labels, in matrix index order
    #[serde(default)]
    pub nodes: Vec<String>,

    /// Undirected edges; later entries for the same pair win
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,

    /// How raw label input is normalized before lookup
    #[serde(default)]
    pub label_case: LabelCase,
}

/// One `[[graph.edges]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Normalization applied to user-supplied graph labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelCase {
    /// Use labels as typed (after trimming)
    #[default]
    Preserve,
    /// Upper-case labels before lookup
    Upper,
}

impl LabelCase {
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self {
            LabelCase::Preserve => trimmed.to_string(),
            LabelCase::Upper => trimmed.to_uppercase(),
        }
    }
}

/// Tree section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Root of the tree; absent means an empty tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<TreeSpec>,
}
