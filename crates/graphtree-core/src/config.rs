//! Configuration for graphtree
//!
//! A TOML file describes the graph (`[graph]`, `[[graph.edges]]`) and the
//! tree (`[tree.root]`). Without a file the built-in demonstration data is
//! used.

pub mod types;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{GraphTreeError, Result};
use crate::graph::{AdjacencyMatrix, BuildOutcome, EdgeSpec};
use crate::tree::{TreeNode, TreeSpec};

pub use types::{Config, EdgeConfig, GraphConfig, LabelCase, TreeConfig};

/// Demonstration graph: ten nodes, sixteen weighted edges
const BUILTIN_NODES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "L", "M"];

const BUILTIN_EDGES: [(&str, &str, f64); 16] = [
    ("A", "C", 1.0),
    ("A", "B", 4.0),
    ("B", "F", 3.0),
    ("C", "D", 8.0),
    ("C", "F", 7.0),
    ("D", "H", 5.0),
    ("F", "H", 1.0),
    ("F", "E", 1.0),
    ("E", "H", 2.0),
    ("H", "G", 3.0),
    ("H", "M", 7.0),
    ("H", "L", 6.0),
    ("G", "M", 4.0),
    ("M", "L", 1.0),
    ("L", "G", 4.0),
    ("L", "E", 2.0),
];

impl Config {
    /// Built-in demonstration data
    pub fn builtin() -> Self {
        let graph = GraphConfig {
            nodes: BUILTIN_NODES.iter().map(|s| s.to_string()).collect(),
            edges: BUILTIN_EDGES
                .iter()
                .map(|&(from, to, weight)| EdgeConfig {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                })
                .collect(),
            label_case: LabelCase::Upper,
        };

        let root = TreeSpec::leaf("1")
            .with_left(
                TreeSpec::leaf("3").with_left(TreeSpec::leaf("4").with_left(TreeSpec::leaf("8"))),
            )
            .with_right(
                TreeSpec::leaf("2")
                    .with_left(TreeSpec::leaf("6"))
                    .with_right(TreeSpec::leaf("5").with_left(TreeSpec::leaf("7"))),
            );

        Config {
            graph,
            tree: TreeConfig { root: Some(root) },
        }
    }

    /// Load configuration from a file.
    ///
    /// Fails with [`GraphTreeError::InvalidConfig`] when the node list
    /// repeats a label.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        if let Some(label) = config.graph.first_duplicate() {
            return Err(GraphTreeError::invalid_config(
                path,
                format!("duplicate node label {label}"),
            ));
        }

        tracing::debug!(
            path = %path.display(),
            nodes = config.graph.nodes.len(),
            edges = config.graph.edges.len(),
            has_tree = config.tree.root.is_some(),
            "loaded config"
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise fall back to the built-in data
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Build the adjacency matrix described by `[graph]`
    pub fn build_graph(&self) -> Result<BuildOutcome> {
        let edges: Vec<EdgeSpec> = self
            .graph
            .edges
            .iter()
            .map(|e| EdgeSpec::new(e.from.as_str(), e.to.as_str(), e.weight))
            .collect();
        AdjacencyMatrix::build(self.graph.nodes.clone(), &edges)
    }

    /// Build the tree described by `[tree.root]`, `None` if there is none
    pub fn build_tree(&self) -> Option<TreeNode<String>> {
        self.tree.root.as_ref().map(TreeSpec::build)
    }
}

impl GraphConfig {
    fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .find(|label| !seen.insert(label.as_str()))
            .map(String::as_str)
    }
}
