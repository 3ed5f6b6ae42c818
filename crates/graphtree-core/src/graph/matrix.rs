//! Dense adjacency matrix for undirected weighted graphs

use crate::error::{GraphTreeError, Result};
use crate::graph::types::{Cost, RejectReason, RejectedEdge};
use std::collections::HashMap;

/// One undirected edge as given by the caller: `(from, to, weight)`
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Cost,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight: Cost::new(weight),
        }
    }
}

/// Result of building a matrix: the graph plus every edge that was skipped
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub graph: AdjacencyMatrix,
    pub rejected: Vec<RejectedEdge>,
}

/// Weighted, undirected graph over a fixed label set.
///
/// # Invariants
/// - `labels` and `index_of` are inverse mappings over `[0, N)`
/// - `weights` is `N * N`, row-major, and symmetric
/// - `None` marks the absence of an edge
///
/// There is no mutating API; a matrix is final once built.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    labels: Vec<String>,
    index_of: HashMap<String, usize>,
    weights: Vec<Option<Cost>>,
}

impl AdjacencyMatrix {
    /// Build a matrix from a label list and an undirected edge list.
    ///
    /// Edges with an unknown endpoint or an invalid weight are reported in
    /// [`BuildOutcome::rejected`] and skipped; the remaining edges are still
    /// applied. A repeated unordered pair overwrites the earlier weight.
    ///
    /// # Errors
    /// Returns [`GraphTreeError::DuplicateLabel`] if a label occurs twice.
    #[tracing::instrument(skip_all, fields(nodes = labels.len(), edges = edges.len()))]
    pub fn build(labels: Vec<String>, edges: &[EdgeSpec]) -> Result<BuildOutcome> {
        let mut index_of = HashMap::with_capacity(labels.len());
        for (index, label) in labels.iter().enumerate() {
            if index_of.insert(label.clone(), index).is_some() {
                return Err(GraphTreeError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        let n = labels.len();
        let mut weights = vec![None; n * n];
        let mut rejected = Vec::new();

        for (position, edge) in edges.iter().enumerate() {
            let endpoints = (index_of.get(&edge.from), index_of.get(&edge.to));
            let reason = match endpoints {
                (None, _) => Some(RejectReason::UnknownLabel {
                    label: edge.from.clone(),
                }),
                (_, None) => Some(RejectReason::UnknownLabel {
                    label: edge.to.clone(),
                }),
                _ if !edge.weight.is_valid_weight() => Some(RejectReason::InvalidWeight {
                    weight: edge.weight.value().to_string(),
                }),
                _ => None,
            };

            if let Some(reason) = reason {
                let entry = RejectedEdge {
                    position,
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    reason,
                };
                tracing::debug!(%entry, "skipping edge");
                rejected.push(entry);
                continue;
            }

            if let (Some(&i), Some(&j)) = endpoints {
                weights[i * n + j] = Some(edge.weight);
                weights[j * n + i] = Some(edge.weight);
            }
        }

        let graph = AdjacencyMatrix {
            labels,
            index_of,
            weights,
        };
        tracing::debug!(
            edges = graph.edge_count(),
            rejected = rejected.len(),
            "built adjacency matrix"
        );

        Ok(BuildOutcome { graph, rejected })
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Node labels in index order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index_of.get(label).copied()
    }

    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Weight of the edge between two indices, `None` if there is no edge
    /// or an index is out of range.
    pub fn weight(&self, i: usize, j: usize) -> Option<Cost> {
        let n = self.len();
        if i >= n || j >= n {
            return None;
        }
        self.weights[i * n + j]
    }

    pub fn weight_between(&self, from: &str, to: &str) -> Option<Cost> {
        self.weight(self.index_of(from)?, self.index_of(to)?)
    }

    /// Indices adjacent to `i` together with the edge weight, in index order
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = (usize, Cost)> + '_ {
        let n = self.len();
        let row: &[Option<Cost>] = if i < n {
            &self.weights[i * n..(i + 1) * n]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter_map(|(j, weight)| weight.map(|w| (j, w)))
    }

    /// Number of unordered pairs (self-pairs included) carrying a weight
    pub fn edge_count(&self) -> usize {
        let n = self.len();
        (0..n)
            .map(|i| (i..n).filter(|&j| self.weights[i * n + j].is_some()).count())
            .sum()
    }

    /// Resolve a label to its index or fail with the list of known labels
    pub fn require_index(&self, label: &str) -> Result<usize> {
        self.index_of(label)
            .ok_or_else(|| GraphTreeError::invalid_label(label, &self.labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_is_symmetric() {
        let edges = vec![
            EdgeSpec::new("A", "B", 4.0),
            EdgeSpec::new("B", "C", 2.0),
            EdgeSpec::new("C", "A", 7.0),
        ];
        let outcome = AdjacencyMatrix::build(labels(&["A", "B", "C"]), &edges).unwrap();
        let graph = outcome.graph;

        assert!(outcome.rejected.is_empty());
        for i in 0..graph.len() {
            for j in 0..graph.len() {
                assert_eq!(graph.weight(i, j), graph.weight(j, i));
            }
        }
        assert_eq!(graph.weight_between("A", "B"), Some(Cost::from(4)));
        assert_eq!(graph.weight_between("B", "A"), Some(Cost::from(4)));
    }

    #[test]
    fn test_unspecified_pairs_and_self_pairs_have_no_edge() {
        let edges = vec![EdgeSpec::new("A", "B", 1.0)];
        let graph = AdjacencyMatrix::build(labels(&["A", "B", "C"]), &edges)
            .unwrap()
            .graph;

        assert_eq!(graph.weight_between("A", "C"), None);
        assert_eq!(graph.weight_between("A", "A"), None);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_explicit_self_pair() {
        let edges = vec![EdgeSpec::new("A", "A", 3.0)];
        let graph = AdjacencyMatrix::build(labels(&["A"]), &edges).unwrap().graph;
        assert_eq!(graph.weight(0, 0), Some(Cost::from(3)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let edges = vec![EdgeSpec::new("A", "B", 9.0), EdgeSpec::new("B", "A", 2.0)];
        let graph = AdjacencyMatrix::build(labels(&["A", "B"]), &edges)
            .unwrap()
            .graph;
        assert_eq!(graph.weight_between("A", "B"), Some(Cost::from(2)));
        assert_eq!(graph.weight_between("B", "A"), Some(Cost::from(2)));
    }

    #[test]
    fn test_every_invalid_edge_is_reported() {
        let edges = vec![
            EdgeSpec::new("A", "X", 1.0),
            EdgeSpec::new("A", "B", 5.0),
            EdgeSpec::new("Y", "B", 1.0),
            EdgeSpec::new("B", "C", 2.0),
        ];
        let outcome = AdjacencyMatrix::build(labels(&["A", "B", "C"]), &edges).unwrap();

        let positions: Vec<usize> = outcome.rejected.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 2]);
        assert_eq!(
            outcome.rejected[0].reason,
            RejectReason::UnknownLabel {
                label: "X".to_string()
            }
        );
        assert_eq!(
            outcome.rejected[1].reason,
            RejectReason::UnknownLabel {
                label: "Y".to_string()
            }
        );

        // Valid edges around the bad ones are still applied
        assert_eq!(outcome.graph.weight_between("A", "B"), Some(Cost::from(5)));
        assert_eq!(outcome.graph.weight_between("B", "C"), Some(Cost::from(2)));
    }

    #[test]
    fn test_invalid_last_edge_does_not_hide_earlier_ones() {
        let edges = vec![EdgeSpec::new("Q", "A", 1.0), EdgeSpec::new("A", "R", 1.0)];
        let outcome = AdjacencyMatrix::build(labels(&["A"]), &edges).unwrap();
        assert_eq!(outcome.rejected.len(), 2);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let edges = vec![EdgeSpec::new("A", "B", -3.0)];
        let outcome = AdjacencyMatrix::build(labels(&["A", "B"]), &edges).unwrap();
        assert!(matches!(
            outcome.rejected[0].reason,
            RejectReason::InvalidWeight { .. }
        ));
        assert_eq!(outcome.graph.weight_between("A", "B"), None);
    }

    #[test]
    fn test_duplicate_label_is_error() {
        let err = AdjacencyMatrix::build(labels(&["A", "B", "A"]), &[]).unwrap_err();
        assert!(matches!(err, GraphTreeError::DuplicateLabel { label } if label == "A"));
    }

    #[test]
    fn test_index_mapping_is_bijective() {
        let graph = AdjacencyMatrix::build(labels(&["A", "B", "C"]), &[])
            .unwrap()
            .graph;
        for (i, label) in graph.labels().iter().enumerate() {
            assert_eq!(graph.index_of(label), Some(i));
            assert_eq!(graph.label_at(i), Some(label.as_str()));
        }
        assert_eq!(graph.index_of("Z"), None);
        assert!(graph.require_index("Z").is_err());
    }

    #[test]
    fn test_neighbors_in_index_order() {
        let edges = vec![EdgeSpec::new("B", "C", 2.0), EdgeSpec::new("B", "A", 1.0)];
        let graph = AdjacencyMatrix::build(labels(&["A", "B", "C"]), &edges)
            .unwrap()
            .graph;
        let neighbors: Vec<(usize, Cost)> = graph.neighbors(1).collect();
        assert_eq!(neighbors, vec![(0, Cost::from(1)), (2, Cost::from(2))]);
        assert_eq!(graph.neighbors(99).count(), 0);
    }

    #[test]
    fn test_empty_graph() {
        let graph = AdjacencyMatrix::build(Vec::new(), &[]).unwrap().graph;
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
