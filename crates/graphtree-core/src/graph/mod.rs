//! Weighted undirected graphs and shortest paths
//!
//! Provides:
//! - `AdjacencyMatrix`: dense, immutable graph over a fixed label set
//! - Dijkstra path-finding returning the path and its total weight

pub mod algos;
pub mod matrix;
pub mod types;

pub use algos::{dijkstra, shortest_path, SearchStats, ShortestPathTree};
pub use matrix::{AdjacencyMatrix, BuildOutcome, EdgeSpec};
pub use types::{Cost, PathResult, RejectReason, RejectedEdge};
