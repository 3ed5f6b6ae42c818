use crate::error::Result;
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::types::{Cost, PathResult};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub node: usize,
    pub tentative: Cost,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Ties broken by index so pops are deterministic
        self.tentative
            .cmp(&other.tentative)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Counters collected while running the search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the heap, including the seed
    pub pushes: usize,
    /// Entries popped from the heap
    pub pops: usize,
    /// Popped entries discarded because a shorter distance was already known
    pub stale_skipped: usize,
}

/// Full single-source result: distances and predecessors for every node
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    graph: &'g AdjacencyMatrix,
    source: usize,
    distance: Vec<Cost>,
    predecessor: Vec<Option<usize>>,
    settled: Vec<(usize, Cost)>,
    stats: SearchStats,
}

impl<'g> ShortestPathTree<'g> {
    pub fn source(&self) -> &str {
        self.graph.label_at(self.source).unwrap_or_default()
    }

    /// Distance from the source, `Cost::INFINITY` if unreachable
    pub fn distance(&self, label: &str) -> Result<Cost> {
        let index = self.graph.require_index(label)?;
        Ok(self.distance[index])
    }

    /// `(label, distance)` for every node, in label order
    pub fn distances(&self) -> Vec<(&str, Cost)> {
        self.graph
            .labels()
            .iter()
            .map(String::as_str)
            .zip(self.distance.iter().copied())
            .collect()
    }

    /// Path from the source to `label`.
    ///
    /// Walks the predecessor chain back from the target and reverses it. An
    /// unreachable target yields a single-element path with infinite weight.
    pub fn path_to(&self, label: &str) -> Result<PathResult> {
        let target = self.graph.require_index(label)?;

        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(index) = current {
            if let Some(name) = self.graph.label_at(index) {
                path.push(name.to_string());
            }
            current = self.predecessor[index];
        }
        path.reverse();

        Ok(PathResult {
            path,
            total_weight: self.distance[target],
        })
    }

    /// Nodes in the order they were finalized, with the distance at that moment
    pub fn settled(&self) -> &[(usize, Cost)] {
        &self.settled
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Run Dijkstra's algorithm from `source` over every node of the graph.
///
/// Uses a binary heap without decrease-key: an improved distance pushes a
/// fresh entry and outdated entries are skipped when popped. Weights are
/// assumed non-negative, which the matrix builder enforces.
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn dijkstra<'g>(graph: &'g AdjacencyMatrix, source: &str) -> Result<ShortestPathTree<'g>> {
    let start = Instant::now();
    let source_index = graph.require_index(source)?;

    let n = graph.len();
    let mut distance = vec![Cost::INFINITY; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut settled = Vec::with_capacity(n);
    let mut stats = SearchStats::default();
    let mut heap = BinaryHeap::new();

    distance[source_index] = Cost::ZERO;
    heap.push(Reverse(HeapEntry {
        node: source_index,
        tentative: Cost::ZERO,
    }));
    stats.pushes += 1;

    while let Some(Reverse(HeapEntry { node, tentative })) = heap.pop() {
        stats.pops += 1;

        if tentative > distance[node] {
            stats.stale_skipped += 1;
            continue;
        }
        settled.push((node, tentative));

        for (neighbor, weight) in graph.neighbors(node) {
            let candidate = tentative + weight;
            if candidate < distance[neighbor] {
                distance[neighbor] = candidate;
                predecessor[neighbor] = Some(node);
                heap.push(Reverse(HeapEntry {
                    node: neighbor,
                    tentative: candidate,
                }));
                stats.pushes += 1;
            }
        }
    }

    tracing::debug!(
        pushes = stats.pushes,
        pops = stats.pops,
        stale_skipped = stats.stale_skipped,
        settled = settled.len(),
        "dijkstra finished"
    );
    crate::trace_time!(start, "dijkstra");

    Ok(ShortestPathTree {
        graph,
        source: source_index,
        distance,
        predecessor,
        settled,
        stats,
    })
}

/// Shortest path between two labels.
///
/// Both labels are validated before any search work. `source == target`
/// gives `([source], 0)`; an unreachable target gives `([target], inf)`.
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn shortest_path(graph: &AdjacencyMatrix, source: &str, target: &str) -> Result<PathResult> {
    graph.require_index(source)?;
    graph.require_index(target)?;

    let tree = dijkstra(graph, source)?;
    let result = tree.path_to(target)?;

    tracing::debug!(
        hops = result.hops(),
        total_weight = %result.total_weight,
        reachable = result.is_reachable(),
        "shortest path"
    );
    Ok(result)
}
