use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Accumulated or per-edge cost in the weighted graph.
///
/// `Cost::INFINITY` stands for "no known distance" and is never
/// rendered as a number.
#[derive(Debug, Clone, Copy)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Edge weights must be non-negative real numbers.
    pub fn is_valid_weight(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// JSON form: a number when finite, `null` otherwise.
    pub fn to_json(&self) -> serde_json::Value {
        if self.is_finite() {
            serde_json::json!(self.0)
        } else {
            serde_json::Value::Null
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(weight: u32) -> Self {
        Cost(f64::from(weight))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_finite() {
            write!(f, "inf")
        } else if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Result of a shortest-path query between two labels.
///
/// An unreachable target is reported as `path == [target]` with an
/// infinite `total_weight`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub path: Vec<String>,
    pub total_weight: Cost,
}

impl PathResult {
    pub fn is_reachable(&self) -> bool {
        self.total_weight.is_finite()
    }

    /// Number of edges along the path (0 when unreachable or source == target)
    pub fn hops(&self) -> usize {
        if self.is_reachable() {
            self.path.len().saturating_sub(1)
        } else {
            0
        }
    }
}

/// Why an edge was dropped while building the adjacency matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RejectReason {
    /// An endpoint is not in the label set
    UnknownLabel { label: String },
    /// Weight is negative or not a number
    InvalidWeight { weight: String },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::UnknownLabel { label } => write!(f, "unknown label {label}"),
            RejectReason::InvalidWeight { weight } => write!(f, "invalid weight {weight}"),
        }
    }
}

/// An edge that was reported and skipped during construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEdge {
    /// Position of the edge in the input list
    pub position: usize,
    pub from: String,
    pub to: String,
    pub reason: RejectReason,
}

impl fmt::Display for RejectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid edge #{}: ({}, {}): {}",
            self.position, self.from, self.to, self.reason
        )
    }
}
