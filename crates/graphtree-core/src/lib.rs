//! Graphtree Core Library
//!
//! Shortest paths over dense weighted graphs and subtree traversal over
//! owned binary trees, plus the configuration, error and logging plumbing
//! shared with the `graphtree` command-line tool.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod tree;
