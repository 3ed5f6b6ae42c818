//! CLI commands for graphtree

pub mod dispatch;
pub mod distances;
pub mod inorder;
pub mod labels;
pub mod path;
