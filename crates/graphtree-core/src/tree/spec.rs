//! Declarative tree descriptions used by configuration files

use crate::tree::node::TreeNode;
use serde::{Deserialize, Serialize};

/// Nested description of a binary tree.
///
/// In TOML a node is a table with a `label` and optional `left` / `right`
/// sub-tables:
///
/// ```toml
/// [tree.root]
/// label = "1"
/// [tree.root.left]
/// label = "3"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSpec {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<TreeSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<TreeSpec>>,
}

impl TreeSpec {
    pub fn leaf(label: impl Into<String>) -> Self {
        TreeSpec {
            label: label.into(),
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: TreeSpec) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: TreeSpec) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// Converts the description into an owned tree.
    pub fn build(&self) -> TreeNode<String> {
        TreeNode {
            label: self.label.clone(),
            left: self.left.as_ref().map(|child| Box::new(child.build())),
            right: self.right.as_ref().map(|child| Box::new(child.build())),
        }
    }
}
