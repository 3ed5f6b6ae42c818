//! Owned binary tree nodes

/// A binary tree node that exclusively owns its children.
///
/// Labels need not be unique. There is no parent link; ownership through
/// `Box` rules out sharing a child between two parents and cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<L> {
    pub label: L,
    pub left: Option<Box<TreeNode<L>>>,
    pub right: Option<Box<TreeNode<L>>>,
}

impl<L> TreeNode<L> {
    /// Creates a node without children.
    pub fn leaf(label: L) -> Self {
        TreeNode {
            label,
            left: None,
            right: None,
        }
    }

    /// Sets the left child, replacing any previous one.
    pub fn with_left(mut self, child: TreeNode<L>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Sets the right child, replacing any previous one.
    pub fn with_right(mut self, child: TreeNode<L>) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn left(&self) -> Option<&TreeNode<L>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<L>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in the subtree rooted here
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }
}

impl<L> Drop for TreeNode<L> {
    // Detach children onto a heap stack so a deep chain is freed in a loop
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<L>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf() {
        let node = TreeNode::leaf(4);
        assert!(node.is_leaf());
        assert_eq!(node.len(), 1);
        assert!(node.left().is_none());
    }

    #[test]
    fn test_builder_wires_children() {
        let node = TreeNode::leaf("root")
            .with_left(TreeNode::leaf("l"))
            .with_right(TreeNode::leaf("r").with_left(TreeNode::leaf("rl")));

        assert!(!node.is_leaf());
        assert_eq!(node.len(), 4);
        assert_eq!(node.left().map(|n| n.label), Some("l"));
        assert_eq!(
            node.right().and_then(|n| n.left()).map(|n| n.label),
            Some("rl")
        );
    }

    #[test]
    fn test_with_left_replaces_child() {
        let node = TreeNode::leaf(1)
            .with_left(TreeNode::leaf(2))
            .with_left(TreeNode::leaf(3));
        assert_eq!(node.left().map(|n| n.label), Some(3));
        assert_eq!(node.len(), 2);
    }

    #[test]
    fn test_deep_chain_drops_without_overflow() {
        let mut root = TreeNode::leaf(0u32);
        for label in 1..100_000u32 {
            root = if label % 2 == 0 {
                TreeNode::leaf(label).with_left(root)
            } else {
                TreeNode::leaf(label).with_right(root)
            };
        }
        assert_eq!(root.len(), 100_000);
        drop(root);
    }
}
