//! Inorder traversal

use crate::tree::node::TreeNode;

/// Iterator for in-order traversal (left subtree, node, right subtree).
///
/// Keeps the chain of pending ancestors on an explicit stack.
pub struct InOrderIter<'a, L> {
    stack: Vec<&'a TreeNode<L>>,
    current: Option<&'a TreeNode<L>>,
}

impl<'a, L> InOrderIter<'a, L> {
    pub fn new(root: Option<&'a TreeNode<L>>) -> Self {
        InOrderIter {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, L> Iterator for InOrderIter<'a, L> {
    type Item = &'a TreeNode<L>;

    fn next(&mut self) -> Option<Self::Item> {
        // Descend as far left as possible
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }

        let node = self.stack.pop()?;
        self.current = node.right();
        Some(node)
    }
}

/// Labels of the tree rooted at `root` in inorder.
///
/// Recomputed on every call; an absent root yields an empty sequence.
pub fn inorder_traversal<L: Clone>(root: Option<&TreeNode<L>>) -> Vec<L> {
    InOrderIter::new(root).map(|node| node.label.clone()).collect()
}
