//! Preorder subtree lookup

use crate::tree::node::TreeNode;

/// Iterator for pre-order traversal (node, then left subtree, then right subtree).
///
/// Stack-based, so deep trees do not grow the call stack.
pub struct PreOrderIter<'a, L> {
    stack: Vec<&'a TreeNode<L>>,
}

impl<'a, L> PreOrderIter<'a, L> {
    pub fn new(root: Option<&'a TreeNode<L>>) -> Self {
        PreOrderIter {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, L> Iterator for PreOrderIter<'a, L> {
    type Item = &'a TreeNode<L>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Right first, so left is processed first
        self.stack.extend(node.right());
        self.stack.extend(node.left());

        Some(node)
    }
}

/// Finds the first node labelled `target` in preorder.
///
/// The left subtree is exhausted before the right one is entered. With
/// duplicate labels the first match in that order is returned and nothing
/// after it is visited. `None` means not found, including for an absent root.
#[tracing::instrument(level = "trace", skip_all)]
pub fn find_subtree<'a, L, Q>(
    root: Option<&'a TreeNode<L>>,
    target: &Q,
) -> Option<&'a TreeNode<L>>
where
    L: PartialEq<Q>,
    Q: ?Sized,
{
    let found = PreOrderIter::new(root).find(|node| node.label.eq(target));
    tracing::trace!(found = found.is_some(), "subtree lookup");
    found
}
