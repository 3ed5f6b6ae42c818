//! Binary trees: subtree lookup and inorder traversal
//!
//! - `node`: owned `TreeNode<L>`
//! - `search`: preorder iterator and `find_subtree`
//! - `traversal`: inorder iterator and `inorder_traversal`
//! - `spec`: serde-friendly tree descriptions

pub mod node;
pub mod search;
pub mod spec;
pub mod traversal;

pub use node::TreeNode;
pub use search::{find_subtree, PreOrderIter};
pub use spec::TreeSpec;
pub use traversal::{inorder_traversal, InOrderIter};

/// Tree used across the unit tests:
///
/// ```text
///         1
///       /   \
///      3     2
///     /     / \
///    4     6   5
///   /         /
///  8         7
/// ```
#[cfg(test)]
pub(crate) fn example_tree() -> TreeNode<i32> {
    TreeNode::leaf(1)
        .with_left(TreeNode::leaf(3).with_left(TreeNode::leaf(4).with_left(TreeNode::leaf(8))))
        .with_right(
            TreeNode::leaf(2)
                .with_left(TreeNode::leaf(6))
                .with_right(TreeNode::leaf(5).with_left(TreeNode::leaf(7))),
        )
}
