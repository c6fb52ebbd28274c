//! Binary tree data model.
//!
//! The tree is supplied by a collaborator (a snapshot file or the demo
//! generator); this crate only visualizes it. Parents exclusively own their
//! children, so cycles and shared subtrees cannot be represented.

use serde::{Deserialize, Serialize};

/// One node of the binary tree being visualized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Unique identifier within the tree.
    pub id: String,
    /// Display value shown inside the node.
    pub value: String,
    /// Left child, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<TreeNode>>,
    /// Right child, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Creates a leaf node with the given id and display value.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            left: None,
            right: None,
        }
    }

    /// Returns the total number of nodes in this subtree (including self).
    pub fn count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Self::count)
            + self.right.as_deref().map_or(0, Self::count)
    }

    /// Returns the height of this subtree (a leaf has depth 0).
    pub fn depth(&self) -> usize {
        let left = self.left.as_deref().map_or(0, |n| n.depth() + 1);
        let right = self.right.as_deref().map_or(0, |n| n.depth() + 1);
        left.max(right)
    }

    /// Collects all node ids in depth-first order.
    pub fn collect_ids(&self, out: &mut Vec<String>) {
        out.push(self.id.clone());
        if let Some(left) = &self.left {
            left.collect_ids(out);
        }
        if let Some(right) = &self.right {
            right.collect_ids(out);
        }
    }

    /// Finds a node by id in this subtree.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.left
            .as_deref()
            .and_then(|n| n.find(id))
            .or_else(|| self.right.as_deref().and_then(|n| n.find(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_node_tree() -> TreeNode {
        let mut root = TreeNode::new("a", "5");
        root.left = Some(Box::new(TreeNode::new("b", "3")));
        root.right = Some(Box::new(TreeNode::new("c", "8")));
        root
    }

    #[test]
    fn test_count_and_depth() {
        let root = three_node_tree();
        assert_eq!(root.count(), 3);
        assert_eq!(root.depth(), 1);
        assert_eq!(TreeNode::new("x", "1").count(), 1);
        assert_eq!(TreeNode::new("x", "1").depth(), 0);
    }

    #[test]
    fn test_find() {
        let root = three_node_tree();
        assert_eq!(root.find("c").map(|n| n.value.as_str()), Some("8"));
        assert!(root.find("missing").is_none());
    }

    #[test]
    fn test_collect_ids_depth_first() {
        let root = three_node_tree();
        let mut ids = Vec::new();
        root.collect_ids(&mut ids);
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
