//! Tree snapshot files.
//!
//! A snapshot is a JSON document holding a tree plus an optional script of
//! highlight steps, produced by an external algorithm driver (or the demo
//! generator). The viewer plays the steps back, highlighting the listed
//! node ids at each step.

use crate::tree::TreeNode;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A serialized tree plus an optional highlight step script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// The tree to visualize. Absent tree renders as an empty diagram.
    #[serde(default)]
    pub tree: Option<TreeNode>,
    /// Highlight steps: each entry is the set of node ids to emphasize.
    #[serde(default)]
    pub steps: Vec<Vec<String>>,
}

impl TreeSnapshot {
    /// Returns the number of nodes in the snapshot's tree.
    pub fn node_count(&self) -> usize {
        self.tree.as_ref().map_or(0, TreeNode::count)
    }

    /// Validates the snapshot: node ids must be unique, since the diagram
    /// keys nodes and edges by id.
    pub fn validate(&self) -> Result<()> {
        let Some(tree) = &self.tree else {
            return Ok(());
        };

        let mut ids = Vec::new();
        tree.collect_ids(&mut ids);

        let mut seen = HashSet::new();
        for id in &ids {
            if !seen.insert(id.as_str()) {
                bail!("duplicate node id '{}' in tree", id);
            }
        }
        Ok(())
    }
}

/// Reads and validates a snapshot from a JSON file.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<TreeSnapshot> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot file {}", path.display()))?;
    let snapshot: TreeSnapshot = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse snapshot file {}", path.display()))?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Writes a snapshot to a JSON file (pretty-printed).
pub fn write_snapshot(path: impl AsRef<Path>, snapshot: &TreeSnapshot) -> Result<()> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, text)
        .with_context(|| format!("failed to write snapshot file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_is_valid() {
        let snapshot = TreeSnapshot::default();
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.node_count(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut root = TreeNode::new("a", "1");
        root.left = Some(Box::new(TreeNode::new("a", "2")));
        let snapshot = TreeSnapshot {
            tree: Some(root),
            steps: Vec::new(),
        };
        let err = snapshot.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate node id"));
    }

    #[test]
    fn test_steps_default_to_empty() {
        let snapshot: TreeSnapshot = serde_json::from_str(r#"{"tree": null}"#).unwrap();
        assert!(snapshot.steps.is_empty());
        assert!(snapshot.tree.is_none());
    }
}
