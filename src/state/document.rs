//! Loaded snapshot and diagram state.
//!
//! This module encapsulates the currently loaded tree snapshot, the active
//! highlight set, and the derived diagram. The diagram is recomputed from
//! (tree, highlight set, edge color) and never mutated independently.

use arborview::{layout_tree, TreeDiagram, TreeSnapshot};
use egui::Color32;
use std::collections::HashSet;
use std::path::PathBuf;

/// State related to the loaded snapshot and the derived diagram.
///
/// Responsibilities:
/// - Managing snapshot lifetime and source path
/// - Tracking the current highlight set and node selection
/// - Recomputing the diagram when any layout input changes
#[derive(Default)]
pub struct DocumentState {
    /// The currently loaded snapshot (if any)
    snapshot: Option<TreeSnapshot>,
    /// Path to the loaded file (None for demo trees)
    file_path: Option<PathBuf>,
    /// Ids of currently highlighted nodes
    highlighted: HashSet<String>,
    /// Id of the currently selected node (if any)
    selected: Option<String>,
    /// Derived render descriptors
    diagram: TreeDiagram,
    /// Edge color the diagram was last computed with
    layout_color: Option<Color32>,
    /// True when the diagram must be recomputed
    dirty: bool,
}

impl DocumentState {
    /// Creates a new document state with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a new snapshot and invalidates the diagram.
    ///
    /// # Arguments
    /// * `snapshot` - The snapshot to load
    /// * `path` - Optional file path (None for demo trees)
    pub fn load_snapshot(&mut self, snapshot: TreeSnapshot, path: Option<PathBuf>) {
        self.snapshot = Some(snapshot);
        self.file_path = path;
        self.highlighted.clear();
        self.selected = None;
        self.dirty = true;
    }

    /// Clears all document state.
    pub fn clear(&mut self) {
        self.snapshot = None;
        self.file_path = None;
        self.highlighted.clear();
        self.selected = None;
        self.diagram = TreeDiagram::default();
        self.layout_color = None;
        self.dirty = false;
    }

    // ===== Queries =====

    /// Returns true if a tree is loaded.
    pub fn has_tree(&self) -> bool {
        self.snapshot
            .as_ref()
            .map_or(false, |s| s.tree.is_some())
    }

    /// Returns the loaded snapshot, if any.
    pub fn snapshot(&self) -> Option<&TreeSnapshot> {
        self.snapshot.as_ref()
    }

    /// Returns the file path of the loaded snapshot, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Returns the number of nodes in the loaded tree.
    pub fn node_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, TreeSnapshot::node_count)
    }

    /// Returns the current highlight set.
    pub fn highlighted(&self) -> &HashSet<String> {
        &self.highlighted
    }

    /// Returns the currently selected node id, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    // ===== Mutations =====

    /// Replaces the highlight set and invalidates the diagram.
    pub fn set_highlights(&mut self, ids: impl IntoIterator<Item = String>) {
        let new: HashSet<String> = ids.into_iter().collect();
        if new != self.highlighted {
            self.highlighted = new;
            self.dirty = true;
        }
    }

    /// Selects a node, or clears the selection for `None`.
    pub fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }

    /// Returns the diagram for the given edge color, recomputing if the
    /// tree, highlight set, or color changed since the last pass.
    pub fn diagram(&mut self, edge_color: Color32) -> &TreeDiagram {
        if self.dirty || self.layout_color != Some(edge_color) {
            let tree = self.snapshot.as_ref().and_then(|s| s.tree.as_ref());
            self.diagram = layout_tree(tree, &self.highlighted, edge_color);
            self.layout_color = Some(edge_color);
            self.dirty = false;
        }
        &self.diagram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arborview::TreeNode;

    fn snapshot_with_two_nodes() -> TreeSnapshot {
        let mut root = TreeNode::new("a", "1");
        root.right = Some(Box::new(TreeNode::new("b", "2")));
        TreeSnapshot {
            tree: Some(root),
            steps: vec![vec!["a".to_string()], vec!["a".to_string(), "b".to_string()]],
        }
    }

    #[test]
    fn test_empty_document_yields_empty_diagram() {
        let mut doc = DocumentState::new();
        assert!(!doc.has_tree());
        assert!(doc.diagram(Color32::GRAY).is_empty());
    }

    #[test]
    fn test_diagram_recomputed_on_highlight_change() {
        let mut doc = DocumentState::new();
        doc.load_snapshot(snapshot_with_two_nodes(), None);

        assert!(!doc.diagram(Color32::GRAY).nodes[0].highlighted);

        doc.set_highlights(["a".to_string()]);
        let diagram = doc.diagram(Color32::GRAY);
        assert!(diagram.nodes.iter().find(|n| n.id == "a").unwrap().highlighted);
        assert!(!diagram.nodes.iter().find(|n| n.id == "b").unwrap().highlighted);
    }

    #[test]
    fn test_diagram_recomputed_on_color_change() {
        let mut doc = DocumentState::new();
        doc.load_snapshot(snapshot_with_two_nodes(), None);

        doc.diagram(Color32::GRAY);
        let diagram = doc.diagram(Color32::WHITE);
        assert_eq!(diagram.edges[0].style.stroke, Color32::WHITE);
    }
}
