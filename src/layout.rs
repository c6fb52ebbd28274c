//! Tree layout computation.
//!
//! Walks a binary tree depth-first and assigns every node a 2D position,
//! producing the render node and render edge descriptors consumed by the
//! drawing layer. The horizontal offset between a parent and its children
//! shrinks geometrically with depth (width halving), so sibling subtrees
//! never overlap no matter how deep the tree grows. Vertical spacing is a
//! fixed step per level.
//!
//! The layout is a pure function of (tree, highlight set, edge color):
//! recomputing with unchanged inputs yields identical output.

use crate::tree::TreeNode;
use egui::{Color32, Pos2, Rect};
use std::collections::HashSet;

/// Horizontal offset between the root and its direct children.
pub const BASE_SPACING: f32 = 320.0;
/// Geometric shrink factor applied to the horizontal offset per level.
pub const SPREAD_FACTOR: f32 = 0.5;
/// Vertical distance between consecutive tree levels.
pub const LEVEL_SPACING: f32 = 80.0;

/// Stroke width for parent-child edges.
pub const EDGE_STROKE_WIDTH: f32 = 1.5;
/// Opacity applied to edge strokes.
pub const EDGE_OPACITY: f32 = 0.7;

/// A node prepared for drawing: position plus display state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    /// Tree node id this render node was derived from.
    pub id: String,
    /// Position in diagram (world) coordinates.
    pub pos: Pos2,
    /// Display value shown inside the node.
    pub value: String,
    /// True iff the id is in the highlight set.
    pub highlighted: bool,
}

/// Visual style attributes of a render edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    /// Stroke color (theme edge color).
    pub stroke: Color32,
    /// Stroke width in diagram units.
    pub width: f32,
    /// Stroke opacity in [0, 1].
    pub opacity: f32,
}

/// A parent-to-child connection prepared for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEdge {
    /// Edge id, derived as `"{parent}->{child}"`.
    pub id: String,
    /// Id of the parent render node.
    pub source: String,
    /// Id of the child render node.
    pub target: String,
    /// Stroke styling.
    pub style: EdgeStyle,
    /// True iff the child is highlighted; animated edges are drawn with a
    /// marching dash pattern.
    pub animated: bool,
}

/// The full set of render descriptors for one layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeDiagram {
    /// All render nodes, in depth-first order.
    pub nodes: Vec<RenderNode>,
    /// All parent-child edges, in depth-first order.
    pub edges: Vec<RenderEdge>,
}

impl TreeDiagram {
    /// Returns true if the diagram contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the bounding rectangle of all node positions, or `None` for
    /// an empty diagram. Used by the camera to fit the view.
    pub fn bounds(&self) -> Option<Rect> {
        let mut iter = self.nodes.iter();
        let first = iter.next()?;
        let mut rect = Rect::from_min_max(first.pos, first.pos);
        for node in iter {
            rect.extend_with(node.pos);
        }
        Some(rect)
    }

    /// Looks up the position of a node by id.
    pub fn node_pos(&self, id: &str) -> Option<Pos2> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.pos)
    }
}

/// Returns the horizontal offset between a node at `depth` and its children.
pub fn child_offset(depth: usize) -> f32 {
    BASE_SPACING * SPREAD_FACTOR.powi(depth as i32)
}

/// Computes the layout for a tree, marking nodes in `highlighted`.
///
/// An absent tree yields an empty diagram; there are no error paths.
pub fn layout_tree(
    root: Option<&TreeNode>,
    highlighted: &HashSet<String>,
    edge_color: Color32,
) -> TreeDiagram {
    let mut diagram = TreeDiagram::default();
    if let Some(root) = root {
        place_node(root, Pos2::ZERO, 0, None, highlighted, edge_color, &mut diagram);
    }
    diagram
}

fn place_node(
    node: &TreeNode,
    pos: Pos2,
    depth: usize,
    parent_id: Option<&str>,
    highlighted: &HashSet<String>,
    edge_color: Color32,
    out: &mut TreeDiagram,
) {
    let is_highlighted = highlighted.contains(&node.id);

    out.nodes.push(RenderNode {
        id: node.id.clone(),
        pos,
        value: node.value.clone(),
        highlighted: is_highlighted,
    });

    if let Some(parent_id) = parent_id {
        out.edges.push(RenderEdge {
            id: format!("{}->{}", parent_id, node.id),
            source: parent_id.to_string(),
            target: node.id.clone(),
            style: EdgeStyle {
                stroke: edge_color,
                width: EDGE_STROKE_WIDTH,
                opacity: EDGE_OPACITY,
            },
            animated: is_highlighted,
        });
    }

    let offset = child_offset(depth);
    if let Some(left) = &node.left {
        place_node(
            left,
            Pos2::new(pos.x - offset, pos.y + LEVEL_SPACING),
            depth + 1,
            Some(&node.id),
            highlighted,
            edge_color,
            out,
        );
    }
    if let Some(right) = &node.right {
        place_node(
            right,
            Pos2::new(pos.x + offset, pos.y + LEVEL_SPACING),
            depth + 1,
            Some(&node.id),
            highlighted,
            edge_color,
            out,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_offset_strictly_decreases() {
        for depth in 0..12 {
            assert!(
                child_offset(depth + 1) < child_offset(depth),
                "offset must shrink at depth {}",
                depth
            );
        }
    }

    #[test]
    fn test_empty_tree_has_no_bounds() {
        let diagram = layout_tree(None, &HashSet::new(), Color32::GRAY);
        assert!(diagram.is_empty());
        assert!(diagram.bounds().is_none());
    }

    #[test]
    fn test_bounds_cover_all_nodes() {
        let mut root = TreeNode::new("r", "1");
        root.left = Some(Box::new(TreeNode::new("l", "2")));
        root.right = Some(Box::new(TreeNode::new("rr", "3")));

        let diagram = layout_tree(Some(&root), &HashSet::new(), Color32::GRAY);
        let bounds = diagram.bounds().unwrap();
        for node in &diagram.nodes {
            assert!(bounds.contains(node.pos));
        }
        assert_eq!(bounds.width(), 2.0 * BASE_SPACING);
        assert_eq!(bounds.height(), LEVEL_SPACING);
    }

    #[test]
    fn test_edge_ids_derived_from_endpoints() {
        let mut root = TreeNode::new("p", "1");
        root.left = Some(Box::new(TreeNode::new("c", "2")));

        let diagram = layout_tree(Some(&root), &HashSet::new(), Color32::GRAY);
        assert_eq!(diagram.edges.len(), 1);
        let edge = &diagram.edges[0];
        assert_eq!(edge.id, "p->c");
        assert_eq!(edge.source, "p");
        assert_eq!(edge.target, "c");
        assert_eq!(edge.style.width, EDGE_STROKE_WIDTH);
        assert_eq!(edge.style.opacity, EDGE_OPACITY);
    }
}
