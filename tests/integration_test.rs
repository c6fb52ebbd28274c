use anyhow::Result;
use arborview::{
    child_offset, layout_tree, read_snapshot, write_snapshot, SampleTreeGenerator, ThemeManager,
    TreeNode, TreeSnapshot, BASE_SPACING, LEVEL_SPACING,
};
use egui::Color32;
use std::collections::HashSet;
use std::env;
use std::fs;

fn balanced_tree(levels: usize) -> TreeNode {
    fn build(prefix: String, level: usize, levels: usize) -> TreeNode {
        let mut node = TreeNode::new(prefix.clone(), level.to_string());
        if level + 1 < levels {
            node.left = Some(Box::new(build(format!("{}l", prefix), level + 1, levels)));
            node.right = Some(Box::new(build(format!("{}r", prefix), level + 1, levels)));
        }
        node
    }
    build("n".to_string(), 0, levels)
}

#[test]
fn test_write_and_read_snapshot() -> Result<()> {
    let test_file = env::temp_dir().join("test_snapshot.json");

    // Clean up any existing file
    let _ = fs::remove_file(&test_file);

    let snapshot = SampleTreeGenerator::with_seed(7).with_node_budget(10).generate();
    write_snapshot(&test_file, &snapshot)?;

    let loaded = read_snapshot(&test_file)?;
    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.node_count(), 10);

    fs::remove_file(&test_file)?;
    Ok(())
}

#[test]
fn test_read_rejects_duplicate_ids() -> Result<()> {
    let test_file = env::temp_dir().join("test_snapshot_dup.json");

    let mut root = TreeNode::new("a", "1");
    root.left = Some(Box::new(TreeNode::new("a", "2")));
    let snapshot = TreeSnapshot {
        tree: Some(root),
        steps: Vec::new(),
    };

    // write_snapshot does not validate, so the broken file lands on disk
    write_snapshot(&test_file, &snapshot)?;

    let err = read_snapshot(&test_file).unwrap_err();
    assert!(err.to_string().contains("duplicate node id"));

    fs::remove_file(&test_file)?;
    Ok(())
}

#[test]
fn test_read_reports_missing_file() {
    let err = read_snapshot("/nonexistent/path/snapshot.json").unwrap_err();
    assert!(err.to_string().contains("failed to read snapshot file"));
}

#[test]
fn test_layout_covers_every_node_and_edge() {
    let tree = balanced_tree(4);
    let diagram = layout_tree(Some(&tree), &HashSet::new(), Color32::GRAY);

    assert_eq!(diagram.nodes.len(), tree.count());
    assert_eq!(diagram.edges.len(), tree.count() - 1);

    // Every edge endpoint must resolve to a placed node
    for edge in &diagram.edges {
        assert!(diagram.node_pos(&edge.source).is_some());
        assert!(diagram.node_pos(&edge.target).is_some());
    }
}

#[test]
fn test_layout_positions_are_unique() {
    let tree = balanced_tree(5);
    let diagram = layout_tree(Some(&tree), &HashSet::new(), Color32::GRAY);

    let mut seen = HashSet::new();
    for node in &diagram.nodes {
        let key = (node.pos.x.to_bits(), node.pos.y.to_bits());
        assert!(seen.insert(key), "nodes {:?} overlap", node.id);
    }
}

#[test]
fn test_sibling_spacing_shrinks_with_depth() {
    // The offset at each level must be more than the total width of the
    // subtree hanging below it, otherwise cousins collide.
    for depth in 0..10 {
        let remaining: f32 = (depth + 1..depth + 20).map(child_offset).sum();
        assert!(child_offset(depth) > remaining);
    }

    let tree = balanced_tree(6);
    let diagram = layout_tree(Some(&tree), &HashSet::new(), Color32::GRAY);

    // Root children sit at the base offset
    assert_eq!(diagram.node_pos("nl").unwrap().x, -BASE_SPACING);
    assert_eq!(diagram.node_pos("nr").unwrap().x, BASE_SPACING);
    assert_eq!(diagram.node_pos("nl").unwrap().y, LEVEL_SPACING);
}

#[test]
fn test_layout_is_deterministic() {
    let tree = balanced_tree(4);
    let highlights: HashSet<String> = ["nl".to_string(), "nlr".to_string()].into();

    let a = layout_tree(Some(&tree), &highlights, Color32::WHITE);
    let b = layout_tree(Some(&tree), &highlights, Color32::WHITE);
    assert_eq!(a, b);
}

#[test]
fn test_highlights_mark_nodes_and_edges() {
    let tree = balanced_tree(3);
    let highlights: HashSet<String> = ["nl".to_string()].into();
    let diagram = layout_tree(Some(&tree), &highlights, Color32::GRAY);

    for node in &diagram.nodes {
        assert_eq!(node.highlighted, node.id == "nl");
    }
    for edge in &diagram.edges {
        // The edge into a highlighted node animates, everything else is static
        assert_eq!(edge.animated, edge.target == "nl");
    }
}

#[test]
fn test_generated_snapshot_lays_out_cleanly() -> Result<()> {
    let snapshot = SampleTreeGenerator::new().generate();
    snapshot.validate()?;

    let diagram = layout_tree(snapshot.tree.as_ref(), &HashSet::new(), Color32::GRAY);
    assert_eq!(diagram.nodes.len(), snapshot.node_count());
    assert!(diagram.bounds().is_some());

    // Every step must only reference ids that exist in the tree
    let tree = snapshot.tree.as_ref().unwrap();
    for step in &snapshot.steps {
        for id in step {
            assert!(tree.find(id).is_some(), "step references unknown id {}", id);
        }
    }
    Ok(())
}

#[test]
fn test_theme_edge_colors() {
    let manager = ThemeManager::new();

    let dark = manager.colors("Dark");
    let light = manager.colors("Light");
    assert_ne!(dark.edge, light.edge);

    // Unknown theme names fall back to Dark
    assert_eq!(manager.colors("NoSuchTheme").edge, dark.edge);

    let mut names = manager.list_themes();
    names.sort();
    assert!(names.contains(&"Dark"));
    assert!(names.contains(&"Light"));
}
