//! In-memory demo snapshot generation.
//!
//! Builds a random binary search tree and an in-order traversal highlight
//! script, so the viewer has something to show without a snapshot file.
//! Generation is seeded for reproducible demos.

use crate::snapshot::TreeSnapshot;
use crate::tree::TreeNode;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Default number of nodes in a generated demo tree.
pub const DEFAULT_NODE_BUDGET: usize = 15;

/// Default seed, so "Demo Tree" shows the same tree across runs.
pub const DEFAULT_SEED: u64 = 42;

/// Pool of distinct values demo trees draw from.
static VALUE_POOL: Lazy<Vec<u32>> = Lazy::new(|| (1..100).collect());

/// Generates demo snapshots: a random BST plus an in-order highlight script.
pub struct SampleTreeGenerator {
    node_budget: usize,
    rng: StdRng,
}

impl SampleTreeGenerator {
    /// Creates a generator with the default seed and node budget.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates a generator with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            node_budget: DEFAULT_NODE_BUDGET,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sets the number of nodes to generate.
    pub fn with_node_budget(mut self, budget: usize) -> Self {
        self.node_budget = budget;
        self
    }

    /// Generates a snapshot: random BST plus cumulative in-order steps.
    ///
    /// Step `k` highlights the first `k + 1` nodes visited by an in-order
    /// traversal, so playback sweeps the tree left to right.
    pub fn generate(&mut self) -> TreeSnapshot {
        let budget = self.node_budget.min(VALUE_POOL.len());
        let mut values: Vec<u32> = VALUE_POOL.clone();
        values.shuffle(&mut self.rng);
        values.truncate(budget);

        let mut root: Option<Box<TreeNode>> = None;
        for value in &values {
            insert_bst(&mut root, *value);
        }

        let mut visit_order = Vec::new();
        if let Some(root) = &root {
            in_order(root, &mut visit_order);
        }

        let steps: Vec<Vec<String>> = (0..visit_order.len())
            .map(|k| visit_order[..=k].to_vec())
            .collect();

        TreeSnapshot {
            tree: root.map(|b| *b),
            steps,
        }
    }
}

impl Default for SampleTreeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_bst(slot: &mut Option<Box<TreeNode>>, value: u32) {
    match slot {
        None => {
            *slot = Some(Box::new(TreeNode::new(format!("n{}", value), value.to_string())));
        }
        Some(node) => {
            let existing: u32 = node.value.parse().unwrap_or(0);
            if value < existing {
                insert_bst(&mut node.left, value);
            } else {
                insert_bst(&mut node.right, value);
            }
        }
    }
}

fn in_order(node: &TreeNode, out: &mut Vec<String>) {
    if let Some(left) = &node.left {
        in_order(left, out);
    }
    out.push(node.id.clone());
    if let Some(right) = &node.right {
        in_order(right, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_seeded() {
        let a = SampleTreeGenerator::with_seed(7).generate();
        let b = SampleTreeGenerator::with_seed(7).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_budget_respected() {
        let snapshot = SampleTreeGenerator::new().with_node_budget(5).generate();
        assert_eq!(snapshot.node_count(), 5);
    }

    #[test]
    fn test_steps_cover_all_nodes() {
        let snapshot = SampleTreeGenerator::new().generate();
        assert_eq!(snapshot.steps.len(), snapshot.node_count());
        let last = snapshot.steps.last().unwrap();
        assert_eq!(last.len(), snapshot.node_count());
    }

    #[test]
    fn test_in_order_steps_visit_sorted_values() {
        let snapshot = SampleTreeGenerator::new().generate();
        let tree = snapshot.tree.as_ref().unwrap();
        let last = snapshot.steps.last().unwrap();

        let values: Vec<u32> = last
            .iter()
            .map(|id| tree.find(id).unwrap().value.parse().unwrap())
            .collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(values, sorted);
    }
}
