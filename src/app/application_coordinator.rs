//! Application-level coordination and workflow management.
//!
//! Handles high-level operations: snapshot loading, playback control,
//! selection, and error handling.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use arborview::TreeSnapshot;
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
///
/// Responsibilities:
/// - Managing snapshot loading workflows
/// - Applying loaded snapshots to document and playback state
/// - Driving highlight script playback
/// - Managing error states
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous snapshot loading.
    ///
    /// Immediately clears previous document state so the loading indicator
    /// shows.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_document_state();
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { snapshot, path } => {
                Self::apply_snapshot(state, snapshot, path);
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading snapshot: {}", error_msg));
                state.document.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates and loads a demo tree in-memory.
    pub fn open_demo_tree(state: &mut AppState, loader: &mut AsyncLoader) {
        match loader.load_demo_snapshot() {
            Ok(snapshot) => Self::apply_snapshot(state, snapshot, None),
            Err(e) => {
                state.error_message = Some(format!("Error generating demo tree: {}", e));
            }
        }
    }

    /// Installs a snapshot into document and playback state and schedules
    /// a deferred view fit.
    fn apply_snapshot(state: &mut AppState, snapshot: TreeSnapshot, path: Option<PathBuf>) {
        let steps = snapshot.steps.clone();
        state.document.load_snapshot(snapshot, path);
        state.playback.load_steps(steps);
        state.error_message = None;

        Self::apply_current_step(state);
        state.camera.request_fit();
    }

    /// Handles a node click in the diagram.
    ///
    /// Clicking a selected node deselects it.
    pub fn handle_node_click(state: &mut AppState, node_id: String, was_already_selected: bool) {
        if was_already_selected {
            state.document.select(None);
        } else {
            state.document.select(Some(node_id));
        }
    }

    /// Starts or pauses highlight playback.
    pub fn toggle_playback(state: &mut AppState) {
        state.playback.toggle_playing();
        Self::apply_current_step(state);
    }

    /// Advances playback by one step.
    pub fn step_forward(state: &mut AppState) {
        state.playback.step_forward();
        Self::apply_current_step(state);
    }

    /// Moves playback back by one step.
    pub fn step_back(state: &mut AppState) {
        state.playback.step_back();
        Self::apply_current_step(state);
    }

    /// Rewinds playback to the first step.
    pub fn rewind(state: &mut AppState) {
        state.playback.rewind();
        Self::apply_current_step(state);
    }

    /// Advances timed playback; called once per frame.
    ///
    /// Schedules a repaint for the next step so playback runs without user
    /// input.
    pub fn advance_playback(state: &mut AppState, ctx: &egui::Context) {
        if state.playback.tick() {
            Self::apply_current_step(state);
        }
        if state.playback.playing() {
            ctx.request_repaint_after(state.playback.interval());
        }
    }

    /// Copies the current step's id set into the document highlight set.
    fn apply_current_step(state: &mut AppState) {
        let ids: Vec<String> = state.playback.current_ids().to_vec();
        state.document.set_highlights(ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arborview::TreeNode;

    fn demo_snapshot() -> TreeSnapshot {
        let mut root = TreeNode::new("a", "1");
        root.left = Some(Box::new(TreeNode::new("b", "2")));
        TreeSnapshot {
            tree: Some(root),
            steps: vec![vec!["a".to_string()], vec!["b".to_string()]],
        }
    }

    #[test]
    fn test_apply_snapshot_installs_first_step() {
        let mut state = AppState::new();
        ApplicationCoordinator::apply_snapshot(&mut state, demo_snapshot(), None);

        assert!(state.document.has_tree());
        assert_eq!(state.playback.num_steps(), 2);
        assert!(state.document.highlighted().contains("a"));
        assert!(state.camera.pending_fit().is_some());
    }

    #[test]
    fn test_stepping_updates_highlights() {
        let mut state = AppState::new();
        ApplicationCoordinator::apply_snapshot(&mut state, demo_snapshot(), None);

        ApplicationCoordinator::step_forward(&mut state);
        assert!(state.document.highlighted().contains("b"));
        assert!(!state.document.highlighted().contains("a"));

        ApplicationCoordinator::rewind(&mut state);
        assert!(state.document.highlighted().contains("a"));
    }

    #[test]
    fn test_node_click_toggles_selection() {
        let mut state = AppState::new();
        ApplicationCoordinator::handle_node_click(&mut state, "a".to_string(), false);
        assert_eq!(state.document.selected(), Some("a"));

        ApplicationCoordinator::handle_node_click(&mut state, "a".to_string(), true);
        assert_eq!(state.document.selected(), None);
    }
}
