//! Asynchronous snapshot loading.
//!
//! Loads tree snapshot files in a background thread, keeping the GUI
//! responsive during file I/O.

use crate::io::LoadingState;
use arborview::{read_snapshot, SampleTreeGenerator, TreeSnapshot};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Result of a completed snapshot loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded snapshot
        snapshot: TreeSnapshot,
        /// Path to the file that was loaded (None for demo trees)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of snapshot files.
///
/// Coordinates background-thread file loading with the main GUI thread.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<TreeSnapshot, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts loading a snapshot file asynchronously from the given path.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the snapshot file to load
    /// * `ctx` - egui context for requesting a repaint on completion
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = read_snapshot(&path).map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Generates a demo snapshot in-memory.
    ///
    /// Generation is synchronous (no background thread).
    pub fn load_demo_snapshot(&mut self) -> Result<TreeSnapshot, String> {
        let snapshot = SampleTreeGenerator::new().generate();
        snapshot.validate().map_err(|e| e.to_string())?;
        Ok(snapshot)
    }

    /// Checks if background loading has completed and returns the result.
    ///
    /// Called once per frame in the update loop.
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                let load_result = match result {
                    Ok(snapshot) => {
                        let path = self.pending_load_path.take();
                        LoadResult::Success { snapshot, path }
                    }
                    Err(error_msg) => {
                        self.pending_load_path = None;
                        LoadResult::Error(error_msg)
                    }
                };

                self.loading_receiver = None;

                return load_result;
            }
        }

        LoadResult::None
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_demo_snapshot_loading() {
        let mut loader = AsyncLoader::new();
        let result = loader.load_demo_snapshot();
        assert!(result.is_ok(), "Demo snapshot loading should succeed");
        assert!(result.unwrap().tree.is_some());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        let result = loader.check_completion();
        assert!(matches!(result, LoadResult::None));
    }
}
