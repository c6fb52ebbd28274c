//! Centralized application state for the ArborView GUI.
//!
//! Composes focused state components that each manage one aspect of the
//! application. Keeps invariants local and borrow-checker friendly.

use crate::state::{CameraState, DocumentState, PlaybackState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded snapshot and derived diagram
    pub document: DocumentState,

    /// Diagram camera (pan, zoom, deferred fit)
    pub camera: CameraState,

    /// Highlight script playback
    pub playback: PlaybackState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            document: DocumentState::new(),
            camera: CameraState::new(),
            playback: PlaybackState::new(),
            theme: ThemeState::new(),
            error_message: None,
        }
    }

    /// Creates a new AppState with a theme loaded from storage.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            ..Self::new()
        }
    }

    /// Resets document-related state when loading a new snapshot.
    pub fn reset_document_state(&mut self) {
        self.document.clear();
        self.camera.reset();
        self.playback.clear();
        self.error_message = None;
    }
}
