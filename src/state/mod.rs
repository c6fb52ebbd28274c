//! State management modules for the ArborView GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Document state (loaded snapshot, highlight set, derived diagram)
//! - Camera state (pan, zoom, world/screen transforms, deferred fit)
//! - Playback state (highlight step script, play/pause, step timer)
//! - Theme state (theme manager, current theme)

mod document;
mod camera;
mod playback;
mod theme_state;

pub use document::DocumentState;
pub use camera::CameraState;
pub use playback::{PlaybackState, DEFAULT_STEP_INTERVAL_MS};
pub use theme_state::ThemeState;
