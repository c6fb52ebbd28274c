//! Diagram input handling for panning and zooming.
//!
//! This module handles all mouse input for the diagram canvas, including:
//! - Drag panning (left mouse + drag)
//! - Scroll wheel zoom (Ctrl + wheel, anchored at the pointer)
//! - Scroll wheel pan (wheel without Ctrl)

use crate::state::CameraState;
use eframe::egui;

/// Result of diagram input handling
pub enum DiagramInputResult {
    /// No interaction occurred
    None,
    /// Camera was updated (pan or zoom)
    CameraUpdated,
}

/// Handles all diagram input events and updates the camera.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `canvas_rect` - The canvas rectangle for coordinate calculations
/// * `canvas_response` - The canvas interaction response
/// * `camera` - The camera to update
///
/// # Returns
/// The result of input handling
pub fn handle_diagram_input(
    ctx: &egui::Context,
    canvas_rect: egui::Rect,
    canvas_response: &egui::Response,
    camera: &mut CameraState,
) -> DiagramInputResult {
    let mut result = DiagramInputResult::None;

    // Drag panning
    if canvas_response.dragged() {
        let drag_delta = canvas_response.drag_delta();
        if drag_delta != egui::Vec2::ZERO {
            camera.pan_by(drag_delta);
            result = DiagramInputResult::CameraUpdated;
        }
    }

    // Scroll wheel input when hovering over canvas
    let hover_pos = ctx.input(|i| i.pointer.hover_pos());
    if let Some(pos) = hover_pos {
        if canvas_rect.contains(pos) {
            ctx.input(|i| {
                // Try both raw_scroll_delta and smooth_scroll_delta for compatibility
                let scroll = if i.raw_scroll_delta != egui::Vec2::ZERO {
                    i.raw_scroll_delta
                } else {
                    i.smooth_scroll_delta
                };

                if i.modifiers.ctrl && scroll.y != 0.0 {
                    // Ctrl + wheel zooms around the pointer
                    let zoom_factor = 1.0 + scroll.y * 0.002;
                    camera.zoom_about(zoom_factor, pos, canvas_rect);
                    result = DiagramInputResult::CameraUpdated;
                } else if scroll != egui::Vec2::ZERO {
                    // Plain wheel pans in both axes
                    camera.pan_by(scroll);
                    result = DiagramInputResult::CameraUpdated;
                }
            });
        }
    }

    result
}
