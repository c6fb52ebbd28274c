//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying snapshot metadata.

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window with snapshot metadata
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        if state.document.has_tree() {
            ui.label(RichText::new("|").strong());

            let source = state
                .document
                .file_path()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Demo Tree".to_string());

            let depth = state
                .document
                .snapshot()
                .and_then(|s| s.tree.as_ref())
                .map_or(0, |t| t.depth());

            ui.label(RichText::new(format!(
                "{} | Nodes: {} | Depth: {}",
                source,
                state.document.node_count(),
                depth
            )).strong());

            if state.playback.has_steps() {
                ui.label(RichText::new("|").strong());
                ui.label(RichText::new(format!(
                    "Step {} / {}",
                    state.playback.current_step() + 1,
                    state.playback.num_steps()
                )).strong());
            }

            if let Some(selected) = state.document.selected() {
                ui.label(RichText::new("|").strong());
                ui.label(
                    RichText::new(format!("Selected: {}", selected))
                        .strong()
                        .color(egui::Color32::YELLOW),
                );
            }
        } else {
            ui.label(RichText::new("| No snapshot loaded").strong());
        }
    });
}
