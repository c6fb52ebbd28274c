//! Header panel UI rendering
//!
//! Handles the top menu bar with file controls, zoom buttons, playback
//! controls, and theme selector.

use crate::app::{AppState, ApplicationCoordinator};
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Open Snapshot" button
    OpenFileRequested(PathBuf),
    /// User clicked "Demo Tree" button
    OpenDemoTreeRequested,
}

/// Renders the application header with file, zoom, and playback controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Snapshot").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Tree Snapshots", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🌳 Demo Tree").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoTreeRequested);
        }

        ui.separator();

        if state.document.has_tree() {
            // Zoom controls
            if ui.button("🔍+").clicked() {
                state.camera.zoom_step(1.5);
            }

            if ui.button("🔍-").clicked() {
                state.camera.zoom_step(1.0 / 1.5);
            }

            if ui.button("⛶ Fit").clicked() {
                state.camera.request_fit();
            }

            ui.label(format!("Zoom: {:.1}x", state.camera.zoom()));

            if state.playback.has_steps() {
                ui.separator();

                // Playback controls
                if ui.button("⏮").clicked() {
                    ApplicationCoordinator::rewind(state);
                }

                if ui.button("◀").clicked() {
                    ApplicationCoordinator::step_back(state);
                }

                let play_label = if state.playback.playing() { "⏸" } else { "▶" };
                if ui.button(play_label).clicked() {
                    ApplicationCoordinator::toggle_playback(state);
                }

                if ui.button("⏭").clicked() {
                    ApplicationCoordinator::step_forward(state);
                }

                ui.label(format!(
                    "Step {}/{}",
                    state.playback.current_step() + 1,
                    state.playback.num_steps()
                ));

                let mut interval_ms = state.playback.interval_ms();
                let slider = egui::Slider::new(&mut interval_ms, 100..=2000)
                    .suffix(" ms")
                    .text("interval");
                if ui.add(slider).changed() {
                    state.playback.set_interval_ms(interval_ms);
                }
            }
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name,
                        );
                    }
                });

            // Save theme preference if it changed
            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
