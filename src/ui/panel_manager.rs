//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, diagram, status) and manages their
//! layout and interaction coordination.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{diagram_panel, header, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(std::path::PathBuf),
    /// User requested a generated demo tree
    OpenDemoTreeRequested,
    /// A diagram node was clicked
    NodeClicked {
        node_id: String,
        was_already_selected: bool,
    },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Get theme colors for rendering
        let theme_colors = state
            .theme
            .theme_manager()
            .colors(state.theme.current_theme_name())
            .clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoTreeRequested => {
                        PanelInteraction::OpenDemoTreeRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Central panel: diagram canvas
        let diagram_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.extreme_bg_color);

        egui::CentralPanel::default()
            .frame(diagram_frame)
            .show(ctx, |ui| {
                if let Some(diagram_interaction) =
                    diagram_panel::render_diagram_panel(ui, ctx, state, loader, &theme_colors)
                {
                    interaction = Some(match diagram_interaction {
                        diagram_panel::DiagramPanelInteraction::NodeClicked {
                            node_id,
                            was_already_selected,
                        } => PanelInteraction::NodeClicked {
                            node_id,
                            was_already_selected,
                        },
                    });
                }
            });

        interaction
    }
}
