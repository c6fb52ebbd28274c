//! Diagram panel UI rendering
//!
//! Central canvas showing the laid-out tree: background grid, edges with
//! arrowheads, and node circles. Owns per-frame input handling and the
//! deferred fit-to-view application.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::rendering::{edge_renderer, grid_renderer, node_renderer};
use crate::ui::input::diagram_input_handler;
use arborview::ThemeColors;
use eframe::egui;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Repaint cadence while dash animation is running.
const ANIMATION_FRAME: Duration = Duration::from_millis(33);

/// Result of user interaction with the diagram panel
pub enum DiagramPanelInteraction {
    /// A node was clicked
    NodeClicked {
        node_id: String,
        was_already_selected: bool,
    },
}

/// Renders the diagram canvas with grid, edges, and nodes
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `ctx` - The egui context for input and repaint scheduling
/// * `state` - Mutable reference to application state
/// * `loader` - Async loader for checking loading status
/// * `theme_colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<DiagramPanelInteraction>` - User interaction result
pub fn render_diagram_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    loader: &AsyncLoader,
    theme_colors: &ThemeColors,
) -> Option<DiagramPanelInteraction> {
    let canvas_rect = ui.available_rect_before_wrap();
    let canvas_response = ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());

    if loader.is_loading() {
        ui.painter().text(
            canvas_rect.center(),
            egui::Align2::CENTER_CENTER,
            "Loading snapshot...",
            egui::FontId::proportional(16.0),
            theme_colors.text_dim,
        );
        return None;
    }

    grid_renderer::render_grid(ui.painter(), &state.camera, canvas_rect, theme_colors);

    if !state.document.has_tree() {
        ui.painter().text(
            canvas_rect.center(),
            egui::Align2::CENTER_CENTER,
            "Open a snapshot or generate a demo tree to get started",
            egui::FontId::proportional(16.0),
            theme_colors.text_dim,
        );
        return None;
    }

    diagram_input_handler::handle_diagram_input(
        ctx,
        canvas_rect,
        &canvas_response,
        &mut state.camera,
    );

    let selected = state.document.selected().map(str::to_string);
    let diagram = state.document.diagram(theme_colors.edge).clone();

    // Apply a deferred fit once its settle delay has elapsed
    if state.camera.take_due_fit() {
        if let Some(bounds) = diagram.bounds() {
            state.camera.fit_to_bounds(bounds, canvas_rect);
        }
    }
    if let Some(deadline) = state.camera.pending_fit() {
        ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
    }

    let positions: HashMap<&str, egui::Pos2> = diagram
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.pos))
        .collect();

    // Edges first so nodes draw on top
    let time = ctx.input(|i| i.time);
    let mut any_animated = false;
    for edge in &diagram.edges {
        if let (Some(&source_pos), Some(&target_pos)) =
            (positions.get(edge.source.as_str()), positions.get(edge.target.as_str()))
        {
            edge_renderer::render_edge(
                ui.painter(),
                edge,
                source_pos,
                target_pos,
                &state.camera,
                canvas_rect,
                time,
            );
            any_animated |= edge.animated;
        }
    }

    let mut interaction = None;
    for node in &diagram.nodes {
        if let Some(node_renderer::NodeInteraction::Clicked {
            node_id,
            was_already_selected,
        }) = node_renderer::render_node(
            ui,
            node,
            &state.camera,
            canvas_rect,
            selected.as_deref(),
            theme_colors,
        ) {
            interaction = Some(DiagramPanelInteraction::NodeClicked {
                node_id,
                was_already_selected,
            });
        }
    }

    // Keep the dash animation moving
    if any_animated {
        ctx.request_repaint_after(ANIMATION_FRAME);
    }

    interaction
}
