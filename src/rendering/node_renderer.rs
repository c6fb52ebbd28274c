//! Tree node rendering logic
//!
//! Draws individual tree nodes as labeled circles on the diagram canvas and
//! reports click interactions back to the caller.

use arborview::{RenderNode, ThemeColors};
use eframe::egui;

use crate::state::CameraState;

/// Radius of a node circle in world units.
pub const NODE_RADIUS: f32 = 22.0;

/// Outline stroke width for node circles.
const OUTLINE_WIDTH: f32 = 1.5;

/// Result of user interaction with a diagram node
pub enum NodeInteraction {
    /// Node was clicked to select it
    Clicked {
        node_id: String,
        was_already_selected: bool,
    },
}

/// Renders a single tree node as a filled circle with its value centered inside.
///
/// Highlighted nodes get the theme highlight fill plus a soft glow ring.
/// The selected node gets a thicker accent outline.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `node` - Layout descriptor of the node to draw
/// * `camera` - Camera transform mapping world positions to screen
/// * `canvas` - Screen rectangle of the diagram canvas
/// * `selected_id` - Currently selected node ID (if any)
/// * `theme_colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<NodeInteraction>` - Click interaction, if any
pub fn render_node(
    ui: &mut egui::Ui,
    node: &RenderNode,
    camera: &CameraState,
    canvas: egui::Rect,
    selected_id: Option<&str>,
    theme_colors: &ThemeColors,
) -> Option<NodeInteraction> {
    let center = camera.world_to_screen(node.pos, canvas);
    let radius = NODE_RADIUS * camera.zoom();

    // Skip nodes entirely outside the visible canvas
    let node_rect = egui::Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0));
    if !canvas.intersects(node_rect) {
        return None;
    }

    let is_selected = selected_id == Some(node.id.as_str());

    let mut interaction = None;

    let node_id = ui.id().with(("tree_node", &node.id));
    let response = ui.interact(node_rect, node_id, egui::Sense::click());
    if response.clicked() {
        interaction = Some(NodeInteraction::Clicked {
            node_id: node.id.clone(),
            was_already_selected: is_selected,
        });
    }

    let painter = ui.painter();

    if node.highlighted {
        // Glow ring behind the node circle
        let glow_color = arborview::theme::with_alpha(theme_colors.highlight, 70);
        painter.circle_filled(center, radius + 5.0 * camera.zoom(), glow_color);
    }

    let fill = if node.highlighted {
        theme_colors.highlight
    } else {
        theme_colors.node_fill
    };

    let outline = if is_selected {
        egui::Stroke::new(OUTLINE_WIDTH * 2.0 * camera.zoom(), theme_colors.accent)
    } else {
        egui::Stroke::new(OUTLINE_WIDTH * camera.zoom(), theme_colors.node_outline)
    };

    painter.circle_filled(center, radius, fill);
    painter.circle_stroke(center, radius, outline);

    let font_size = (13.0 * camera.zoom()).max(6.0);
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        &node.value,
        egui::FontId::proportional(font_size),
        theme_colors.node_text,
    );

    if response.hovered() && !is_selected {
        painter.circle_stroke(
            center,
            radius + 2.0 * camera.zoom(),
            egui::Stroke::new(1.0, theme_colors.hover),
        );
    }

    interaction
}
