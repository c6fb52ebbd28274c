//! Edge rendering logic
//!
//! Draws parent-child connections as straight lines with arrowheads at the
//! child end. Edges on the highlighted path are drawn with a marching dash
//! pattern instead of a solid stroke.

use arborview::{arrowhead, straight_path, with_alpha, RenderEdge, ARROW_HALF_WIDTH, ARROW_LENGTH};
use eframe::egui;

use crate::rendering::node_renderer::NODE_RADIUS;
use crate::state::CameraState;

/// Dash and gap lengths for animated edges, in screen pixels.
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;
/// Dash travel speed for animated edges, in pixels per second.
const DASH_SPEED: f32 = 20.0;

/// Renders a single edge between two node centers.
///
/// Endpoints are pulled in to the node outlines so the line does not cross
/// the circles, and the arrowhead sits at the child outline.
///
/// # Arguments
/// * `painter` - Painter for the diagram canvas
/// * `edge` - Layout descriptor of the edge to draw
/// * `source_pos` - World position of the parent node center
/// * `target_pos` - World position of the child node center
/// * `camera` - Camera transform mapping world positions to screen
/// * `canvas` - Screen rectangle of the diagram canvas
/// * `time` - Animation clock in seconds, drives the dash offset
pub fn render_edge(
    painter: &egui::Painter,
    edge: &RenderEdge,
    source_pos: egui::Pos2,
    target_pos: egui::Pos2,
    camera: &CameraState,
    canvas: egui::Rect,
    time: f64,
) {
    let source = camera.world_to_screen(source_pos, canvas);
    let target = camera.world_to_screen(target_pos, canvas);

    let radius = NODE_RADIUS * camera.zoom();
    let arrow_length = ARROW_LENGTH * camera.zoom();

    let full_path = straight_path(source, target);
    if full_path.length() <= 2.0 * radius + arrow_length {
        // Nodes overlap on screen, nothing sensible to draw
        return;
    }

    // Line stops where the arrowhead begins
    let line_path = full_path.shrunk(radius, radius + arrow_length);
    let arrow_path = full_path.shrunk(radius, radius);

    let alpha = (edge.style.opacity * 255.0) as u8;
    let color = with_alpha(edge.style.stroke, alpha);
    let stroke = egui::Stroke::new(edge.style.width * camera.zoom(), color);

    if edge.animated {
        let offset = ((time * DASH_SPEED as f64) % (DASH_LENGTH + GAP_LENGTH) as f64) as f32;
        painter.extend(egui::Shape::dashed_line_with_offset(
            &[line_path.source, line_path.target],
            stroke,
            &[DASH_LENGTH],
            &[GAP_LENGTH],
            offset,
        ));
    } else {
        painter.line_segment([line_path.source, line_path.target], stroke);
    }

    let triangle = arrowhead(
        &arrow_path,
        arrow_length,
        ARROW_HALF_WIDTH * camera.zoom(),
    );
    painter.add(egui::Shape::convex_polygon(
        triangle.to_vec(),
        color,
        egui::Stroke::NONE,
    ));
}
