//! Background grid rendering
//!
//! Draws the dotted world-space grid behind the diagram so pan and zoom
//! motion stays readable against an otherwise uniform background.

use arborview::{with_alpha, ThemeColors};
use eframe::egui;

use crate::state::CameraState;

/// World-space distance between grid dots.
pub const GRID_GAP: f32 = 12.0;
/// Dot radius in screen pixels.
const DOT_RADIUS: f32 = 1.0;
/// Minimum on-screen gap before dots are thinned out.
const MIN_SCREEN_GAP: f32 = 8.0;

/// Renders the dotted background grid over the canvas rect.
///
/// Dots are anchored in world space so they move with the camera. When
/// zoomed far out the gap is doubled until dots stay at least
/// `MIN_SCREEN_GAP` pixels apart on screen.
pub fn render_grid(
    painter: &egui::Painter,
    camera: &CameraState,
    canvas: egui::Rect,
    theme_colors: &ThemeColors,
) {
    let mut world_gap = GRID_GAP;
    while world_gap * camera.zoom() < MIN_SCREEN_GAP {
        world_gap *= 2.0;
    }

    let top_left = camera.screen_to_world(canvas.min, canvas);
    let bottom_right = camera.screen_to_world(canvas.max, canvas);

    let first_col = (top_left.x / world_gap).floor() as i64;
    let last_col = (bottom_right.x / world_gap).ceil() as i64;
    let first_row = (top_left.y / world_gap).floor() as i64;
    let last_row = (bottom_right.y / world_gap).ceil() as i64;

    let color = with_alpha(theme_colors.grid_dot, 120);

    for row in first_row..=last_row {
        for col in first_col..=last_col {
            let world = egui::pos2(col as f32 * world_gap, row as f32 * world_gap);
            let screen = camera.world_to_screen(world, canvas);
            painter.circle_filled(screen, DOT_RADIUS, color);
        }
    }
}
