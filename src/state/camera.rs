//! 2D camera state for the diagram canvas.
//!
//! Encapsulates pan offset, zoom level, world/screen transforms, and the
//! deferred fit-to-view request. The fit is applied a short moment after a
//! data change so layout settles before the camera moves; this is a
//! cosmetic scheduling nicety, not a correctness requirement.

use egui::{Pos2, Rect, Vec2};
use std::time::{Duration, Instant};

/// Minimum zoom level (zoomed far out).
pub const MIN_ZOOM: f32 = 0.1;
/// Maximum zoom level (zoomed far in).
pub const MAX_ZOOM: f32 = 2.0;
/// Maximum zoom a fit-to-view is allowed to reach.
pub const FIT_MAX_ZOOM: f32 = 1.5;
/// Fraction of the diagram extent kept as padding when fitting.
pub const FIT_PADDING: f32 = 0.2;
/// Delay between a fit request and its application.
pub const FIT_SETTLE: Duration = Duration::from_millis(50);

/// State related to the diagram camera.
///
/// Screen mapping: `screen = canvas.center() + world * zoom + pan`.
///
/// Responsibilities:
/// - Managing pan offset and zoom level
/// - Converting between world and screen coordinates
/// - Scheduling and applying deferred fit-to-view
#[derive(Debug, Clone)]
pub struct CameraState {
    /// Screen-space offset of the world origin from the canvas center
    pan: Vec2,
    /// Current zoom level
    zoom: f32,
    /// Deadline for a pending fit-to-view request
    fit_deadline: Option<Instant>,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraState {
    /// Creates a camera at the origin with 1:1 zoom.
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            fit_deadline: None,
        }
    }

    /// Resets the camera to its initial state.
    pub fn reset(&mut self) {
        self.pan = Vec2::ZERO;
        self.zoom = 1.0;
        self.fit_deadline = None;
    }

    // ===== Queries =====

    /// Returns the current zoom level.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Converts a world position to screen coordinates.
    pub fn world_to_screen(&self, world: Pos2, canvas: Rect) -> Pos2 {
        canvas.center() + world.to_vec2() * self.zoom + self.pan
    }

    /// Converts a screen position to world coordinates.
    pub fn screen_to_world(&self, screen: Pos2, canvas: Rect) -> Pos2 {
        (((screen - canvas.center()) - self.pan) / self.zoom).to_pos2()
    }

    /// Returns the deadline of a pending fit request, if any.
    pub fn pending_fit(&self) -> Option<Instant> {
        self.fit_deadline
    }

    // ===== Mutations =====

    /// Pans the camera by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Multiplies the zoom level, keeping the world point at the canvas
    /// center fixed.
    pub fn zoom_step(&mut self, factor: f32) {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan = self.pan * (new_zoom / self.zoom);
        self.zoom = new_zoom;
    }

    /// Multiplies the zoom level, keeping the world point under `focus`
    /// (a screen position) fixed.
    pub fn zoom_about(&mut self, factor: f32, focus: Pos2, canvas: Rect) {
        let world = self.screen_to_world(focus, canvas);
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom = new_zoom;
        self.pan = (focus - canvas.center()) - world.to_vec2() * new_zoom;
    }

    /// Requests a deferred fit-to-view; applied after [`FIT_SETTLE`].
    pub fn request_fit(&mut self) {
        self.fit_deadline = Some(Instant::now() + FIT_SETTLE);
    }

    /// Returns true (and clears the request) if a pending fit is due.
    pub fn take_due_fit(&mut self) -> bool {
        match self.fit_deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.fit_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Centers the camera on `bounds` with padding, clamping the fit zoom.
    pub fn fit_to_bounds(&mut self, bounds: Rect, canvas: Rect) {
        let padded_w = bounds.width() * (1.0 + 2.0 * FIT_PADDING);
        let padded_h = bounds.height() * (1.0 + 2.0 * FIT_PADDING);

        let zoom_x = if padded_w > 0.0 { canvas.width() / padded_w } else { FIT_MAX_ZOOM };
        let zoom_y = if padded_h > 0.0 { canvas.height() / padded_h } else { FIT_MAX_ZOOM };

        self.zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, FIT_MAX_ZOOM);
        self.pan = -bounds.center().to_vec2() * self.zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_world_screen_round_trip() {
        let mut camera = CameraState::new();
        camera.pan_by(Vec2::new(30.0, -12.0));
        camera.zoom_step(1.4);

        let world = Pos2::new(120.0, -45.0);
        let screen = camera.world_to_screen(world, canvas());
        let back = camera.screen_to_world(screen, canvas());
        assert!((back - world).length() < 0.001);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = CameraState::new();
        camera.zoom_step(1000.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
        camera.zoom_step(0.000_1);
        assert_eq!(camera.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_zoom_about_keeps_focus_fixed() {
        let mut camera = CameraState::new();
        let focus = Pos2::new(200.0, 150.0);
        let world_before = camera.screen_to_world(focus, canvas());
        camera.zoom_about(1.3, focus, canvas());
        let world_after = camera.screen_to_world(focus, canvas());
        assert!((world_after - world_before).length() < 0.001);
    }

    #[test]
    fn test_fit_centers_bounds() {
        let mut camera = CameraState::new();
        let bounds = Rect::from_min_max(Pos2::new(-320.0, 0.0), Pos2::new(320.0, 240.0));
        camera.fit_to_bounds(bounds, canvas());

        let center_screen = camera.world_to_screen(bounds.center(), canvas());
        assert!((center_screen - canvas().center()).length() < 0.001);
        assert!(camera.zoom() <= FIT_MAX_ZOOM);
        assert!(camera.zoom() >= MIN_ZOOM);
    }

    #[test]
    fn test_fit_of_single_point_bounds() {
        let mut camera = CameraState::new();
        let point = Rect::from_min_max(Pos2::new(5.0, 5.0), Pos2::new(5.0, 5.0));
        camera.fit_to_bounds(point, canvas());
        assert_eq!(camera.zoom(), FIT_MAX_ZOOM);
    }

    #[test]
    fn test_deferred_fit_becomes_due() {
        let mut camera = CameraState::new();
        assert!(!camera.take_due_fit());

        camera.request_fit();
        assert!(camera.pending_fit().is_some());
        std::thread::sleep(FIT_SETTLE + Duration::from_millis(10));
        assert!(camera.take_due_fit());
        assert!(camera.pending_fit().is_none());
    }
}
