//! Edge path geometry.
//!
//! Pure geometric helpers for drawing parent-child connections: a straight
//! path between two endpoints and a directional arrowhead at the target end.

use egui::{Pos2, Vec2};

/// Arrowhead length along the edge direction, in diagram units.
pub const ARROW_LENGTH: f32 = 10.0;
/// Half of the arrowhead base width.
pub const ARROW_HALF_WIDTH: f32 = 3.5;

/// A straight path between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePath {
    /// Path start point.
    pub source: Pos2,
    /// Path end point.
    pub target: Pos2,
}

impl EdgePath {
    /// Returns the path length.
    pub fn length(&self) -> f32 {
        (self.target - self.source).length()
    }

    /// Returns the unit direction from source to target, or `Vec2::ZERO`
    /// for a degenerate zero-length path.
    pub fn direction(&self) -> Vec2 {
        let delta = self.target - self.source;
        let len = delta.length();
        if len > f32::EPSILON {
            delta / len
        } else {
            Vec2::ZERO
        }
    }

    /// Returns the point at parameter `t` in [0, 1] along the path.
    pub fn point_at(&self, t: f32) -> Pos2 {
        self.source + (self.target - self.source) * t
    }

    /// Returns a copy with both endpoints pulled inward by the given
    /// margins, so the path connects node outlines rather than centers.
    pub fn shrunk(&self, source_margin: f32, target_margin: f32) -> EdgePath {
        let dir = self.direction();
        EdgePath {
            source: self.source + dir * source_margin,
            target: self.target - dir * target_margin,
        }
    }
}

/// Returns the straight path between two endpoint coordinates.
pub fn straight_path(source: Pos2, target: Pos2) -> EdgePath {
    EdgePath { source, target }
}

/// Computes the arrowhead triangle for a path, pointing along the path
/// direction with its tip at the target end.
///
/// A degenerate zero-length path yields a degenerate triangle collapsed at
/// the target point.
pub fn arrowhead(path: &EdgePath, length: f32, half_width: f32) -> [Pos2; 3] {
    let dir = path.direction();
    let normal = Vec2::new(-dir.y, dir.x);
    let tip = path.target;
    let base = tip - dir * length;
    [tip, base + normal * half_width, base - normal * half_width]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_and_length() {
        let path = straight_path(Pos2::new(0.0, 0.0), Pos2::new(0.0, 10.0));
        assert_eq!(path.length(), 10.0);
        assert_eq!(path.direction(), Vec2::new(0.0, 1.0));
        assert_eq!(path.point_at(0.5), Pos2::new(0.0, 5.0));
    }

    #[test]
    fn test_degenerate_path() {
        let p = Pos2::new(3.0, 4.0);
        let path = straight_path(p, p);
        assert_eq!(path.direction(), Vec2::ZERO);
        let tri = arrowhead(&path, ARROW_LENGTH, ARROW_HALF_WIDTH);
        assert_eq!(tri, [p, p, p]);
    }

    #[test]
    fn test_arrowhead_tip_at_target() {
        let path = straight_path(Pos2::new(0.0, 0.0), Pos2::new(100.0, 0.0));
        let tri = arrowhead(&path, ARROW_LENGTH, ARROW_HALF_WIDTH);
        assert_eq!(tri[0], Pos2::new(100.0, 0.0));
        // Base corners sit behind the tip, offset symmetrically.
        assert_eq!(tri[1], Pos2::new(90.0, 3.5));
        assert_eq!(tri[2], Pos2::new(90.0, -3.5));
    }

    #[test]
    fn test_shrunk_connects_outlines() {
        let path = straight_path(Pos2::new(0.0, 0.0), Pos2::new(0.0, 100.0));
        let shrunk = path.shrunk(20.0, 25.0);
        assert_eq!(shrunk.source, Pos2::new(0.0, 20.0));
        assert_eq!(shrunk.target, Pos2::new(0.0, 75.0));
    }
}
