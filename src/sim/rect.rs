//! Axis-aligned rectangle geometry for the paddle and bricks
//!
//! Screen coordinates: `min` is the top-left corner and y grows downward,
//! so "top" is the smaller y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four rectangle faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    /// Unit normal pointing away from the rectangle
    pub fn outward_normal(&self) -> Vec2 {
        match self {
            Face::Left => Vec2::NEG_X,
            Face::Right => Vec2::X,
            Face::Top => Vec2::NEG_Y,
            Face::Bottom => Vec2::Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Closest point on (or inside) the rectangle to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.min + self.size)
    }

    /// Distance from `p` to the line of each face, in Left/Right/Top/Bottom order
    pub fn edge_distances(&self, p: Vec2) -> [(Face, f32); 4] {
        [
            (Face::Left, (p.x - self.left()).abs()),
            (Face::Right, (p.x - self.right()).abs()),
            (Face::Top, (p.y - self.top()).abs()),
            (Face::Bottom, (p.y - self.bottom()).abs()),
        ]
    }

    /// Face closest to `p`; ties go to the earlier face in Left/Right/Top/Bottom order
    pub fn nearest_face(&self, p: Vec2) -> Face {
        let distances = self.edge_distances(p);
        let mut best = distances[0];
        for candidate in &distances[1..] {
            if candidate.1 < best.1 {
                best = *candidate;
            }
        }
        best.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn test_closest_point_outside_and_inside() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(rect.closest_point(Vec2::new(-5.0, 20.0)), Vec2::new(0.0, 20.0));
        assert_eq!(rect.closest_point(Vec2::new(150.0, -30.0)), Vec2::new(100.0, 0.0));
        // Inside points are their own closest point
        assert_eq!(rect.closest_point(Vec2::new(30.0, 10.0)), Vec2::new(30.0, 10.0));
    }

    #[test]
    fn test_nearest_face() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(rect.nearest_face(Vec2::new(50.0, -3.0)), Face::Top);
        assert_eq!(rect.nearest_face(Vec2::new(50.0, 44.0)), Face::Bottom);
        assert_eq!(rect.nearest_face(Vec2::new(-2.0, 20.0)), Face::Left);
        assert_eq!(rect.nearest_face(Vec2::new(103.0, 20.0)), Face::Right);
    }

    #[test]
    fn test_nearest_face_tie_break_order() {
        // Exactly on the top-left corner: Left wins over Top
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(rect.nearest_face(Vec2::ZERO), Face::Left);
        // Equidistant from top and bottom, far from the sides
        let square = Rect::new(0.0, 0.0, 100.0, 10.0);
        assert_eq!(square.nearest_face(Vec2::new(50.0, 5.0)), Face::Top);
    }

    #[test]
    fn test_outward_normals_point_at_their_face() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        for face in [Face::Left, Face::Right, Face::Top, Face::Bottom] {
            // Just inside each face
            let point = rect.center() + face.outward_normal() * 4.0;
            assert_eq!(rect.nearest_face(point), face);
        }
    }
}
