//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: x grows right, y grows down. All tests are inclusive,
//! so shapes that only touch along an edge count as overlapping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    /// Inclusive point containment
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// Overlap magnitudes of a circle's bounding extent past each rectangle edge
///
/// `left` is how far the circle reaches right of the rectangle's left edge,
/// `right` how far it reaches left of the right edge, and so on. The smallest
/// one names the edge the circle most likely came through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Penetration {
    /// Smallest of the four depths
    pub fn min(&self) -> f32 {
        self.left.min(self.right).min(self.top).min(self.bottom)
    }

    /// True when the shallowest overlap is through a vertical edge
    ///
    /// Ties go to the horizontal axis: left/right are compared first.
    pub fn is_horizontal(&self) -> bool {
        let min = self.min();
        min == self.left || min == self.right
    }
}

/// AABB overlap test (touching edges overlap)
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left <= b.right && a.right >= b.left && a.top <= b.bottom && a.bottom >= b.top
}

/// True if the circle's bounding extent reaches into the rectangle
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    overlaps(&Rect::around_circle(center, radius), rect)
}

/// Per-edge overlap of a circle's bounding extent with a rectangle
///
/// Depths are clamped to zero, so a circle that misses an edge entirely
/// reports `0.0` for it rather than a negative distance.
pub fn penetration_depths(center: Vec2, radius: f32, rect: &Rect) -> Penetration {
    Penetration {
        left: (center.x + radius - rect.left).max(0.0),
        right: (rect.right - (center.x - radius)).max(0.0),
        top: (center.y + radius - rect.top).max(0.0),
        bottom: (rect.bottom - (center.y - radius)).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps_inclusive_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 20.0, 10.0);
        let apart = Rect::new(10.5, 0.0, 20.0, 10.0);
        assert!(overlaps(&a, &touching));
        assert!(overlaps(&touching, &a));
        assert!(!overlaps(&a, &apart));
    }

    #[test]
    fn test_overlaps_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 60.0, 60.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_circle_intersects_rect() {
        let rect = Rect::new(100.0, 100.0, 200.0, 150.0);
        assert!(circle_intersects_rect(Vec2::new(90.0, 120.0), 18.0, &rect));
        assert!(!circle_intersects_rect(Vec2::new(50.0, 120.0), 18.0, &rect));
        assert!(!circle_intersects_rect(Vec2::new(150.0, 180.0), 18.0, &rect));
        // Leading edge exactly on the rectangle edge
        assert!(circle_intersects_rect(Vec2::new(82.0, 120.0), 18.0, &rect));
    }

    #[test]
    fn test_penetration_from_below() {
        let rect = Rect::new(100.0, 100.0, 200.0, 150.0);
        // Ball centered under the brick, poking 4px into the bottom edge
        let p = penetration_depths(Vec2::new(150.0, 164.0), 18.0, &rect);
        assert_eq!(p.bottom, 4.0);
        assert_eq!(p.top, 82.0);
        assert_eq!(p.left, 68.0);
        assert_eq!(p.right, 68.0);
        assert_eq!(p.min(), 4.0);
        assert!(!p.is_horizontal());
    }

    #[test]
    fn test_penetration_from_side() {
        let rect = Rect::new(100.0, 100.0, 200.0, 150.0);
        let p = penetration_depths(Vec2::new(85.0, 125.0), 18.0, &rect);
        assert_eq!(p.left, 3.0);
        assert!(p.is_horizontal());
    }

    #[test]
    fn test_penetration_tie_prefers_horizontal() {
        let p = Penetration {
            left: 5.0,
            right: 50.0,
            top: 5.0,
            bottom: 50.0,
        };
        assert!(p.is_horizontal());
    }

    #[test]
    fn test_penetration_never_negative() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let p = penetration_depths(Vec2::new(500.0, 500.0), 1.0, &rect);
        assert!(p.left >= 0.0 && p.right >= 0.0 && p.top >= 0.0 && p.bottom >= 0.0);
    }

    #[test]
    fn test_rect_contains_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(0.0, 5.0)));
        assert!(!rect.contains(Vec2::new(10.1, 5.0)));
    }
}
