//! Axis-aligned rectangles in world or screen space

use glam::Vec2;

/// Axis-aligned rectangle stored as its min (bottom-left) and max (top-right) corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Creates bounds from two opposite corners, in any order
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates bounds from an origin (bottom-left) and a size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin + size)
    }

    /// Creates bounds of the given size centered on `center`
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Degenerate bounds covering a single point
    pub fn point(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width() / self.height()
    }

    /// Smallest bounds covering both `self` and `other`
    pub fn union(&self, other: &Bounds) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns true if `p` lies inside or on the edge
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Returns true if `other` lies entirely inside `self`, with `epsilon` slack per edge
    pub fn contains_bounds(&self, other: &Bounds, epsilon: f32) -> bool {
        other.min.x >= self.min.x - epsilon
            && other.min.y >= self.min.y - epsilon
            && other.max.x <= self.max.x + epsilon
            && other.max.y <= self.max.y + epsilon
    }

    /// Returns true if every corner coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}
