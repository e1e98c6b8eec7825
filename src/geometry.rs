//! Axis-aligned bounding boxes, the unit of every collision query.

use glam::Vec2;

/// An axis-aligned bounding box anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Bottom-left corner, world space.
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Builds a box of the given size centered on a point.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// True when the two boxes overlap with positive area. Boxes that only
    /// share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }

    /// True when the point lies inside the box. The minimum edges are
    /// inclusive, the maximum edges exclusive.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.size.y
    }

    pub fn translated(&self, offset: Vec2) -> Aabb {
        Aabb::new(self.pos + offset, self.size)
    }
}
