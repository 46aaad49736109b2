//! Axis-aligned boxes
//!
//! Every entity occupies an [`Aabb`]; the collision resolver works purely on
//! these plus the ball's velocity.

use glam::Vec2;

/// Axis-aligned bounding box, y-down screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from top-left corner and size.
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Bottom-center point (reward spawn anchor).
    #[inline]
    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new(self.center().x, self.max.y)
    }

    /// Overlap test with touching edges excluded.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Same box translated so its top-left corner sits at `pos`.
    pub fn at(&self, pos: Vec2) -> Self {
        Self::from_pos_size(pos, Vec2::new(self.width(), self.height()))
    }
}
