//! Playfield geometry.
//!
//! Gameplay positions are expressed in field space: origin at the top-left
//! corner, x to the right, y downwards. Bevy world space is centered with y up.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.size() * 0.5
    }

    #[inline]
    pub fn to_world(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.width * 0.5, self.height * 0.5 - p.y)
    }

    #[inline]
    pub fn to_field(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x + self.width * 0.5, self.height * 0.5 - p.y)
    }

    /// Whether a field-space point lies inside the field, expanded by `margin`.
    #[inline]
    pub fn contains(self, p: Vec2, margin: f32) -> bool {
        p.x >= -margin
            && p.x <= self.width + margin
            && p.y >= -margin
            && p.y <= self.height + margin
    }

    /// Clamp a field-space point into the field.
    #[inline]
    pub fn clamp(self, p: Vec2) -> Vec2 {
        p.clamp(Vec2::ZERO, self.size())
    }
}
