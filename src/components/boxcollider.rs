//! Axis-aligned hitbox attached to an entity.
//!
//! The hitbox is expressed relative to the entity's
//! [`MapPosition`](super::mapposition::MapPosition) pivot. Actors usually
//! carry a hitbox smaller than their sprite (see [`BoxCollider::centered`]).

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size whose top-left sits on the pivot.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Create a BoxCollider of the given size centered on the pivot.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vector2::new(-width * 0.5, -height * 0.5))
    }

    /// Hitbox of a `width` x `height` sprite shrunk by `inset` on each axis,
    /// centered on the pivot. Inset larger than the sprite clamps to zero.
    pub fn inset(width: f32, height: f32, inset: Vector2) -> Self {
        Self::centered((width - inset.x).max(0.0), (height - inset.y).max(0.0))
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// World-space hitbox rectangle for a given entity position.
    pub fn rect(&self, position: Vector2) -> Rectangle {
        let (min, max) = self.aabb(position);
        Rectangle {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Entity position that places this hitbox at `rect`. Inverse of [`Self::rect`].
    pub fn position_for(&self, rect: &Rectangle) -> Vector2 {
        let (min, _) = self.aabb(Vector2::zero());
        Vector2::new(rect.x - min.x, rect.y - min.y)
    }
}
