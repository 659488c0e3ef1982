//! World-space position component.
//!
//! [`MapPosition`] is the pivot of an entity in map coordinates. Static map
//! sprites use their top-left corner as pivot; actors (player, gun, bullets,
//! enemies) use their center. The [`Sprite`](super::sprite::Sprite) origin and
//! the [`BoxCollider`](super::boxcollider::BoxCollider) offset are expressed
//! relative to this pivot.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}
