//! Player component.
//!
//! The player is an actor driven by the movement input. Its
//! [`MapPosition`](super::mapposition::MapPosition) is the sprite center and
//! its [`BoxCollider`](super::boxcollider::BoxCollider) is an inset hitbox
//! used against the static collision set.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Default movement speed in world units per second.
pub const PLAYER_SPEED: f32 = 500.0;
/// How much the hitbox is shrunk from the sprite size on each axis.
pub const PLAYER_HITBOX_INSET: Vector2 = Vector2 { x: 60.0, y: 90.0 };

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Player {
    /// Speed in world units per second.
    pub speed: f32,
    /// Normalized movement direction of the last update, or zero.
    pub direction: Vector2,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_SPEED)
    }
}

impl Player {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            direction: Vector2::zero(),
        }
    }
}
