use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Projectile moving in a straight line. Removal is handled by its
/// [`Lifetime`](super::lifetime::Lifetime).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    /// Unit direction of travel.
    pub direction: Vector2,
    /// Speed in world units per second.
    pub speed: f32,
}

impl Bullet {
    pub fn new(direction: Vector2, speed: f32) -> Self {
        Self { direction, speed }
    }
}
