use bevy_ecs::prelude::Component;

/// Counter-clockwise rotation of the sprite around its origin, in degrees.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}
