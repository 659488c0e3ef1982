//! Static obstacle marker component.
//!
//! Entities carrying [`Obstacle`] together with a
//! [`BoxCollider`](super::boxcollider::BoxCollider) form the static collision
//! set. Moving actors are pushed out of them one axis at a time. Obstacles
//! are only spawned by the world composer, never during a frame's collision
//! queries.

use bevy_ecs::prelude::Component;

/// Tag component for members of the static collision set.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Obstacle;
