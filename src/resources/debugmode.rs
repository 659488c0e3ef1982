//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that hitbox outlines and the
//! debug HUD should be drawn. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws overlays.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
