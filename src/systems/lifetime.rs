//! Lifetime system.
//!
//! Despawns every entity whose [`Lifetime`] has run out. Ages are measured in
//! simulation ticks, so a paused or slowed clock (see
//! [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime)) also
//! delays expiry.

use bevy_ecs::prelude::*;

use crate::components::lifetime::Lifetime;
use crate::resources::worldtime::WorldTime;

/// Despawns entities whose age reached their lifetime.
pub fn lifetime_system(
    world_time: Res<WorldTime>,
    query: Query<(Entity, &Lifetime)>,
    mut commands: Commands,
) {
    for (entity, lifetime) in query.iter() {
        if lifetime.expired(world_time.ticks) {
            commands.entity(entity).try_despawn();
        }
    }
}
