//! Periodic enemy spawning.
//!
//! Driven by the [`EnemySpawner`] resource. When a spawn is due, one kind is
//! drawn from the [`AnimationStore`] (keys in sorted order, so a seeded
//! spawner is reproducible) and placed at a random spawn point.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::resources::animationstore::AnimationStore;
use crate::resources::spawner::EnemySpawner;
use crate::resources::texturestore::TextureSizes;
use crate::resources::worldtime::WorldTime;
use crate::systems::enemy::spawn_enemy;

pub fn enemy_spawner(
    mut commands: Commands,
    time: Res<WorldTime>,
    spawner: Option<ResMut<EnemySpawner>>,
    animations: Res<AnimationStore>,
    sizes: Res<TextureSizes>,
) {
    let Some(mut spawner) = spawner else {
        return;
    };
    if !spawner.poll(time.ticks) {
        return;
    }

    let kinds = animations.keys_sorted();
    let Some(index) = spawner.pick_index(kinds.len()) else {
        return;
    };
    let Some(center) = spawner.pick_point() else {
        return;
    };
    let kind = kinds[index];
    let Some(animation) = animations.get(kind) else {
        return;
    };
    let Some(size) = animation.first_frame().and_then(|frame| sizes.get(frame)) else {
        warn!("No texture for enemy kind '{}', skipping spawn", kind);
        return;
    };

    let entity = spawn_enemy(&mut commands, kind, animation, center, size);
    debug!(
        "Spawned {} {:?} at ({}, {})",
        kind, entity, center.x, center.y
    );
}
