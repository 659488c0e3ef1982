//! Enemy death trigger.
//!
//! Whatever decides that an enemy was hit (the bullet contact system, or any
//! other game rule) triggers an [`EnemyHitEvent`]. The
//! [`enemy_hit_observer`] then starts the enemy's death sequence: it records
//! the current tick, swaps the sprite to the silhouette texture and removes
//! the [`Animation`] so the frame stays frozen.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::Animation;
use crate::components::enemy::Enemy;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Event fired when an enemy must start dying.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyHitEvent {
    pub enemy: Entity,
}

/// Global observer that moves a hit enemy from `Alive` to `Dying`.
///
/// Entities that are not enemies, or that are already dying, are ignored.
pub fn enemy_hit_observer(
    trigger: On<EnemyHitEvent>,
    mut commands: Commands,
    time: Res<WorldTime>,
    mut enemies: Query<(&mut Enemy, &mut Sprite)>,
) {
    let entity = trigger.event().enemy;
    let Ok((mut enemy, mut sprite)) = enemies.get_mut(entity) else {
        return;
    };
    if !enemy.begin_dying(time.ticks) {
        return;
    }
    sprite.tex_key = enemy.silhouette_key.clone();
    commands.entity(entity).remove::<Animation>();
    debug!("Enemy {:?} dying at {}ms", entity, time.ticks);
}
