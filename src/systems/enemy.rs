//! Enemy systems.
//!
//! - [`enemy_chase`] steers alive enemies toward the player's center and moves
//!   them with per-axis obstacle resolution.
//! - [`enemy_death_timer`] despawns enemies whose death sequence is over.
//! - [`spawn_enemy`] builds the component bundle of a fresh enemy.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::enemy::{ENEMY_HITBOX_INSET, Enemy};
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::geometry::normalize_or_zero;
use crate::resources::animationstore::AnimationResource;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::{move_and_collide, obstacle_rects};

/// Spawn an alive enemy of kind `kind` centered on `center`.
///
/// `size` is the pixel size of the first animation frame; the hitbox is that
/// size shrunk by [`ENEMY_HITBOX_INSET`].
pub fn spawn_enemy(
    commands: &mut Commands,
    kind: &str,
    animation: &AnimationResource,
    center: Vector2,
    size: Vector2,
) -> Entity {
    let first_frame = animation.first_frame().unwrap_or(kind);
    commands
        .spawn((
            Enemy::new(animation.silhouette.clone()),
            Animation::new(kind),
            MapPosition::from_vec(center),
            Sprite::centered(first_frame, size.x, size.y),
            BoxCollider::inset(size.x, size.y, ENEMY_HITBOX_INSET),
        ))
        .id()
}

pub fn enemy_chase(
    time: Res<WorldTime>,
    players: Query<&MapPosition, (With<Player>, Without<Enemy>)>,
    mut enemies: Query<(&mut Enemy, &mut MapPosition, &BoxCollider)>,
    obstacles: Query<(&MapPosition, &BoxCollider), (With<Obstacle>, Without<Enemy>)>,
) {
    let Some(target) = players.iter().next().map(|p| p.pos) else {
        for (mut enemy, _, _) in enemies.iter_mut() {
            enemy.direction = Vector2::zero();
        }
        return;
    };
    let obstacles = obstacle_rects(obstacles.iter());

    for (mut enemy, mut position, collider) in enemies.iter_mut() {
        if !enemy.is_alive() {
            continue;
        }
        enemy.direction = normalize_or_zero(target - position.pos);
        let distance = enemy.speed * time.delta;
        position.pos = move_and_collide(
            position.pos,
            collider,
            enemy.direction,
            distance,
            &obstacles,
        );
    }
}

pub fn enemy_death_timer(
    mut commands: Commands,
    time: Res<WorldTime>,
    enemies: Query<(Entity, &Enemy)>,
) {
    for (entity, enemy) in enemies.iter() {
        if enemy.death_finished(time.ticks) {
            commands.entity(entity).try_despawn();
        }
    }
}
