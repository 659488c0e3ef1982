//! Collision handling.
//!
//! - [`obstacle_rects`] snapshots the static collision set once per system run,
//!   so no obstacle is inserted or removed while actors are being resolved.
//! - [`move_and_collide`] moves a hitbox one axis at a time and pushes it out of
//!   obstacles after each axis.
//! - [`bullet_enemy_contact`] emits [`EnemyHitEvent`] for every alive enemy
//!   touched by a bullet and removes the bullet.
use bevy_ecs::prelude::*;
use raylib::prelude::{Rectangle, Vector2};
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::bullet::Bullet;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::events::enemy::EnemyHitEvent;
use crate::geometry::{Axis, intersects, resolve_against};

/// World-space hitboxes of a set of obstacles.
pub fn obstacle_rects<'a>(
    obstacles: impl Iterator<Item = (&'a MapPosition, &'a BoxCollider)>,
) -> Vec<Rectangle> {
    obstacles
        .map(|(position, collider)| collider.rect(position.pos))
        .collect()
}

/// Move an entity at `position` by `direction * distance`, resolving the
/// horizontal axis against `obstacles` before applying the vertical
/// displacement. Returns the new entity position.
pub fn move_and_collide(
    position: Vector2,
    collider: &BoxCollider,
    direction: Vector2,
    distance: f32,
    obstacles: &[Rectangle],
) -> Vector2 {
    let mut hitbox = collider.rect(position);

    hitbox.x += direction.x * distance;
    resolve_against(&mut hitbox, obstacles, Axis::Horizontal, direction.x);

    hitbox.y += direction.y * distance;
    resolve_against(&mut hitbox, obstacles, Axis::Vertical, direction.y);

    collider.position_for(&hitbox)
}

/// Kill every alive enemy whose hitbox overlaps a bullet sprite; the bullet is removed.
pub fn bullet_enemy_contact(
    mut commands: Commands,
    bullets: Query<(Entity, &MapPosition, &Sprite), With<Bullet>>,
    enemies: Query<(Entity, &MapPosition, &BoxCollider, &Enemy)>,
) {
    let targets: Vec<(Entity, Rectangle)> = enemies
        .iter()
        .filter(|(_, _, _, enemy)| enemy.is_alive())
        .map(|(entity, position, collider, _)| (entity, collider.rect(position.pos)))
        .collect();
    if targets.is_empty() {
        return;
    }

    let mut hit: FxHashSet<Entity> = FxHashSet::default();
    for (bullet, position, sprite) in bullets.iter() {
        let top_left = sprite.top_left_at(position.pos);
        let bullet_rect = Rectangle {
            x: top_left.x,
            y: top_left.y,
            width: sprite.width,
            height: sprite.height,
        };

        let mut touched = false;
        for (enemy, enemy_rect) in targets.iter() {
            if !hit.contains(enemy) && intersects(&bullet_rect, enemy_rect) {
                hit.insert(*enemy);
                touched = true;
                commands.trigger(EnemyHitEvent { enemy: *enemy });
            }
        }
        if touched {
            commands.entity(bullet).try_despawn();
        }
    }
}
