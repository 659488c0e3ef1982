use bevy_ecs::prelude::*;

use crate::components::bullet::Bullet;
use crate::components::mapposition::MapPosition;
use crate::resources::worldtime::WorldTime;

/// Bullets fly in a straight line and ignore obstacles.
pub fn bullet_movement(time: Res<WorldTime>, mut bullets: Query<(&Bullet, &mut MapPosition)>) {
    for (bullet, mut position) in bullets.iter_mut() {
        position.pos = position.pos + bullet.direction * (bullet.speed * time.delta);
    }
}
