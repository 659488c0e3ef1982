//! Player movement.
//!
//! The direction comes from the keyboard (WASD or arrows), normalized so
//! diagonals are not faster. Motion is applied per axis through
//! [`move_and_collide`], so the hitbox slides along walls.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::geometry::normalize_or_zero;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::{move_and_collide, obstacle_rects};

pub fn player_movement(
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut players: Query<(&mut Player, &mut MapPosition, &BoxCollider)>,
    obstacles: Query<(&MapPosition, &BoxCollider), (With<Obstacle>, Without<Player>)>,
) {
    let direction = normalize_or_zero(input.movement_vector());
    let obstacles = obstacle_rects(obstacles.iter());

    for (mut player, mut position, collider) in players.iter_mut() {
        player.direction = direction;
        let distance = player.speed * time.delta;
        position.pos = move_and_collide(position.pos, collider, direction, distance, &obstacles);
    }
}
