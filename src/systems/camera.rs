use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::screensize::ScreenSize;

/// Keep the camera focused on the player, with the focus at the screen center.
///
/// Without a player the camera stays where it is.
pub fn camera_follow(
    players: Query<&MapPosition, With<Player>>,
    screen: Res<ScreenSize>,
    mut camera: ResMut<Camera2DRes>,
) {
    let Some(player) = players.iter().next() else {
        return;
    };
    camera.0.target = player.pos;
    camera.0.offset = screen.center();
}
