//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems can agree on
//! a single world/screen transform. The camera `target` is the focus point
//! (the player's center) and its `offset` is the screen center, so the focus
//! point always lands in the middle of the screen.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

use crate::resources::screensize::ScreenSize;

/// ECS resource that holds the active 2D camera parameters.
///
/// Inserted by the world composer, updated by
/// [`camera_follow`](crate::systems::camera::camera_follow) and read by the
/// render pass.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera centered on `focus` for a screen of the given size.
    pub fn centered_on(focus: Vector2, screen: ScreenSize) -> Self {
        Camera2DRes(Camera2D {
            target: focus,
            offset: screen.center(),
            rotation: 0.0,
            zoom: 1.0,
        })
    }

    /// Translation from world to screen coordinates: `screen_center - focus`.
    pub fn offset(&self) -> Vector2 {
        compute_offset(self.0.target, self.0.offset)
    }
}

/// World-to-screen translation that puts `focus` at `screen_center`.
pub fn compute_offset(focus: Vector2, screen_center: Vector2) -> Vector2 {
    Vector2 {
        x: screen_center.x - focus.x,
        y: screen_center.y - focus.y,
    }
}
