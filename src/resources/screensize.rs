//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The gun aims from the
//! screen center and the camera places the player there.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.w as f32 / 2.0,
            y: self.h as f32 / 2.0,
        }
    }
}
