use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its size in world units and a offset if the texture is a spritesheet.
/// The offset is used to select the correct tile from a tileset.
/// The origin selects the pivot point (in pixels) relative to the texture's top-left
/// used for placement and rotation when rendering.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Sprite {
    /// Whole-texture sprite with its pivot at the top-left corner.
    pub fn top_left(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2::zero(),
            origin: Vector2::zero(),
            flip_h: false,
            flip_v: false,
        }
    }

    /// Whole-texture sprite with its pivot at the center.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            origin: Vector2::new(width * 0.5, height * 0.5),
            ..Self::top_left(tex_key, width, height)
        }
    }

    /// Top-left corner of the sprite in world space for a pivot at `pos`.
    pub fn top_left_at(&self, pos: Vector2) -> Vector2 {
        Vector2::new(pos.x - self.origin.x, pos.y - self.origin.y)
    }

    /// Bottom edge of the sprite in world space for a pivot at `pos`.
    pub fn bottom_at(&self, pos: Vector2) -> f32 {
        pos.y - self.origin.y + self.height
    }
}
