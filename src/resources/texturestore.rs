//! Texture registries.
//!
//! [`TextureStore`] owns the raylib textures and is only touched by the
//! render pass, so it lives in the world as a non-send resource.
//! [`TextureSizes`] mirrors the pixel size of every loaded texture as plain
//! data; the world composer and the spawner size sprites and hitboxes from it
//! without needing a graphics context.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Texture2D, Vector2};
use rustc_hash::FxHashMap;

pub const PLAYER_TEXTURE: &str = "player";
pub const GUN_TEXTURE: &str = "gun";
pub const BULLET_TEXTURE: &str = "bullet";

pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }
    /// Insert a texture and record its size in `sizes`.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D, sizes: &mut TextureSizes) {
        let key = key.into();
        sizes.insert(
            key.clone(),
            Vector2 {
                x: texture.width as f32,
                y: texture.height as f32,
            },
        );
        self.map.insert(key, texture);
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Pixel size of every loaded texture, keyed like [`TextureStore`].
#[derive(Resource, Debug, Clone, Default)]
pub struct TextureSizes {
    pub map: FxHashMap<String, Vector2>,
}

impl TextureSizes {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self, key: impl AsRef<str>) -> Option<Vector2> {
        self.map.get(key.as_ref()).copied()
    }
    pub fn insert(&mut self, key: impl Into<String>, size: Vector2) {
        self.map.insert(key.into(), size);
    }
    /// Builder variant of [`Self::insert`].
    pub fn with(mut self, key: impl Into<String>, width: f32, height: f32) -> Self {
        self.insert(key, Vector2 { x: width, y: height });
        self
    }
}
