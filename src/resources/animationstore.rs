//! Animation resource registry.
//!
//! Frame lists are shared by every enemy of the same kind. Each entry also
//! names the silhouette texture shown while an enemy of that kind is dying
//! (a white mask of its first frame generated at load time).

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Default playback speed of enemy animations, in frames per second.
pub const DEFAULT_ANIMATION_FPS: f32 = 6.0;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self, key: impl AsRef<str>) -> Option<&AnimationResource> {
        self.animations.get(key.as_ref())
    }
    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }
    /// Animation keys in a stable (sorted) order.
    pub fn keys_sorted(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.animations.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Immutable data describing a frame-list animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture keys in [`crate::resources::texturestore::TextureStore`], in playback order.
    pub frames: Vec<String>,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Texture key of the death silhouette.
    pub silhouette: String,
}

impl AnimationResource {
    pub fn new(frames: Vec<String>, silhouette: impl Into<String>) -> Self {
        Self {
            frames,
            fps: DEFAULT_ANIMATION_FPS,
            silhouette: silhouette.into(),
        }
    }

    pub fn first_frame(&self) -> Option<&str> {
        self.frames.first().map(String::as_str)
    }
}
