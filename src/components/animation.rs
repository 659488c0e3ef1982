use bevy_ecs::prelude::Component;

/// Frame-list animation playback state.
///
/// `frame_index` accumulates `fps * delta` every frame; the visible frame is
/// `floor(frame_index) mod frame_count`. Frame lists live in
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Component, PartialEq)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0.0,
        }
    }

    /// Index of the visible frame, or `None` for an empty frame list.
    pub fn current_frame(&self, frame_count: usize) -> Option<usize> {
        if frame_count == 0 {
            return None;
        }
        Some(self.frame_index.max(0.0) as usize % frame_count)
    }
}
