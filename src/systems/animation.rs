//! Animation system.
//!
//! [`animation`] advances every frame-list animation by `fps * delta` and
//! swaps the sprite texture to the visible frame.
//!
//! # Animation Flow
//!
//! 1. Frame lists are defined in [`AnimationStore`] (one entry per enemy kind)
//! 2. Entities have an [`Animation`] component pointing to a key
//! 3. The `animation` system advances `frame_index` and sets [`Sprite::tex_key`]
//!
//! Unknown keys and empty frame lists leave the entity untouched. Dying
//! enemies lose their [`Animation`] so the silhouette stays on screen.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };
        let frame_count = animation.frames.len();
        if frame_count == 0 {
            continue;
        }

        anim_comp.frame_index += animation.fps * time.delta;
        // Keep the accumulator small; the visible frame is unchanged.
        anim_comp.frame_index %= frame_count as f32;

        if let Some(frame) = anim_comp.current_frame(frame_count) {
            let key = &animation.frames[frame];
            if sprite.tex_key != *key {
                sprite.tex_key = key.clone();
            }
        }
    }
}
