//! Ground marker component.
//!
//! Entities tagged with [`Ground`] are floor tiles. The render pass always
//! draws them before anything else, whatever their Y coordinate.

use bevy_ecs::prelude::Component;

/// Tag component for floor tiles drawn behind every other sprite.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Ground;
