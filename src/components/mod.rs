//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – playback state of a frame-list animation
//! - [`boxcollider`] – axis-aligned hitbox relative to the entity position
//! - [`bullet`] – straight-flying projectile
//! - [`enemy`] – chasing enemy and its death sequence
//! - [`ground`] – marker for floor tiles, always drawn first
//! - [`gun`] – gun orbiting its owner, sprite pose and fire cooldown gate
//! - [`lifetime`] – despawn after a fixed simulation time
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`obstacle`] – marker for static collidable entities
//! - [`player`] – keyboard-controlled player
//! - [`rotation`] – rotation angle in degrees
//! - [`sprite`] – 2D sprite rendering component

pub mod animation;
pub mod boxcollider;
pub mod bullet;
pub mod enemy;
pub mod ground;
pub mod gun;
pub mod lifetime;
pub mod mapposition;
pub mod obstacle;
pub mod player;
pub mod rotation;
pub mod sprite;
