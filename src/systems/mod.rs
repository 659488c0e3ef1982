//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – advance enemy frame animations
//! - [`camera`] – keep the camera on the player
//! - [`collision`] – per-axis movement against obstacles, bullet/enemy contact
//! - [`enemy`] – chase the player, finish death sequences, spawn helper
//! - [`gun`] – aim, cooldown and firing
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`lifetime`] – despawn expired entities
//! - [`player`] – keyboard movement
//! - [`projectile`] – bullet flight
//! - [`render`] – depth-sorted draw list and debug overlays using Raylib
//! - [`spawner`] – periodic enemy spawning
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod camera;
pub mod collision;
pub mod enemy;
pub mod gun;
pub mod input;
pub mod lifetime;
pub mod player;
pub mod projectile;
pub mod render;
pub mod spawner;
pub mod time;
