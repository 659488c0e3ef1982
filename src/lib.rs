//! Survivor library.
//!
//! Exposes the game's ECS components, resources, systems, and events for use
//! in integration tests and by the `survivor` binary.

pub mod components;
pub mod events;
pub mod game;
pub mod geometry;
pub mod resources;
pub mod systems;
