//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – enemy frame lists and silhouettes, per kind
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles debug overlays
//! - `gameconfig` – window, map and spawner settings from `config.ini`
//! - `input` – per-frame keyboard and mouse state
//! - `screensize` – current framebuffer dimensions in pixels
//! - `spawner` – enemy spawn points and spawn timer
//! - `texturestore` – loaded textures and their sizes keyed by string IDs
//! - `tilemap` – decoded map layers
//! - `worldtime` – simulation time, delta and millisecond ticks
pub mod animationstore;
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod spawner;
pub mod texturestore;
pub mod tilemap;
pub mod worldtime;
