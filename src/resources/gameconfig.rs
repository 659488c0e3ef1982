//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup; any key missing from the file keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [map]
//! path = ./assets/maps/world.json
//!
//! [enemies]
//! enabled = true
//! spawn_interval_ms = 300
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_MAP_PATH: &str = "./assets/maps/world.json";
const DEFAULT_SPAWN_ENABLED: bool = true;
const DEFAULT_SPAWN_INTERVAL_MS: u64 = 300;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Path to the JSON map file.
    pub map_path: PathBuf,
    /// Whether enemies are spawned at all.
    pub spawn_enabled: bool,
    /// Time between two enemy spawns.
    pub spawn_interval_ms: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            spawn_enabled: DEFAULT_SPAWN_ENABLED,
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, map={}, spawn={} every {}ms",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.map_path.display(),
            self.spawn_enabled,
            self.spawn_interval_ms
        );

        Ok(())
    }

    /// Parse configuration from INI text. Used by tests and by `load_from_file`.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [map] section
        if let Some(path) = config.get("map", "path") {
            self.map_path = PathBuf::from(path);
        }

        // [enemies] section
        if let Some(enabled) = config.getbool("enemies", "enabled").ok().flatten() {
            self.spawn_enabled = enabled;
        }
        if let Some(interval) = config.getuint("enemies", "spawn_interval_ms").ok().flatten() {
            self.spawn_interval_ms = interval;
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 120);
        assert_eq!(config.spawn_interval_ms, 300);
        assert!(config.spawn_enabled);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 800\n\n[map]\npath = maps/test.json\n\n[enemies]\nenabled = false\n",
            )
            .unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.map_path, PathBuf::from("maps/test.json"));
        assert!(!config.spawn_enabled);
        assert_eq!(config.spawn_interval_ms, 300);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config, GameConfig::with_path("./definitely/not/here.ini"));
    }
}
