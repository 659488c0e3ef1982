//! Decoded map data.
//!
//! Maps are JSON documents with a tile size, tile layers (tileset texture key
//! plus tile ids) and object layers (positioned rectangles with an optional
//! image and a name). The world composer reads four named layers:
//!
//! - [`GROUND_LAYER`] – tile layer, one floor sprite per tile
//! - [`OBJECTS_LAYER`] – object layer, visible collidable props
//! - [`COLLISIONS_LAYER`] – object layer, invisible collidable regions
//! - [`ENTITIES_LAYER`] – object layer, named spawn points (`"Player"` and enemy spawns)

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const GROUND_LAYER: &str = "Ground";
pub const OBJECTS_LAYER: &str = "Objects";
pub const COLLISIONS_LAYER: &str = "Collisions";
pub const ENTITIES_LAYER: &str = "Entities";
pub const PLAYER_SPAWN: &str = "Player";

/// Single tile placement within a layer.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Tileposition {
    /// X coordinate in tiles.
    pub x: u32,
    /// Y coordinate in tiles.
    pub y: u32,
    /// Tile identifier (tileset-local, left-to-right then top-to-bottom).
    pub id: u32,
}

/// A named tile layer drawn from a single tileset texture.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Tilelayer {
    pub name: String,
    /// Texture key of the tileset.
    pub tileset: String,
    pub positions: Vec<Tileposition>,
}

/// A positioned rectangle in pixels.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MapObject {
    #[serde(default)]
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    /// Texture key, for objects that are drawn.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Objectlayer {
    pub name: String,
    pub objects: Vec<MapObject>,
}

/// Tilemap metadata and layers.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Tilemap {
    /// Size of a tile in pixels.
    pub tile_size: u32,
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    #[serde(default)]
    pub tile_layers: Vec<Tilelayer>,
    #[serde(default)]
    pub object_layers: Vec<Objectlayer>,
}

impl Tilemap {
    /// Parse a map from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse map JSON: {}", e))
    }

    /// Read and parse a map file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read map {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }

    pub fn tile_layer(&self, name: &str) -> Option<&Tilelayer> {
        self.tile_layers.iter().find(|layer| layer.name == name)
    }

    pub fn object_layer(&self, name: &str) -> Option<&Objectlayer> {
        self.object_layers.iter().find(|layer| layer.name == name)
    }
}
