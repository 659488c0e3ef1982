//! Game setup: asset loading, world composition and the simulation schedule.
//!
//! - [`load_assets`] fills the texture and animation stores from disk.
//! - [`compose_world`] validates a decoded [`Tilemap`] and spawns the scene.
//! - [`simulation_schedule`] chains the per-frame systems in their fixed order.

use std::fmt;
use std::path::Path;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::{debug, info, warn};
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::ground::Ground;
use crate::components::gun::{FireGate, Gun};
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::player::{PLAYER_HITBOX_INSET, Player};
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::events::enemy::enemy_hit_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::{
    BULLET_TEXTURE, GUN_TEXTURE, PLAYER_TEXTURE, TextureSizes, TextureStore,
};
use crate::resources::tilemap::{
    COLLISIONS_LAYER, ENTITIES_LAYER, GROUND_LAYER, OBJECTS_LAYER, PLAYER_SPAWN, Tilemap, Tileposition,
};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::camera::camera_follow;
use crate::systems::collision::bullet_enemy_contact;
use crate::systems::enemy::{enemy_chase, enemy_death_timer};
use crate::systems::gun::{fire_gate_system, gun_aim, gun_fire};
use crate::systems::lifetime::lifetime_system;
use crate::systems::player::player_movement;
use crate::systems::projectile::bullet_movement;
use crate::systems::spawner::enemy_spawner;

/// Directory holding every image, keyed by file stem.
pub const IMAGES_DIR: &str = "./assets/images";
/// Sub-directory of [`IMAGES_DIR`] with one folder of frames per enemy kind.
pub const ENEMIES_DIR: &str = "enemies";

/// Reasons a map cannot be turned into a playable world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    MissingLayer(&'static str),
    MissingPlayer,
    MultiplePlayers(usize),
    MissingTexture(String),
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::MissingLayer(name) => write!(f, "map has no '{}' layer", name),
            ComposeError::MissingPlayer => {
                write!(f, "map has no '{}' entity", PLAYER_SPAWN)
            }
            ComposeError::MultiplePlayers(n) => {
                write!(f, "map has {} '{}' entities, expected one", n, PLAYER_SPAWN)
            }
            ComposeError::MissingTexture(key) => write!(f, "texture '{}' is not loaded", key),
        }
    }
}

impl std::error::Error for ComposeError {}

/// Handles to the entities a composed world is built around.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedWorld {
    pub player: Entity,
    pub gun: Entity,
    /// Every non-player position of the entities layer.
    pub enemy_spawns: Vec<Vector2>,
}

fn texture_size(sizes: &TextureSizes, key: &str) -> Result<Vector2, ComposeError> {
    sizes
        .get(key)
        .ok_or_else(|| ComposeError::MissingTexture(key.to_string()))
}

/// Insert the resources every simulation system reads, keeping any already present.
pub fn init_resources(world: &mut World, screen: ScreenSize) {
    world.init_resource::<WorldTime>();
    world.init_resource::<InputState>();
    world.init_resource::<TextureSizes>();
    world.init_resource::<AnimationStore>();
    world.insert_resource(screen);
    if !world.contains_resource::<Camera2DRes>() {
        world.insert_resource(Camera2DRes::centered_on(Vector2::zero(), screen));
    }
}

/// Register the global observers. Must run before the first schedule run.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(enemy_hit_observer));
    world.flush();
}

/// Spawn one floor sprite per ground tile. Tiles are placed by their top-left corner.
fn spawn_ground(
    world: &mut World,
    tileset: &str,
    tileset_width: f32,
    tile_size: f32,
    layer: &[Tileposition],
) -> usize {
    // how many tiles per row in the texture
    let tiles_per_row = ((tileset_width / tile_size).floor() as u32).max(1);

    for pos in layer.iter() {
        let col = pos.id % tiles_per_row;
        let row = pos.id / tiles_per_row;

        let mut sprite = Sprite::top_left(tileset, tile_size, tile_size);
        sprite.offset = Vector2 {
            x: col as f32 * tile_size,
            y: row as f32 * tile_size,
        };
        world.spawn((
            Ground,
            MapPosition::new(pos.x as f32 * tile_size, pos.y as f32 * tile_size),
            sprite,
        ));
    }
    layer.len()
}

/// Build the scene described by `map`.
///
/// The map is fully validated before the first entity is spawned, so on error
/// the world is left untouched. Textures are only needed through their sizes.
pub fn compose_world(
    world: &mut World,
    map: &Tilemap,
    sizes: &TextureSizes,
) -> Result<ComposedWorld, ComposeError> {
    let ground = map
        .tile_layer(GROUND_LAYER)
        .ok_or(ComposeError::MissingLayer(GROUND_LAYER))?;
    let objects = map
        .object_layer(OBJECTS_LAYER)
        .ok_or(ComposeError::MissingLayer(OBJECTS_LAYER))?;
    let collisions = map
        .object_layer(COLLISIONS_LAYER)
        .ok_or(ComposeError::MissingLayer(COLLISIONS_LAYER))?;
    let entities = map
        .object_layer(ENTITIES_LAYER)
        .ok_or(ComposeError::MissingLayer(ENTITIES_LAYER))?;

    let players: Vec<Vector2> = entities
        .objects
        .iter()
        .filter(|obj| obj.name == PLAYER_SPAWN)
        .map(|obj| Vector2::new(obj.x, obj.y))
        .collect();
    let player_pos = match players.len() {
        0 => return Err(ComposeError::MissingPlayer),
        1 => players[0],
        n => return Err(ComposeError::MultiplePlayers(n)),
    };

    let tileset_size = if ground.positions.is_empty() {
        Vector2::zero()
    } else {
        texture_size(sizes, &ground.tileset)?
    };
    let mut object_sizes = Vec::with_capacity(objects.objects.len());
    for obj in objects.objects.iter() {
        let size = match &obj.image {
            Some(key) => texture_size(sizes, key)?,
            None => Vector2::new(obj.width, obj.height),
        };
        object_sizes.push(size);
    }
    let player_size = texture_size(sizes, PLAYER_TEXTURE)?;
    let gun_size = texture_size(sizes, GUN_TEXTURE)?;
    texture_size(sizes, BULLET_TEXTURE)?;

    // --- validated, spawn everything ---
    let tiles = spawn_ground(
        world,
        &ground.tileset,
        tileset_size.x,
        map.tile_size as f32,
        &ground.positions,
    );

    for (obj, size) in objects.objects.iter().zip(object_sizes) {
        let mut entity = world.spawn((
            Obstacle,
            MapPosition::new(obj.x, obj.y),
            BoxCollider::new(size.x, size.y),
        ));
        if let Some(key) = &obj.image {
            entity.insert(Sprite::top_left(key.as_str(), size.x, size.y));
        }
    }

    for obj in collisions.objects.iter() {
        world.spawn((
            Obstacle,
            MapPosition::new(obj.x, obj.y),
            BoxCollider::new(obj.width, obj.height),
        ));
    }

    let player = world
        .spawn((
            Player::default(),
            MapPosition::from_vec(player_pos),
            Sprite::centered(PLAYER_TEXTURE, player_size.x, player_size.y),
            BoxCollider::inset(player_size.x, player_size.y, PLAYER_HITBOX_INSET),
        ))
        .id();

    let gun_component = Gun::new(player);
    let gun = world
        .spawn((
            gun_component,
            FireGate::default(),
            MapPosition::from_vec(gun_component.center_for(player_pos)),
            Rotation::default(),
            Sprite::centered(GUN_TEXTURE, gun_size.x, gun_size.y),
        ))
        .id();

    let enemy_spawns: Vec<Vector2> = entities
        .objects
        .iter()
        .filter(|obj| obj.name != PLAYER_SPAWN)
        .map(|obj| Vector2::new(obj.x, obj.y))
        .collect();

    if let Some(screen) = world.get_resource::<ScreenSize>().copied() {
        world.insert_resource(Camera2DRes::centered_on(player_pos, screen));
    }

    info!(
        "World composed: {} ground tiles, {} objects, {} collision regions, {} enemy spawn points",
        tiles,
        objects.objects.len(),
        collisions.objects.len(),
        enemy_spawns.len()
    );

    Ok(ComposedWorld {
        player,
        gun,
        enemy_spawns,
    })
}

/// The per-frame simulation, in order. Runs single-threaded; commands are
/// applied between chained systems, so a bullet fired this frame also moves
/// this frame.
pub fn simulation_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.set_executor_kind(ExecutorKind::SingleThreaded);
    update.add_systems(
        (
            fire_gate_system,
            gun_fire,
            player_movement,
            gun_aim,
            bullet_movement,
            enemy_spawner,
            enemy_chase,
            bullet_enemy_contact,
            animation,
            enemy_death_timer,
            lifetime_system,
            camera_follow,
        )
            .chain(),
    );
    update
}

fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, String> {
    let path_str = path.to_string_lossy();
    rl.load_texture(thread, &path_str)
        .map_err(|e| format!("Failed to load texture '{}': {}", path.display(), e))
}

/// White mask of an image, shown while an enemy dies.
fn load_silhouette(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, String> {
    let path_str = path.to_string_lossy();
    let mut image = Image::load_image(&path_str)
        .map_err(|e| format!("Failed to load image '{}': {}", path.display(), e))?;
    image.color_brightness(255);
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| format!("Failed to build silhouette of '{}': {}", path.display(), e))
}

fn png_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory '{}': {}", dir.display(), e))?;
    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
        .collect();
    // Numbered frames: "0.png", "1.png", ..., "10.png".
    files.sort_by_key(|path| {
        let stem = path.file_stem().map(|s| s.to_string_lossy().to_string());
        let number = stem.as_deref().and_then(|s| s.parse::<u32>().ok());
        (number, stem)
    });
    Ok(files)
}

/// Load every texture the map and the game need.
///
/// Single images live in [`IMAGES_DIR`] as `<key>.png`. Each sub-folder of
/// `IMAGES_DIR/enemies` is an enemy kind holding its animation frames; frame
/// keys are `<kind>/<file stem>` and the silhouette key is `<kind>_silhouette`.
pub fn load_assets(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    map: &Tilemap,
    textures: &mut TextureStore,
    sizes: &mut TextureSizes,
    animations: &mut AnimationStore,
) -> Result<(), String> {
    let images = Path::new(IMAGES_DIR);

    let mut keys: Vec<String> = vec![
        PLAYER_TEXTURE.to_string(),
        GUN_TEXTURE.to_string(),
        BULLET_TEXTURE.to_string(),
    ];
    for layer in map.tile_layers.iter() {
        keys.push(layer.tileset.clone());
    }
    for layer in map.object_layers.iter() {
        keys.extend(layer.objects.iter().filter_map(|obj| obj.image.clone()));
    }
    keys.sort();
    keys.dedup();

    for key in keys {
        let texture = load_texture(rl, thread, &images.join(format!("{}.png", key)))?;
        textures.insert(key, texture, sizes);
    }

    let enemies_dir = images.join(ENEMIES_DIR);
    if !enemies_dir.is_dir() {
        warn!("No enemy folder at '{}', enemies disabled", enemies_dir.display());
        return Ok(());
    }
    let mut kinds: Vec<_> = std::fs::read_dir(&enemies_dir)
        .map_err(|e| format!("Failed to read '{}': {}", enemies_dir.display(), e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    kinds.sort();

    for dir in kinds {
        let Some(kind) = dir.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        let files = png_files(&dir)?;
        let Some(first) = files.first() else {
            warn!("Enemy kind '{}' has no frames, skipped", kind);
            continue;
        };

        let silhouette_key = format!("{}_silhouette", kind);
        let silhouette = load_silhouette(rl, thread, first)?;
        textures.insert(silhouette_key.clone(), silhouette, sizes);

        let mut frames = Vec::with_capacity(files.len());
        for file in files.iter() {
            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            let key = format!("{}/{}", kind, stem);
            textures.insert(key.clone(), load_texture(rl, thread, file)?, sizes);
            frames.push(key);
        }
        debug!("Enemy kind '{}': {} frames", kind, frames.len());
        animations.insert(kind, AnimationResource::new(frames, silhouette_key));
    }

    info!(
        "Loaded {} textures, {} enemy kinds",
        textures.len(),
        animations.animations.len()
    );
    Ok(())
}
