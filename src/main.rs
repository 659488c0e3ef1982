//! Survivor main entry point.
//!
//! A top-down arena shooter built on:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the entity-component-system simulation
//!
//! # Main Loop
//!
//! 1. Read `config.ini` and the command line, load the map
//! 2. Open the window and load every texture and enemy animation
//! 3. Compose the world from the map (player, gun, ground, obstacles)
//! 4. Each frame: advance time, poll input, run the simulation schedule,
//!    then draw the depth-sorted scene around the player
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --map ./assets/maps/world.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;

use survivor::game::{compose_world, init_resources, load_assets, register_observers, simulation_schedule};
use survivor::resources::animationstore::AnimationStore;
use survivor::resources::gameconfig::GameConfig;
use survivor::resources::input::InputState;
use survivor::resources::screensize::ScreenSize;
use survivor::resources::spawner::EnemySpawner;
use survivor::resources::texturestore::{TextureSizes, TextureStore};
use survivor::resources::tilemap::Tilemap;
use survivor::resources::worldtime::WorldTime;
use survivor::systems::input::update_input_state;
use survivor::systems::render::render_pass;
use survivor::systems::time::update_world_time;

/// Survivor: top-down arena shooter.
#[derive(Parser)]
#[command(version, about = "Top-down arena shooter on raylib and bevy_ecs.")]
struct Cli {
    /// Path of the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Map to play, overriding the configured one.
    #[arg(long, value_name = "PATH")]
    map: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::info!("{}; using defaults", e);
    }
    if let Some(map) = cli.map {
        config.map_path = map;
    }

    let map = match Tilemap::load_from_file(&config.map_path) {
        Ok(map) => map,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Survivor")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is read as the back action, not raylib's exit key.
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    let mut sizes = TextureSizes::new();
    let mut animations = AnimationStore::new();
    if let Err(e) = load_assets(
        &mut rl,
        &thread,
        &map,
        &mut textures,
        &mut sizes,
        &mut animations,
    ) {
        log::error!("{}", e);
        std::process::exit(1);
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    init_resources(
        &mut world,
        ScreenSize {
            w: rl.get_screen_width(),
            h: rl.get_screen_height(),
        },
    );
    register_observers(&mut world);

    let composed = match compose_world(&mut world, &map, &sizes) {
        Ok(composed) => composed,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    world.insert_resource(
        EnemySpawner::new(composed.enemy_spawns, config.spawn_interval_ms)
            .with_enabled(config.spawn_enabled),
    );
    world.insert_resource(sizes);
    world.insert_resource(animations);
    world.insert_non_send_resource(textures);
    world.insert_resource(config);

    let mut update = simulation_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world.resource::<InputState>().quit_requested {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);
        update_input_state(&mut world, &rl);

        update.run(&mut world);

        world.clear_trackers();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        render_pass(&mut world, &mut d);
    }
    log::info!("Bye");
}
