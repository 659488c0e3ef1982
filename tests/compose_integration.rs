//! World composition, camera and full-frame integration tests.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use survivor::components::boxcollider::BoxCollider;
use survivor::components::bullet::Bullet;
use survivor::components::ground::Ground;
use survivor::components::gun::Gun;
use survivor::components::mapposition::MapPosition;
use survivor::components::obstacle::Obstacle;
use survivor::components::player::Player;
use survivor::components::sprite::Sprite;
use survivor::game::{
    ComposeError, compose_world, init_resources, register_observers, simulation_schedule,
};
use survivor::resources::animationstore::{AnimationResource, AnimationStore};
use survivor::resources::camera2d::Camera2DRes;
use survivor::resources::input::InputState;
use survivor::resources::screensize::ScreenSize;
use survivor::resources::spawner::EnemySpawner;
use survivor::resources::texturestore::TextureSizes;
use survivor::resources::tilemap::Tilemap;
use survivor::resources::worldtime::WorldTime;
use survivor::systems::render::draw_list;
use survivor::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;
const SCREEN: ScreenSize = ScreenSize { w: 800, h: 600 };

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn map_json(entities: &str) -> String {
    format!(
        r#"{{
        "tile_size": 64,
        "map_width": 10,
        "map_height": 10,
        "tile_layers": [
            {{ "name": "Ground", "tileset": "tiles", "positions": [
                {{ "x": 0, "y": 0, "id": 0 }},
                {{ "x": 1, "y": 0, "id": 3 }}
            ] }}
        ],
        "object_layers": [
            {{ "name": "Objects", "objects": [
                {{ "name": "rock", "x": 200, "y": 200, "image": "rock" }}
            ] }},
            {{ "name": "Collisions", "objects": [
                {{ "x": 0, "y": -64, "width": 640, "height": 64 }}
            ] }},
            {{ "name": "Entities", "objects": [ {} ] }}
        ]
    }}"#,
        entities
    )
}

fn default_map() -> Tilemap {
    Tilemap::from_json(&map_json(
        r#"{ "name": "Player", "x": 320, "y": 240 },
           { "name": "Enemy", "x": 600, "y": 600 },
           { "name": "Enemy", "x": -100, "y": 50 }"#,
    ))
    .unwrap()
}

fn sizes() -> TextureSizes {
    TextureSizes::new()
        .with("tiles", 128.0, 128.0)
        .with("rock", 64.0, 48.0)
        .with("player", 100.0, 140.0)
        .with("gun", 60.0, 30.0)
        .with("bullet", 10.0, 10.0)
        .with("bat/0", 64.0, 64.0)
}

fn make_world() -> World {
    let mut world = World::new();
    init_resources(&mut world, SCREEN);
    register_observers(&mut world);
    world
}

fn entity_count(world: &mut World) -> usize {
    world.query::<Entity>().iter(world).count()
}

#[test]
fn compose_spawns_the_scene() {
    let mut world = make_world();
    let composed = compose_world(&mut world, &default_map(), &sizes()).unwrap();

    assert_eq!(world.query_filtered::<Entity, With<Ground>>().iter(&world).count(), 2);
    assert_eq!(world.query_filtered::<Entity, With<Obstacle>>().iter(&world).count(), 2);
    assert_eq!(
        composed.enemy_spawns,
        vec![Vector2 { x: 600.0, y: 600.0 }, Vector2 { x: -100.0, y: 50.0 }]
    );

    let player_pos = world.get::<MapPosition>(composed.player).unwrap().pos;
    assert_eq!(player_pos, Vector2 { x: 320.0, y: 240.0 });
    assert!(world.get::<Player>(composed.player).is_some());
    let collider = world.get::<BoxCollider>(composed.player).unwrap();
    assert_eq!(collider.size, Vector2 { x: 40.0, y: 50.0 });

    let gun = world.get::<Gun>(composed.gun).unwrap();
    assert_eq!(gun.owner, composed.player);

    // Tile id 3 in a 2-wide tileset is column 1, row 1.
    let mut tiles = world.query_filtered::<(&MapPosition, &Sprite), With<Ground>>();
    let second = tiles
        .iter(&world)
        .find(|(pos, _)| pos.pos.x == 64.0)
        .map(|(_, sprite)| sprite.offset)
        .unwrap();
    assert_eq!(second, Vector2 { x: 64.0, y: 64.0 });
}

#[test]
fn compose_centers_camera_on_player() {
    let mut world = make_world();
    let composed = compose_world(&mut world, &default_map(), &sizes()).unwrap();

    let player_pos = world.get::<MapPosition>(composed.player).unwrap().pos;
    let offset = world.resource::<Camera2DRes>().offset();
    assert!(approx_eq(player_pos.x + offset.x, 400.0));
    assert!(approx_eq(player_pos.y + offset.y, 300.0));
}

#[test]
fn compose_without_player_fails_cleanly() {
    let mut world = make_world();
    let before = entity_count(&mut world);
    let map = Tilemap::from_json(&map_json(r#"{ "name": "Enemy", "x": 1, "y": 2 }"#)).unwrap();

    let err = compose_world(&mut world, &map, &sizes()).unwrap_err();

    assert_eq!(err, ComposeError::MissingPlayer);
    assert_eq!(entity_count(&mut world), before);
}

#[test]
fn compose_with_two_players_fails() {
    let mut world = make_world();
    let map = Tilemap::from_json(&map_json(
        r#"{ "name": "Player", "x": 1, "y": 2 }, { "name": "Player", "x": 3, "y": 4 }"#,
    ))
    .unwrap();

    let err = compose_world(&mut world, &map, &sizes()).unwrap_err();

    assert_eq!(err, ComposeError::MultiplePlayers(2));
}

#[test]
fn compose_reports_missing_layer_and_texture() {
    let mut world = make_world();
    let mut map = default_map();
    map.object_layers.retain(|layer| layer.name != "Collisions");
    assert_eq!(
        compose_world(&mut world, &map, &sizes()).unwrap_err(),
        ComposeError::MissingLayer("Collisions")
    );

    let before = entity_count(&mut world);
    let no_rock = TextureSizes::new()
        .with("tiles", 128.0, 128.0)
        .with("player", 100.0, 140.0)
        .with("gun", 60.0, 30.0)
        .with("bullet", 10.0, 10.0);
    assert_eq!(
        compose_world(&mut world, &default_map(), &no_rock).unwrap_err(),
        ComposeError::MissingTexture("rock".to_string())
    );
    assert_eq!(entity_count(&mut world), before);
}

#[test]
fn one_frame_of_the_full_schedule() {
    let mut world = make_world();
    let composed = compose_world(&mut world, &default_map(), &sizes()).unwrap();
    world.insert_resource(sizes());
    let mut store = AnimationStore::new();
    store.insert(
        "bat",
        AnimationResource::new(vec!["bat/0".to_string()], "bat_silhouette"),
    );
    world.insert_resource(store);
    world.insert_resource(EnemySpawner::new(composed.enemy_spawns.clone(), 300).with_seed(1));
    {
        let mut input = world.resource_mut::<InputState>();
        input.maindirection_right.active = true;
        input.pointer.position = Vector2 { x: 500.0, y: 300.0 };
        input.pointer.primary_down = true;
    }

    let mut update = simulation_schedule();
    update_world_time(&mut world, 0.1);
    update.run(&mut world);

    assert_eq!(world.resource::<WorldTime>().ticks, 100);

    let player_pos = world.get::<MapPosition>(composed.player).unwrap().pos;
    assert!(approx_eq(player_pos.x, 370.0));
    assert!(approx_eq(player_pos.y, 240.0));

    // The gun follows the player after this frame's aim update.
    let gun_pos = world.get::<MapPosition>(composed.gun).unwrap().pos;
    assert!(approx_eq(gun_pos.x, 450.0));
    assert!(approx_eq(gun_pos.y, 240.0));

    // The bullet left from last frame's pose (pointing down) and already moved.
    let mut bullets = world.query_filtered::<&MapPosition, With<Bullet>>();
    let bullet = bullets.single(&world).unwrap().pos;
    assert!(approx_eq(bullet.x, 320.0));
    assert!(approx_eq(bullet.y, 490.0));

    // Camera follows the moved player.
    let offset = world.resource::<Camera2DRes>().offset();
    assert!(approx_eq(player_pos.x + offset.x, 400.0));

    // Everything with a sprite is in the draw list, ground first.
    let items = draw_list(&mut world);
    assert!(items[0].ground && items[1].ground);
    assert!(items[2..].iter().all(|item| !item.ground));
}
