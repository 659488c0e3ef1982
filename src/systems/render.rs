use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::ground::Ground;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// One sprite ready to be blitted, in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub entity: Entity,
    pub sprite: Sprite,
    /// Top-left corner of the sprite on screen.
    pub top_left: Vector2,
    /// Counter-clockwise rotation in degrees.
    pub rotation: f32,
    pub ground: bool,
    /// Bottom edge in world space, used for depth ordering.
    pub bottom: f32,
}

impl DrawItem {
    /// Pivot on screen, the point the sprite rotates around.
    pub fn pivot(&self) -> Vector2 {
        self.top_left + self.sprite.origin
    }
}

/// Every drawable entity in painter's order: ground first, then everything
/// else by ascending bottom edge. Ties keep query order.
pub fn draw_list(world: &mut World) -> Vec<DrawItem> {
    let offset = world
        .get_resource::<Camera2DRes>()
        .map(|camera| camera.offset())
        .unwrap_or(Vector2::zero());

    let mut q = world.query::<(Entity, &Sprite, &MapPosition, Option<&Rotation>, Has<Ground>)>();
    let mut items: Vec<DrawItem> = q
        .iter(world)
        .map(|(entity, sprite, position, rotation, ground)| DrawItem {
            entity,
            sprite: sprite.clone(),
            top_left: sprite.top_left_at(position.pos) + offset,
            rotation: rotation.map(|r| r.degrees).unwrap_or(0.0),
            ground,
            bottom: sprite.bottom_at(position.pos),
        })
        .collect();

    items.sort_by(|a, b| {
        b.ground
            .cmp(&a.ground)
            .then(a.bottom.total_cmp(&b.bottom))
    });
    items
}

/// Rotation to hand to raylib for a counter-clockwise rotation followed by
/// an optional vertical flip.
///
/// raylib rotates clockwise on screen and flips in texture space (before the
/// rotation). A flip after a rotation by `a` equals a flip before a rotation
/// by `-a`, so the sign only stays when the sprite is flipped.
pub fn raylib_rotation(degrees: f32, flip_v: bool) -> f32 {
    if flip_v { degrees } else { -degrees }
}

fn on_screen(item: &DrawItem, screen: ScreenSize) -> bool {
    let max_x = item.top_left.x + item.sprite.width;
    let max_y = item.top_left.y + item.sprite.height;
    // Rotated sprites may poke out of their unrotated box; keep a margin.
    let margin = if item.rotation != 0.0 {
        item.sprite.width.max(item.sprite.height)
    } else {
        0.0
    };
    !(max_x < -margin
        || item.top_left.x > screen.w as f32 + margin
        || max_y < -margin
        || item.top_left.y > screen.h as f32 + margin)
}

/// Blit the frame in screen space, culling sprites that are off screen.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = *world.resource::<ScreenSize>();
    let items = draw_list(world);

    if let Some(textures) = world.get_non_send_resource::<TextureStore>() {
        for item in items.iter().filter(|item| on_screen(item, screen)) {
            let sprite = &item.sprite;
            let Some(tex) = textures.get(&sprite.tex_key) else {
                continue;
            };
            // Source rect selects a tile from a tileset; negative sizes mirror.
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: if sprite.flip_h { -sprite.width } else { sprite.width },
                height: if sprite.flip_v { -sprite.height } else { sprite.height },
            };
            // dest x/y is where the origin lands on screen.
            let pivot = item.pivot();
            let dest = Rectangle {
                x: pivot.x,
                y: pivot.y,
                width: sprite.width,
                height: sprite.height,
            };
            d.draw_texture_pro(
                tex,
                src,
                dest,
                sprite.origin,
                raylib_rotation(item.rotation, sprite.flip_v),
                Color::WHITE,
            );
        }
    }

    if world.contains_resource::<DebugMode>() {
        let offset = world.resource::<Camera2DRes>().offset();
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            let rect = collider.rect(position.pos);
            d.draw_rectangle_lines(
                (rect.x + offset.x) as i32,
                (rect.y + offset.y) as i32,
                rect.width as i32,
                rect.height as i32,
                Color::RED,
            );
        }
        render_debug_ui(world, d, items.len());
    }
}

fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle, drawn: usize) {
    let screen = *world.resource::<ScreenSize>();

    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", d.get_fps());
    d.draw_text(&text, 10, 10, 10, Color::WHITE);

    let entity_count = world.query::<Entity>().iter(world).count();
    let text = format!("Entities: {} | Sprites: {}", entity_count, drawn);
    d.draw_text(&text, 10, 30, 10, Color::WHITE);

    if let Some(time) = world.get_resource::<WorldTime>() {
        let text = format!("Ticks: {}ms | Frame: {}", time.ticks, time.frame_count);
        d.draw_text(&text, 10, 50, 10, Color::WHITE);
    }

    let cam = world.resource::<Camera2DRes>().0;
    let cam_text = format!("Camera target: ({:.1}, {:.1})", cam.target.x, cam.target.y);
    d.draw_text(&cam_text, 10, screen.h - 30, 10, Color::WHITE);
}
