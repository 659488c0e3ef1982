//! Gun systems.
//!
//! - [`gun_aim`] points every gun from the screen center toward the mouse
//!   pointer and places it around its owner.
//! - [`fire_gate_system`] reopens fire gates whose cooldown has elapsed.
//! - [`gun_fire`] spawns a bullet at the muzzle while the fire button is held
//!   and the gate is open.
//!
//! The player is always drawn at the screen center, so the on-screen vector
//! from the center to the pointer is also the world-space aim.

use bevy_ecs::prelude::*;
use log::trace;
use raylib::prelude::Vector2;

use crate::components::bullet::Bullet;
use crate::components::gun::{FireGate, Gun, GunPose};
use crate::components::lifetime::{BULLET_LIFETIME_MS, Lifetime};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::geometry::normalize_or_zero;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::{BULLET_TEXTURE, TextureSizes};
use crate::resources::worldtime::WorldTime;

pub fn gun_aim(
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    owners: Query<&MapPosition, (With<Player>, Without<Gun>)>,
    mut guns: Query<(&mut Gun, &mut MapPosition, &mut Rotation, &mut Sprite)>,
) {
    let aim = normalize_or_zero(input.pointer.position - screen.center());

    for (mut gun, mut position, mut rotation, mut sprite) in guns.iter_mut() {
        // Owner gone: leave the gun where it is.
        let Ok(owner) = owners.get(gun.owner) else {
            continue;
        };
        gun.aim = aim;
        let pose = GunPose::from_aim(aim);
        rotation.degrees = pose.rotation;
        sprite.flip_v = pose.flip_v;
        position.pos = gun.center_for(owner.pos);
    }
}

pub fn fire_gate_system(time: Res<WorldTime>, mut gates: Query<&mut FireGate>) {
    for mut gate in gates.iter_mut() {
        gate.refresh(time.ticks);
    }
}

pub fn gun_fire(
    mut commands: Commands,
    input: Res<InputState>,
    time: Res<WorldTime>,
    sizes: Option<Res<TextureSizes>>,
    mut guns: Query<(&Gun, &MapPosition, &mut FireGate)>,
) {
    if !input.fire_held() {
        return;
    }
    let size = sizes
        .and_then(|sizes| sizes.get(BULLET_TEXTURE))
        .unwrap_or(Vector2::zero());

    for (gun, position, mut gate) in guns.iter_mut() {
        // A zero aim has no direction to shoot in.
        if gun.aim == Vector2::zero() {
            continue;
        }
        if !gate.try_fire(time.ticks) {
            continue;
        }
        let muzzle = gun.muzzle(position.pos);
        trace!("Bullet fired at ({}, {})", muzzle.x, muzzle.y);
        commands.spawn((
            Bullet::new(gun.aim, gun.bullet_speed),
            Lifetime::new(time.ticks, BULLET_LIFETIME_MS),
            MapPosition::from_vec(muzzle),
            Sprite::centered(BULLET_TEXTURE, size.x, size.y),
        ));
    }
}
