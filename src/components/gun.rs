//! Gun and fire-gate components.
//!
//! A [`Gun`] orbits its owner at a fixed distance, pointing toward the mouse
//! pointer. Its sprite orientation is described by [`GunPose`], which keeps
//! the sprite right-side-up: when aiming to the left the image is rotated by
//! the absolute angle and then flipped vertically.
//!
//! Firing is gated by a [`FireGate`]:
//!
//! ```text
//! Ready --fire--> Cooling { since } --(now - since >= cooldown)--> Ready
//! ```

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector2;

/// Distance between the owner's center and the gun's center.
pub const GUN_DISTANCE: f32 = 80.0;
/// Distance between the gun's center and the bullet spawn point.
pub const MUZZLE_OFFSET: f32 = 50.0;
/// Bullet speed in world units per second.
pub const BULLET_SPEED: f32 = 1200.0;
/// Minimum time between two shots.
pub const FIRE_COOLDOWN_MS: u64 = 200;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Gun {
    /// Player entity the gun is attached to. Read-only reference.
    pub owner: Entity,
    pub distance: f32,
    /// Normalized direction from screen center to pointer, or zero.
    pub aim: Vector2,
    pub muzzle_offset: f32,
    pub bullet_speed: f32,
}

impl Gun {
    pub fn new(owner: Entity) -> Self {
        Self {
            owner,
            distance: GUN_DISTANCE,
            // Points down until the first aim update.
            aim: Vector2::new(0.0, 1.0),
            muzzle_offset: MUZZLE_OFFSET,
            bullet_speed: BULLET_SPEED,
        }
    }

    /// Gun center for an owner centered at `owner_center`.
    pub fn center_for(&self, owner_center: Vector2) -> Vector2 {
        owner_center + self.aim * self.distance
    }

    /// Bullet spawn point for a gun centered at `gun_center`.
    pub fn muzzle(&self, gun_center: Vector2) -> Vector2 {
        gun_center + self.aim * self.muzzle_offset
    }
}

/// Sprite orientation derived from an aim direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GunPose {
    /// Counter-clockwise rotation in degrees, applied first.
    pub rotation: f32,
    /// Vertical flip, applied after the rotation.
    pub flip_v: bool,
}

impl GunPose {
    pub fn from_aim(aim: Vector2) -> Self {
        let angle = aim.x.atan2(aim.y).to_degrees() - 90.0;
        if aim.x > 0.0 {
            Self {
                rotation: angle,
                flip_v: false,
            }
        } else {
            Self {
                rotation: angle.abs(),
                flip_v: true,
            }
        }
    }

    /// Map a sprite-local offset (relative to the sprite center, y down) to its
    /// on-screen offset after rotation and flip.
    pub fn transform_point(&self, p: Vector2) -> Vector2 {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let x = p.x * cos + p.y * sin;
        let y = -p.x * sin + p.y * cos;
        if self.flip_v {
            Vector2::new(x, -y)
        } else {
            Vector2::new(x, y)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireGateState {
    Ready,
    Cooling { since: u64 },
}

/// Cooldown gate for a repeatable action, driven by simulation ticks (ms).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FireGate {
    pub state: FireGateState,
    pub cooldown_ms: u64,
}

impl Default for FireGate {
    fn default() -> Self {
        Self::new(FIRE_COOLDOWN_MS)
    }
}

impl FireGate {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            state: FireGateState::Ready,
            cooldown_ms,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state == FireGateState::Ready
    }

    /// Reopen the gate once the cooldown has elapsed.
    pub fn refresh(&mut self, now: u64) {
        if let FireGateState::Cooling { since } = self.state {
            if now.saturating_sub(since) >= self.cooldown_ms {
                self.state = FireGateState::Ready;
            }
        }
    }

    /// Close the gate if it is open. Returns whether the action may happen.
    pub fn try_fire(&mut self, now: u64) -> bool {
        if self.is_ready() {
            self.state = FireGateState::Cooling { since: now };
            true
        } else {
            false
        }
    }
}
