//! Enemy component and its life cycle.
//!
//! ```text
//! Alive --EnemyHitEvent--> Dying { since } --(now - since >= death_duration)--> despawned
//! ```
//!
//! While alive an enemy chases the player and animates. While dying it is
//! drawn as a silhouette of its first frame and does nothing but wait for the
//! death timer. See [`crate::systems::enemy`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

pub const ENEMY_SPEED: f32 = 300.0;
pub const ENEMY_DEATH_DURATION_MS: u64 = 400;
/// How much the hitbox is shrunk from the sprite size on each axis.
pub const ENEMY_HITBOX_INSET: Vector2 = Vector2 { x: 20.0, y: 40.0 };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyState {
    Alive,
    Dying { since: u64 },
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct Enemy {
    pub speed: f32,
    /// Normalized direction toward the player, or zero.
    pub direction: Vector2,
    pub state: EnemyState,
    pub death_duration_ms: u64,
    /// Texture key shown while dying.
    pub silhouette_key: String,
}

impl Enemy {
    pub fn new(silhouette_key: impl Into<String>) -> Self {
        Self {
            speed: ENEMY_SPEED,
            direction: Vector2::zero(),
            state: EnemyState::Alive,
            death_duration_ms: ENEMY_DEATH_DURATION_MS,
            silhouette_key: silhouette_key.into(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state == EnemyState::Alive
    }

    /// Switch to [`EnemyState::Dying`]. Returns false if it was already dying.
    pub fn begin_dying(&mut self, now: u64) -> bool {
        if self.is_alive() {
            self.state = EnemyState::Dying { since: now };
            self.direction = Vector2::zero();
            true
        } else {
            false
        }
    }

    /// True once a dying enemy has been dying for its whole death duration.
    pub fn death_finished(&self, now: u64) -> bool {
        match self.state {
            EnemyState::Alive => false,
            EnemyState::Dying { since } => now.saturating_sub(since) >= self.death_duration_ms,
        }
    }
}
