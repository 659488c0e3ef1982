//! Fixed-lifetime component for automatic entity despawning.
//!
//! The [`Lifetime`] component stores the simulation tick (milliseconds) at
//! which the entity was spawned and how long it may live. There is no
//! countdown to maintain: the [`lifetime_system`] compares the stored
//! timestamp against [`WorldTime::ticks`] every frame and despawns the entity
//! once its age reaches the duration.
//!
//! # Related
//!
//! - [`crate::systems::lifetime::lifetime_system`] – system that despawns expired entities
//!
//! [`lifetime_system`]: crate::systems::lifetime::lifetime_system
//! [`WorldTime::ticks`]: crate::resources::worldtime::WorldTime::ticks

use bevy_ecs::prelude::Component;

/// Lifetime of a bullet, in milliseconds.
pub const BULLET_LIFETIME_MS: u64 = 1000;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lifetime {
    /// Tick at which the entity was spawned.
    pub spawned_at: u64,
    /// Maximum age in milliseconds.
    pub duration_ms: u64,
}

impl Lifetime {
    /// Create a new Lifetime starting at `spawned_at`.
    ///
    /// # Arguments
    ///
    /// * `spawned_at` - Current simulation tick in milliseconds
    /// * `duration_ms` - Age at which the entity is removed
    pub fn new(spawned_at: u64, duration_ms: u64) -> Self {
        Self {
            spawned_at,
            duration_ms,
        }
    }

    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.spawned_at)
    }

    pub fn expired(&self, now: u64) -> bool {
        self.age(now) >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_exactly_at_duration() {
        let lifetime = Lifetime::new(0, BULLET_LIFETIME_MS);
        assert!(!lifetime.expired(999));
        assert!(lifetime.expired(1000));
    }

    #[test]
    fn test_age_before_spawn_is_zero() {
        let lifetime = Lifetime::new(500, 100);
        assert_eq!(lifetime.age(100), 0);
        assert!(!lifetime.expired(100));
    }
}
