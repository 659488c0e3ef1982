//! Enemy spawner resource.
//!
//! Holds the spawn points read from the map's entities layer and a polling
//! timer: every `interval_ms` of simulation time one enemy of a random kind
//! appears at a random spawn point. The random source is a seeded
//! [`fastrand::Rng`] so tests can reproduce a sequence.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

#[derive(Resource, Debug, Clone)]
pub struct EnemySpawner {
    pub spawn_points: Vec<Vector2>,
    pub interval_ms: u64,
    /// Tick of the last spawn (or of creation).
    pub last_spawn: u64,
    pub enabled: bool,
    pub rng: fastrand::Rng,
}

impl EnemySpawner {
    pub fn new(spawn_points: Vec<Vector2>, interval_ms: u64) -> Self {
        Self {
            spawn_points,
            interval_ms,
            last_spawn: 0,
            enabled: true,
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether a spawn is due at `now`. Marks the spawn as done when it is.
    pub fn poll(&mut self, now: u64) -> bool {
        if !self.enabled || self.spawn_points.is_empty() {
            return false;
        }
        if now.saturating_sub(self.last_spawn) >= self.interval_ms {
            self.last_spawn = now;
            true
        } else {
            false
        }
    }

    /// Pick a random spawn point, if any.
    pub fn pick_point(&mut self) -> Option<Vector2> {
        if self.spawn_points.is_empty() {
            return None;
        }
        let index = self.rng.usize(..self.spawn_points.len());
        Some(self.spawn_points[index])
    }

    /// Pick a random index below `len`, if `len > 0`.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.usize(..len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_respects_interval() {
        let mut spawner = EnemySpawner::new(vec![Vector2 { x: 0.0, y: 0.0 }], 300);
        assert!(!spawner.poll(299));
        assert!(spawner.poll(300));
        assert!(!spawner.poll(599));
        assert!(spawner.poll(600));
    }

    #[test]
    fn test_poll_disabled_or_without_points() {
        let mut disabled = EnemySpawner::new(vec![Vector2 { x: 0.0, y: 0.0 }], 0).with_enabled(false);
        assert!(!disabled.poll(1000));
        let mut empty = EnemySpawner::new(Vec::new(), 0);
        assert!(!empty.poll(1000));
        assert!(empty.pick_point().is_none());
    }

    #[test]
    fn test_pick_point_is_one_of_the_points() {
        let points = vec![Vector2 { x: 1.0, y: 2.0 }, Vector2 { x: 3.0, y: 4.0 }];
        let mut spawner = EnemySpawner::new(points.clone(), 300).with_seed(7);
        for _ in 0..10 {
            let p = spawner.pick_point().unwrap();
            assert!(points.contains(&p));
        }
        assert_eq!(spawner.pick_index(0), None);
    }
}
