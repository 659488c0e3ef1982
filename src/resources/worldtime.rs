//! Simulation clock resource.
//!
//! [`WorldTime`] carries the per-frame delta in seconds (used for motion) and
//! a monotonic millisecond tick count (used by every timer: fire cooldown,
//! bullet lifetime, enemy death). Systems never query a wall clock; they read
//! this resource, so tests can drive time explicitly.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since start.
    pub elapsed: f32,
    /// Scaled seconds of the current frame.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
    /// Scaled milliseconds since start.
    pub ticks: u64,
    /// Sub-millisecond remainder not yet folded into `ticks`.
    pub tick_carry: f64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
            ticks: 0,
            tick_carry: 0.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Clock positioned at `ticks` milliseconds with a given frame delta.
    pub fn at(ticks: u64, delta: f32) -> Self {
        WorldTime {
            elapsed: ticks as f32 / 1000.0,
            delta,
            ticks,
            ..Default::default()
        }
    }

    /// Advance by an unscaled frame delta in seconds.
    pub fn advance(&mut self, dt: f32) {
        let scaled_dt = (dt * self.time_scale).max(0.0);
        self.elapsed += scaled_dt;
        self.delta = scaled_dt;
        self.frame_count += 1;

        let ms = self.tick_carry + scaled_dt as f64 * 1000.0;
        let whole = ms.floor();
        self.ticks += whole as u64;
        self.tick_carry = ms - whole;
    }

    /// Milliseconds elapsed since `stamp`.
    pub fn since(&self, stamp: u64) -> u64 {
        self.ticks.saturating_sub(stamp)
    }
}
