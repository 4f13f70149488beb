//! Run parameters cached by the game loop.
//!
//! The shipped game always runs on [`Tuning::default`], which mirrors
//! the fixed constants. Tests build their own values to exercise edge cases.

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Velocity change per tick (positive = downward).
    pub gravity: i32,
    /// Velocity set by a jump (negative = upward).
    pub jump_impulse: i32,
    /// Horizontal displacement applied to every obstacle per tick.
    pub scroll_velocity: i32,
    /// Live obstacle cap; the oldest is evicted past this.
    pub max_obstacles: usize,
    pub tick_interval_ms: u64,
    pub spawn_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            scroll_velocity: SCROLL_VELOCITY,
            max_obstacles: MAX_OBSTACLES,
            tick_interval_ms: TICK_INTERVAL_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Panics on values the simulation cannot run with.
    pub fn validate(&self) {
        assert!(self.gravity > 0, "gravity must pull downward");
        assert!(self.scroll_velocity < 0, "obstacles must scroll left");
        assert!(self.max_obstacles > 0, "obstacle cap must be positive");
        assert!(
            self.tick_interval_ms > 0 && self.spawn_interval_ms > 0,
            "timer intervals must be positive"
        );
    }
}
