//! Dino Run data structures.
//!
//! The runner stays at a fixed column while obstacles scroll toward it.
//! All coordinates are in logical board units with y growing downward,
//! so "above ground" means `y < GROUND_Y`.

use crate::core::constants::*;

/// Sprite the renderer should use for the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Running,
    Jumping,
    Dead,
}

/// Obstacle variants, selected by the spawn roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Small,
    Medium,
    Large,
}

impl ObstacleKind {
    pub fn width(&self) -> i32 {
        match self {
            Self::Small => SMALL_OBSTACLE_WIDTH,
            Self::Medium => MEDIUM_OBSTACLE_WIDTH,
            Self::Large => LARGE_OBSTACLE_WIDTH,
        }
    }

    /// Map a uniform roll in `[0, 1)` to a variant.
    ///
    /// Rolls at or below 0.5 spawn nothing, leaving a gap in the course.
    pub fn from_roll(roll: f64) -> Option<Self> {
        if roll > LARGE_SPAWN_THRESHOLD {
            Some(Self::Large)
        } else if roll > MEDIUM_SPAWN_THRESHOLD {
            Some(Self::Medium)
        } else if roll > SMALL_SPAWN_THRESHOLD {
            Some(Self::Small)
        } else {
            None
        }
    }
}

/// Axis-aligned rectangle in board units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// A new obstacle at the right edge of the field, standing on the ground.
    pub fn spawn(kind: ObstacleKind) -> Self {
        Self::at(kind, OBSTACLE_SPAWN_X, OBSTACLE_Y)
    }

    pub fn at(kind: ObstacleKind, x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            width: kind.width(),
            height: OBSTACLE_HEIGHT,
            kind,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// True once the right edge has left the visible field.
    pub fn is_off_field(&self) -> bool {
        self.x + self.width <= 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runner {
    /// Fixed column of the runner's left edge.
    pub x: i32,
    /// Top edge. Equals `GROUND_Y` when standing on the ground.
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Vertical velocity in units/tick (negative = upward).
    pub velocity: i32,
    pub visual: VisualState,
}

impl Runner {
    pub fn grounded() -> Self {
        Self {
            x: RUNNER_X,
            y: GROUND_Y,
            width: RUNNER_WIDTH,
            height: RUNNER_HEIGHT,
            velocity: 0,
            visual: VisualState::Running,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Everything the renderer reads after a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    pub runner: Runner,
    /// Live obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,
    /// Ticks survived in the current run.
    pub score: u64,
    pub game_over: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    pub fn new() -> Self {
        Self {
            runner: Runner::grounded(),
            obstacles: Vec::new(),
            score: 0,
            game_over: false,
        }
    }

    /// Integrate one tick of vertical motion.
    pub fn apply_gravity(&mut self, gravity: i32) {
        self.runner.velocity += gravity;
        self.runner.y += self.runner.velocity;
    }

    pub fn is_grounded(&self) -> bool {
        self.runner.y == GROUND_Y
    }

    /// Snap the runner back onto the ground if it sank below it.
    /// Returns true if the runner landed.
    pub fn clamp_to_ground(&mut self) -> bool {
        if self.runner.y > GROUND_Y {
            self.runner.y = GROUND_Y;
            self.runner.velocity = 0;
            true
        } else {
            false
        }
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Drop the oldest obstacles until at most `cap` remain.
    /// Returns how many were evicted.
    pub fn evict_oldest(&mut self, cap: usize) -> usize {
        let excess = self.obstacles.len().saturating_sub(cap);
        self.obstacles.drain(..excess);
        excess
    }

    /// Remove obstacles that have scrolled past the left edge.
    pub fn remove_off_field(&mut self) {
        self.obstacles.retain(|o| !o.is_off_field());
    }

    /// Return to the start-of-run state in place.
    pub fn reset(&mut self) {
        self.runner = Runner::grounded();
        self.obstacles.clear();
        self.score = 0;
        self.game_over = false;
    }

    /// Text for the score overlay.
    pub fn overlay_text(&self) -> String {
        if self.game_over {
            format!("Game Over : {}", self.score)
        } else {
            self.score.to_string()
        }
    }
}
