//! Dino Run game loop: physics, collision detection, obstacle spawning.

use super::timer::Cadence;
use super::types::*;
use crate::core::constants::MAX_FRAME_DT_MS;
use crate::core::Tuning;
use rand::Rng;

/// What a single call to [`GameLoop::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The runner survived and the score went up.
    Advanced,
    /// An obstacle hit the runner this tick. The loop is now halted.
    Crashed,
    /// The run was already over; nothing moved.
    Idle,
}

/// Owns the simulation and the two timers that drive it.
///
/// The 60 Hz tick timer runs physics and collisions; the spawn timer adds
/// obstacles on its own slower cadence. Both stop together when the runner
/// crashes and restart together on reset.
#[derive(Debug, Clone)]
pub struct GameLoop {
    pub state: SimulationState,
    pub tuning: Tuning,
    pub tick_timer: Cadence,
    pub spawn_timer: Cadence,
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameLoop {
    pub fn new(tuning: Tuning) -> Self {
        tuning.validate();
        Self {
            state: SimulationState::new(),
            tuning,
            tick_timer: Cadence::new(tuning.tick_interval_ms),
            spawn_timer: Cadence::new(tuning.spawn_interval_ms),
        }
    }

    /// Read-only view for the renderer.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_halted(&self) -> bool {
        !self.tick_timer.is_running() && !self.spawn_timer.is_running()
    }

    pub fn halt(&mut self) {
        self.tick_timer.stop();
        self.spawn_timer.stop();
    }

    pub fn resume(&mut self) {
        self.tick_timer.start();
        self.spawn_timer.start();
    }

    /// One fixed-rate simulation step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.game_over {
            return TickOutcome::Idle;
        }

        let state = &mut self.state;

        // 1-2. Vertical motion; landing is the only way a jump ends
        state.apply_gravity(self.tuning.gravity);
        if state.clamp_to_ground() {
            state.runner.visual = VisualState::Running;
        }

        // 3. Scroll every obstacle, even past the one that hits
        let runner = state.runner.bounds();
        let mut crashed = false;
        for obstacle in &mut state.obstacles {
            obstacle.x += self.tuning.scroll_velocity;
            if !crashed && is_collision(&runner, &obstacle.bounds()) {
                crashed = true;
            }
        }
        state.remove_off_field();

        // 4-5. A crash freezes the score; otherwise one point per tick
        if crashed {
            state.game_over = true;
            state.runner.visual = VisualState::Dead;
            log::info!("Runner crashed, final score {}", state.score);
            self.halt();
            return TickOutcome::Crashed;
        }

        state.score += 1;
        TickOutcome::Advanced
    }

    /// Roll for a new obstacle. Called on the spawn cadence.
    pub fn spawn_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ObstacleKind> {
        if self.state.game_over {
            return None;
        }
        let roll: f64 = rng.gen();
        self.spawn_from_roll(roll)
    }

    /// Spawn whatever `roll` selects, then enforce the obstacle cap.
    pub fn spawn_from_roll(&mut self, roll: f64) -> Option<ObstacleKind> {
        if self.state.game_over {
            return None;
        }

        let kind = ObstacleKind::from_roll(roll);
        match kind {
            Some(kind) => {
                log::debug!("Spawning {:?} obstacle (roll {:.3})", kind, roll);
                self.state.add_obstacle(Obstacle::spawn(kind));
            }
            None => log::debug!("Spawn skipped (roll {:.3})", roll),
        }

        let evicted = self.state.evict_oldest(self.tuning.max_obstacles);
        if evicted > 0 {
            log::trace!("Evicted {} oldest obstacle(s)", evicted);
        }

        kind
    }

    /// Advance wall-clock time by `dt_ms`, firing due timers in deadline order.
    ///
    /// The delta is clamped to `MAX_FRAME_DT_MS` so a stalled frame does not
    /// replay a burst of ticks. On equal deadlines the tick fires first.
    /// Returns true if any timer fired.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        let mut budget = dt_ms.min(MAX_FRAME_DT_MS);
        let mut changed = false;

        loop {
            let next_due = [self.tick_timer.until_due(), self.spawn_timer.until_due()]
                .into_iter()
                .flatten()
                .min();

            let Some(step) = next_due.filter(|&step| step <= budget) else {
                self.tick_timer.elapse(budget);
                self.spawn_timer.elapse(budget);
                break;
            };

            budget -= step;
            self.tick_timer.elapse(step);
            self.spawn_timer.elapse(step);

            if self.tick_timer.fire_if_due() {
                self.tick();
                changed = true;
            }
            if self.spawn_timer.fire_if_due() {
                self.spawn_tick(rng);
                changed = true;
            }
        }

        changed
    }
}

/// Axis-aligned bounding-box overlap. Touching edges do not count.
pub fn is_collision(a: &Bounds, b: &Bounds) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::*;
    use rand::rngs::mock::StepRng;

    fn bounds(x: i32, y: i32, width: i32, height: i32) -> Bounds {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    // ── Collision tests ──

    #[test]
    fn test_collision_full_overlap() {
        let runner = bounds(50, GROUND_Y, 88, 94);
        assert!(is_collision(&runner, &bounds(60, OBSTACLE_Y, 34, 70)));
    }

    #[test]
    fn test_collision_touching_edges_do_not_count() {
        let runner = bounds(50, GROUND_Y, 88, 94);
        // Obstacle starting exactly at the runner's right edge
        assert!(!is_collision(&runner, &bounds(138, OBSTACLE_Y, 34, 70)));
        // Obstacle ending exactly at the runner's left edge
        assert!(!is_collision(&runner, &bounds(16, OBSTACLE_Y, 34, 70)));
    }

    #[test]
    fn test_collision_runner_above_obstacle() {
        // Runner bottom at 180 sits on the obstacle top
        let runner = bounds(50, 86, 88, 94);
        assert!(!is_collision(&runner, &bounds(60, OBSTACLE_Y, 34, 70)));

        let runner = bounds(50, 87, 88, 94);
        assert!(is_collision(&runner, &bounds(60, OBSTACLE_Y, 34, 70)));
    }

    // ── Tick tests ──

    #[test]
    fn test_tick_grounded_runner_stays_grounded() {
        let mut game = GameLoop::default();
        assert_eq!(game.tick(), TickOutcome::Advanced);
        assert!(game.state.is_grounded());
        assert_eq!(game.state.runner.velocity, 0);
        assert_eq!(game.state.score, 1);
    }

    #[test]
    fn test_tick_scrolls_obstacles() {
        let mut game = GameLoop::default();
        game.state.add_obstacle(Obstacle::spawn(ObstacleKind::Small));
        game.tick();
        assert_eq!(game.state.obstacles[0].x, 688);
    }

    #[test]
    fn test_tick_crash_halts_loop() {
        let mut game = GameLoop::default();
        game.state.add_obstacle(Obstacle::at(ObstacleKind::Small, RUNNER_X, GROUND_Y));

        assert_eq!(game.tick(), TickOutcome::Crashed);
        assert!(game.state.game_over);
        assert_eq!(game.state.runner.visual, VisualState::Dead);
        assert_eq!(game.state.score, 0);
        assert!(game.is_halted());
    }

    #[test]
    fn test_tick_crash_still_moves_later_obstacles() {
        let mut game = GameLoop::default();
        game.state.add_obstacle(Obstacle::at(ObstacleKind::Small, RUNNER_X, OBSTACLE_Y));
        game.state.add_obstacle(Obstacle::spawn(ObstacleKind::Large));

        assert_eq!(game.tick(), TickOutcome::Crashed);
        assert_eq!(game.state.obstacles[1].x, 688);
    }

    #[test]
    fn test_tick_after_game_over_is_idle() {
        let mut game = GameLoop::default();
        game.state.add_obstacle(Obstacle::at(ObstacleKind::Small, 60, OBSTACLE_Y));
        game.tick();
        let frozen = game.state.clone();

        assert_eq!(game.tick(), TickOutcome::Idle);
        assert_eq!(game.state, frozen);
    }

    #[test]
    fn test_tick_culls_off_field_obstacles() {
        let mut game = GameLoop::default();
        game.state.add_obstacle(Obstacle::at(ObstacleKind::Small, -22, OBSTACLE_Y));
        game.tick();
        assert!(game.state.obstacles.is_empty());
    }

    // ── Spawn tests ──

    #[test]
    fn test_spawn_from_roll_appends_at_right_edge() {
        let mut game = GameLoop::default();
        assert_eq!(game.spawn_from_roll(0.95), Some(ObstacleKind::Large));
        let obs = &game.state.obstacles[0];
        assert_eq!((obs.x, obs.y, obs.width, obs.height), (700, 180, 102, 70));
    }

    #[test]
    fn test_spawn_from_roll_gap() {
        let mut game = GameLoop::default();
        assert_eq!(game.spawn_from_roll(0.25), None);
        assert!(game.state.obstacles.is_empty());
    }

    #[test]
    fn test_spawn_cap_evicts_oldest() {
        let mut game = GameLoop::default();
        for i in 0..10 {
            game.state.add_obstacle(Obstacle::at(ObstacleKind::Small, i, OBSTACLE_Y));
        }

        game.spawn_from_roll(0.8);

        assert_eq!(game.state.obstacles.len(), 10);
        assert_eq!(game.state.obstacles[0].x, 1);
        assert_eq!(game.state.obstacles[9].kind, ObstacleKind::Medium);
    }

    #[test]
    fn test_spawn_ignored_after_game_over() {
        let mut game = GameLoop::default();
        game.state.game_over = true;
        // StepRng(u64::MAX) rolls just under 1.0, which would be a large spawn
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(game.spawn_tick(&mut rng), None);
        assert_eq!(game.spawn_from_roll(0.99), None);
        assert!(game.state.obstacles.is_empty());
    }

    #[test]
    fn test_spawn_tick_uses_rng_roll() {
        let mut game = GameLoop::default();
        let mut high = StepRng::new(u64::MAX, 0);
        assert_eq!(game.spawn_tick(&mut high), Some(ObstacleKind::Large));

        let mut low = StepRng::new(0, 0);
        assert_eq!(game.spawn_tick(&mut low), None);
        assert_eq!(game.state.obstacles.len(), 1);
    }

    // ── Timer tests ──

    #[test]
    fn test_advance_fires_ticks_per_interval() {
        let mut game = GameLoop::default();
        let mut rng = StepRng::new(0, 0);

        assert!(!game.advance(15, &mut rng));
        assert_eq!(game.state.score, 0);

        assert!(game.advance(1, &mut rng));
        assert_eq!(game.state.score, 1);

        game.advance(64, &mut rng);
        assert_eq!(game.state.score, 5);
    }

    #[test]
    fn test_advance_clamps_large_delta() {
        let mut game = GameLoop::default();
        let mut rng = StepRng::new(0, 0);
        game.advance(10_000, &mut rng);
        assert_eq!(game.state.score, MAX_FRAME_DT_MS / TICK_INTERVAL_MS);
    }

    #[test]
    fn test_advance_spawns_on_spawn_cadence() {
        let mut game = GameLoop::default();
        let mut rng = StepRng::new(u64::MAX, 0);

        for _ in 0..14 {
            game.advance(100, &mut rng);
        }
        assert!(game.state.obstacles.is_empty());

        game.advance(100, &mut rng);
        assert_eq!(game.state.obstacles.len(), 1);
        assert_eq!(game.state.obstacles[0].kind, ObstacleKind::Large);
    }

    #[test]
    fn test_advance_stops_after_crash() {
        let mut game = GameLoop::default();
        game.state.add_obstacle(Obstacle::at(ObstacleKind::Small, 60, OBSTACLE_Y));
        let mut rng = StepRng::new(u64::MAX, 0);

        game.advance(100, &mut rng);
        assert!(game.state.game_over);
        assert!(game.is_halted());

        let frozen = game.state.clone();
        for _ in 0..30 {
            assert!(!game.advance(100, &mut rng));
        }
        assert_eq!(game.state, frozen);
    }
}
