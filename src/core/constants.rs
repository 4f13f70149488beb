// Display surface (logical units)
pub const BOARD_WIDTH: i32 = 750;
pub const BOARD_HEIGHT: i32 = 250;

// Runner
pub const RUNNER_X: i32 = 50;
pub const RUNNER_WIDTH: i32 = 88;
pub const RUNNER_HEIGHT: i32 = 94;
pub const GROUND_Y: i32 = BOARD_HEIGHT - RUNNER_HEIGHT;

// Obstacles
pub const SMALL_OBSTACLE_WIDTH: i32 = 34;
pub const MEDIUM_OBSTACLE_WIDTH: i32 = 69;
pub const LARGE_OBSTACLE_WIDTH: i32 = 102;
pub const OBSTACLE_HEIGHT: i32 = 70;
pub const OBSTACLE_SPAWN_X: i32 = 700;
pub const OBSTACLE_Y: i32 = BOARD_HEIGHT - OBSTACLE_HEIGHT;
pub const MAX_OBSTACLES: usize = 10;

// Spawn roll thresholds: a roll above the threshold selects the variant
pub const LARGE_SPAWN_THRESHOLD: f64 = 0.90;
pub const MEDIUM_SPAWN_THRESHOLD: f64 = 0.70;
pub const SMALL_SPAWN_THRESHOLD: f64 = 0.50;

// Physics (per tick, positive y points down)
pub const GRAVITY: i32 = 1;
pub const JUMP_IMPULSE: i32 = -17;
pub const SCROLL_VELOCITY: i32 = -12;

// Timing
pub const TICK_INTERVAL_MS: u64 = 1000 / 60;
pub const SPAWN_INTERVAL_MS: u64 = 1500;
pub const MAX_FRAME_DT_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 4;
