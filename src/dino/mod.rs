//! Dino Run: an endless runner where the only move is jumping over cacti.

pub mod input;
pub mod logic;
pub mod timer;
pub mod types;

pub use input::{on_jump_signal, SignalEffect};
pub use logic::{is_collision, GameLoop, TickOutcome};
pub use timer::Cadence;
pub use types::{Bounds, Obstacle, ObstacleKind, Runner, SimulationState, VisualState};
