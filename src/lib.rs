//! Dino Runner - terminal endless runner.
//!
//! The simulation (`dino`) has no terminal dependencies and is driven by the
//! binary's event loop; `ui` and `input` are the terminal front end.

pub mod build_info;
pub mod core;
pub mod dino;
pub mod input;
pub mod ui;

pub use crate::core::{constants::*, Tuning};
pub use dino::{on_jump_signal, GameLoop, SignalEffect, SimulationState, TickOutcome};
