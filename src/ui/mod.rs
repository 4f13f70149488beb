//! Terminal rendering. Everything here only reads the simulation.

pub mod dino_scene;
pub mod layout;

use crate::dino::types::SimulationState;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw(frame: &mut Frame, state: &SimulationState) {
    let area = frame.size();
    dino_scene::render_dino_scene(frame, area, state);
}
