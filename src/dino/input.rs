//! The single action signal: jump while running, restart after a crash.

use super::logic::GameLoop;
use super::types::VisualState;

/// What the action signal did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalEffect {
    Jumped,
    Restarted,
    /// Airborne: the press is dropped, not buffered.
    Ignored,
}

/// Handle the action button.
///
/// The jump key doubles as the restart key: after a crash it resets the
/// run and restarts both timers instead of jumping.
pub fn on_jump_signal(game: &mut GameLoop) -> SignalEffect {
    if game.state.game_over {
        let final_score = game.state.score;
        game.state.reset();
        game.resume();
        log::info!("Restarting run (previous score {})", final_score);
        return SignalEffect::Restarted;
    }

    if game.state.is_grounded() {
        game.state.runner.velocity = game.tuning.jump_impulse;
        game.state.runner.visual = VisualState::Jumping;
        SignalEffect::Jumped
    } else {
        SignalEffect::Ignored
    }
}
