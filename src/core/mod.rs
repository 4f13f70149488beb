//! Fixed constants and run parameters.

pub mod constants;
pub mod tuning;

pub use constants::*;
pub use tuning::Tuning;
