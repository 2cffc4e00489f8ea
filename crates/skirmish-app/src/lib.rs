//! Skirmish terminal application.
//!
//! Wires the simulation engine to a fixed-rate game loop thread and a
//! minimal stdin command prompt.

pub mod game_loop;
pub mod state;

pub use skirmish_core as core;
