//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, the per-faction ledgers and spawn gates,
//! runs systems at a fixed tick rate, and produces BattleSnapshots.
//! Completely headless (no rendering or input dependency), enabling
//! deterministic testing.

pub mod engine;
pub mod ledger;
pub mod spatial;
pub mod spawn_gate;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skirmish_core as core;
