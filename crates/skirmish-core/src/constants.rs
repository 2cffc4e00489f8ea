//! Simulation constants and fixed geometry.
//!
//! Tunable gameplay parameters live in [`crate::config::BattleConfig`];
//! only values with a single sensible setting belong here.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Lane geometry ---

/// Lane half-length: Player base sits at -x, Enemy base at +x.
pub const LANE_HALF_LENGTH: f64 = 20.0;

/// Units spawn this far in front of their own base, toward the lane center.
pub const SPAWN_OFFSET: f64 = 1.5;

// --- Collision boundaries ---

/// Contact radius of a unit (projectile arrival, forward blocking).
pub const UNIT_CONTACT_RADIUS: f64 = 0.35;

/// Contact radius of a base.
pub const BASE_CONTACT_RADIUS: f64 = 1.0;

/// How far ahead of a unit the forward obstruction probe is centered.
pub const BLOCK_PROBE_DISTANCE: f64 = 0.6;

/// Radius of the forward obstruction probe. Independent of attack-range
/// detection; both radii matter for spacing and engagement timing.
pub const BLOCK_PROBE_RADIUS: f64 = 0.3;

// --- Projectiles ---

/// Constant homing speed of ranged-attack projectiles.
pub const PROJECTILE_SPEED: f64 = 8.0;
