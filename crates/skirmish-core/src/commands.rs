//! Player commands sent from the driver to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Request a player-side spawn from roster slot `slot`.
    /// Admission is decided by the spawn gate; rejection is non-fatal.
    SpawnUnit { slot: usize },
    /// Start a new match (from Lobby or MatchOver).
    StartMatch,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
