//! Events emitted by the simulation for audio and UI collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::{Faction, SpawnResult, UnitKind};

/// One-shot events included in the snapshot for the tick they fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A spawn request was admitted and a unit entered the lane.
    UnitSpawned { faction: Faction, kind: UnitKind },
    /// A spawn request was rejected (cooldown, resources, or bad index).
    SpawnRejected {
        faction: Faction,
        slot: usize,
        result: SpawnResult,
    },
    /// A ranged unit loosed a projectile.
    ProjectileLaunched { faction: Faction },
    /// A unit died; the opposing ledger was credited `reward_gold`.
    UnitKilled {
        faction: Faction,
        kind: UnitKind,
        reward_gold: i32,
    },
    /// A base fell. The match is over; `faction` is the losing side.
    BaseDestroyed { faction: Faction },
}
