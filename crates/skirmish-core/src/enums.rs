//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// One of the two opposing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

impl Faction {
    /// The opposing faction.
    pub fn opponent(self) -> Faction {
        match self {
            Faction::Player => Faction::Enemy,
            Faction::Enemy => Faction::Player,
        }
    }

    /// Fixed lane advance direction: Player units march toward +x,
    /// Enemy units toward -x.
    pub fn lane_direction(self) -> f64 {
        match self {
            Faction::Player => 1.0,
            Faction::Enemy => -1.0,
        }
    }
}

/// Unit category — drives the cyclic type-advantage relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Infantry,
    Archer,
    Cavalry,
}

impl UnitKind {
    /// Cyclic dominance: Infantry over Archer, Archer over Cavalry,
    /// Cavalry over Infantry. All other matchups are neutral.
    pub fn dominates(self, defender: UnitKind) -> bool {
        matches!(
            (self, defender),
            (UnitKind::Infantry, UnitKind::Archer)
                | (UnitKind::Archer, UnitKind::Cavalry)
                | (UnitKind::Cavalry, UnitKind::Infantry)
        )
    }
}

/// Per-unit behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitState {
    /// Unused terminal placeholder, kept for display parity.
    Idle,
    /// Advancing along the lane.
    #[default]
    Move,
    /// Engaging a target within attack range.
    Attack,
}

/// What a spatial contact is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    Unit,
    Base,
}

/// Outcome of a spawn request. The only user-facing failure signals;
/// all variants are non-fatal and the caller may retry next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnResult {
    /// Request accepted; a unit was instantiated and the cooldown advanced.
    Admitted,
    /// The slot's cooldown has not elapsed. No resources were spent.
    CooldownActive,
    /// The ledger could not cover the full cost. The cooldown was NOT
    /// advanced — an unaffordable spawn does not consume its slot.
    InsufficientResources,
    /// The slot index is out of range.
    InvalidIndex,
}

/// Match phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Lobby,
    Active,
    Paused,
    /// A base fell; the surviving faction won.
    MatchOver,
}
