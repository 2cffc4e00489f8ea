//! Battle state snapshot — the complete visible state produced each tick.
//!
//! Display collaborators (health bars, HUD text, cooldown dials) are
//! pull-based readers of this structure; nothing here mutates the core.

use serde::{Deserialize, Serialize};

use crate::config::ResourceCost;
use crate::enums::{Faction, GamePhase, UnitKind, UnitState};
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Complete battle state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Set once a base falls.
    pub winner: Option<Faction>,
    pub units: Vec<UnitView>,
    pub bases: Vec<BaseView>,
    pub projectiles: Vec<ProjectileView>,
    pub player_ledger: LedgerView,
    pub enemy_ledger: LedgerView,
    /// Player-side spawn slots, for cooldown dials and button gating.
    pub spawn_slots: Vec<SpawnSlotView>,
    /// Events that fired this tick.
    pub events: Vec<SimEvent>,
}

/// A unit on the lane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: u32,
    pub faction: Faction,
    pub kind: UnitKind,
    pub state: UnitState,
    pub position: Position,
    pub health_current: i32,
    pub health_max: i32,
    /// 0.0..=1.0 for health-bar fill.
    pub health_ratio: f64,
}

/// A faction base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseView {
    pub faction: Faction,
    pub position: Position,
    pub health_current: i32,
    pub health_max: i32,
    pub health_ratio: f64,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub faction: Faction,
    pub position: Position,
    pub damage: i32,
}

/// One faction's resource balances for HUD text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LedgerView {
    pub gold: i32,
    pub wood: i32,
    pub food: i32,
}

/// One spawn slot's UI-facing status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnSlotView {
    pub slot: usize,
    pub name: String,
    pub kind: UnitKind,
    pub cost: ResourceCost,
    /// Seconds until the cooldown elapses; 0 when ready.
    pub cooldown_remaining_secs: f64,
    /// True when the cooldown has elapsed (resource availability is a
    /// separate, per-request check).
    pub ready: bool,
}
