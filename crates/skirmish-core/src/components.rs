//! ECS components for simulation entities.
//!
//! Components are plain data structs with no game logic.
//! Behavior lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{Faction, UnitKind};

/// Which side an entity fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allegiance(pub Faction);

/// Hit points. Reaching 0 is terminal: the entity is removed from the
/// simulation at the end of the tick and never takes further damage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    /// 0.0..=1.0 fill ratio for health-bar rendering.
    pub fn ratio(&self) -> f64 {
        if self.max <= 0 {
            return 0.0;
        }
        f64::from(self.current.max(0)) / f64::from(self.max)
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

/// Combat profile of a unit, copied from its roster spec at spawn time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitStats {
    pub kind: UnitKind,
    pub is_ranged: bool,
    pub move_speed: f64,
    pub attack_range: f64,
    pub attack_damage: i32,
    pub attack_cooldown_secs: f64,
    /// Gold component of the spawn cost; basis for the kill reward.
    pub gold_cost: i32,
}

/// Per-unit attack cooldown clock, in simulation seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackClock {
    /// Simulation time of the last attack. Starts at -inf so the first
    /// attack is never cooldown-gated.
    pub last_attack_secs: f64,
}

impl Default for AttackClock {
    fn default() -> Self {
        Self {
            last_attack_secs: f64::NEG_INFINITY,
        }
    }
}

/// Marks an entity as a mobile combat unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit;

/// Marks an entity as a faction base: immobile, no state machine,
/// a pure damage sink whose destruction ends the match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BaseStructure;
