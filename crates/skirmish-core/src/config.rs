//! Tunable battle configuration.
//!
//! Everything the design iterations disagreed on (advantage multiplier,
//! ranged state-gating) or that a scenario may want to vary (roster,
//! economy settings, base health) is a config field, not a constant.

use serde::{Deserialize, Serialize};

use crate::enums::UnitKind;

/// A multi-currency price tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCost {
    pub gold: i32,
    pub wood: i32,
    pub food: i32,
}

impl ResourceCost {
    pub fn new(gold: i32, wood: i32, food: i32) -> Self {
        Self { gold, wood, food }
    }
}

/// Starting values, caps, and per-second regeneration for one faction's
/// ledger. Regeneration never overshoots a cap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LedgerSettings {
    pub start_gold: i32,
    pub start_wood: i32,
    pub start_food: i32,
    pub max_gold: i32,
    pub max_wood: i32,
    pub max_food: i32,
    pub regen_gold_per_sec: i32,
    pub regen_wood_per_sec: i32,
    pub regen_food_per_sec: i32,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            start_gold: 500,
            start_wood: 300,
            start_food: 200,
            max_gold: 1000,
            max_wood: 500,
            max_food: 400,
            regen_gold_per_sec: 1,
            regen_wood_per_sec: 1,
            regen_food_per_sec: 1,
        }
    }
}

/// Full definition of one spawnable unit type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub name: String,
    pub kind: UnitKind,
    /// Ranged units resolve attacks by spawning a homing projectile
    /// instead of applying damage immediately.
    pub is_ranged: bool,
    pub max_health: i32,
    pub move_speed: f64,
    pub attack_range: f64,
    pub attack_damage: i32,
    pub attack_cooldown_secs: f64,
    pub spawn_cooldown_secs: f64,
    pub cost: ResourceCost,
}

/// Complete tuning for one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConfig {
    pub player_ledger: LedgerSettings,
    pub enemy_ledger: LedgerSettings,
    /// Spawnable unit types, in ascending strength order (the auto-spawn
    /// weights index into this).
    pub roster: Vec<UnitSpec>,
    pub base_health: i32,
    /// Damage multiplier for the three dominant matchups.
    pub advantage_multiplier: f64,
    /// Fraction of a dead unit's gold cost credited to the opposing ledger.
    pub kill_reward_fraction: f64,
    /// Seconds between enemy auto-spawn attempts.
    pub auto_spawn_interval_secs: f64,
    /// Weighted-random slot choice for enemy auto-spawn; one weight per
    /// roster slot. Extra weights are ignored, missing ones count as zero.
    pub auto_spawn_weights: Vec<f64>,
    /// When true, ranged units follow the same Move/Attack state gating
    /// as melee units instead of firing on the move.
    pub ranged_state_gated: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player_ledger: LedgerSettings::default(),
            enemy_ledger: LedgerSettings::default(),
            roster: default_roster(),
            base_health: 1000,
            advantage_multiplier: 1.2,
            kill_reward_fraction: 0.2,
            auto_spawn_interval_secs: 5.0,
            auto_spawn_weights: vec![0.6, 0.3, 0.1],
            ranged_state_gated: false,
        }
    }
}

/// The stock three-unit roster: melee infantry, ranged archer, fast cavalry.
pub fn default_roster() -> Vec<UnitSpec> {
    vec![
        UnitSpec {
            name: "Infantry".to_string(),
            kind: UnitKind::Infantry,
            is_ranged: false,
            max_health: 100,
            move_speed: 2.0,
            attack_range: 1.5,
            attack_damage: 10,
            attack_cooldown_secs: 1.0,
            spawn_cooldown_secs: 1.0,
            cost: ResourceCost::new(50, 20, 10),
        },
        UnitSpec {
            name: "Archer".to_string(),
            kind: UnitKind::Archer,
            is_ranged: true,
            max_health: 70,
            move_speed: 1.8,
            attack_range: 4.0,
            attack_damage: 8,
            attack_cooldown_secs: 1.2,
            spawn_cooldown_secs: 2.0,
            cost: ResourceCost::new(80, 40, 20),
        },
        UnitSpec {
            name: "Cavalry".to_string(),
            kind: UnitKind::Cavalry,
            is_ranged: false,
            max_health: 150,
            move_speed: 3.2,
            attack_range: 1.5,
            attack_damage: 16,
            attack_cooldown_secs: 1.4,
            spawn_cooldown_secs: 4.0,
            cost: ResourceCost::new(150, 60, 40),
        },
    ]
}
