//! Entity spawn factories for setting up the battle world.
//!
//! Every entity is fully configured (faction, stats, position) before it
//! is inserted into the live set — there are no deferred post-creation
//! fixups, so a freshly spawned unit participates correctly on its first
//! tick.

use hecs::World;

use skirmish_core::components::{Allegiance, AttackClock, BaseStructure, Health, Unit, UnitStats};
use skirmish_core::config::{BattleConfig, UnitSpec};
use skirmish_core::constants::{LANE_HALF_LENGTH, SPAWN_OFFSET};
use skirmish_core::enums::{Faction, UnitState};
use skirmish_core::types::Position;

/// Set up the initial match world: one base per faction.
pub fn setup_match(world: &mut World, config: &BattleConfig) {
    spawn_base(world, Faction::Player, config.base_health);
    spawn_base(world, Faction::Enemy, config.base_health);
}

/// Fixed base position: Player on the left end of the lane, Enemy on the
/// right.
pub fn base_position(faction: Faction) -> Position {
    Position::new(-faction.lane_direction() * LANE_HALF_LENGTH, 0.0)
}

/// Units enter the lane just in front of their own base.
pub fn spawn_point(faction: Faction) -> Position {
    let base = base_position(faction);
    Position::new(base.x + faction.lane_direction() * SPAWN_OFFSET, base.y)
}

/// Spawn a faction base: immobile damage sink, no state machine.
pub fn spawn_base(world: &mut World, faction: Faction, health: i32) -> hecs::Entity {
    world.spawn((
        BaseStructure,
        Allegiance(faction),
        base_position(faction),
        Health::full(health),
    ))
}

/// Spawn a unit from its roster spec at the faction's spawn point.
pub fn spawn_unit(world: &mut World, faction: Faction, spec: &UnitSpec) -> hecs::Entity {
    let stats = UnitStats {
        kind: spec.kind,
        is_ranged: spec.is_ranged,
        move_speed: spec.move_speed,
        attack_range: spec.attack_range,
        attack_damage: spec.attack_damage,
        attack_cooldown_secs: spec.attack_cooldown_secs,
        gold_cost: spec.cost.gold,
    };

    world.spawn((
        Unit,
        Allegiance(faction),
        spawn_point(faction),
        Health::full(spec.max_health),
        stats,
        AttackClock::default(),
        UnitState::default(),
    ))
}
