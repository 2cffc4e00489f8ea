//! Snapshot system: queries the ECS world and builds a complete
//! BattleSnapshot.
//!
//! This system is read-only — it never modifies the world. Views are
//! sorted by entity id so snapshots are stable for a given world state.

use hecs::World;

use skirmish_core::components::{Allegiance, BaseStructure, Health, Unit, UnitStats};
use skirmish_core::enums::{Faction, GamePhase, UnitState};
use skirmish_core::events::SimEvent;
use skirmish_core::state::{BaseView, BattleSnapshot, ProjectileView, UnitView};
use skirmish_core::types::{Position, SimTime};

use crate::ledger::ResourceLedger;
use crate::spawn_gate::SpawnGate;
use crate::systems::projectile::HomingProjectile;

/// Build a complete BattleSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    winner: Option<Faction>,
    player_ledger: &ResourceLedger,
    enemy_ledger: &ResourceLedger,
    player_gate: &SpawnGate,
    events: Vec<SimEvent>,
) -> BattleSnapshot {
    BattleSnapshot {
        time: *time,
        phase,
        winner,
        units: build_units(world),
        bases: build_bases(world),
        projectiles: build_projectiles(world),
        player_ledger: player_ledger.view(),
        enemy_ledger: enemy_ledger.view(),
        spawn_slots: player_gate.views(time.elapsed_secs),
        events,
    }
}

fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&Unit, &Allegiance, &UnitStats, &UnitState, &Health, &Position)>()
        .iter()
        .map(|(entity, (_unit, allegiance, stats, state, health, pos))| UnitView {
            id: entity.id(),
            faction: allegiance.0,
            kind: stats.kind,
            state: *state,
            position: *pos,
            health_current: health.current,
            health_max: health.max,
            health_ratio: health.ratio(),
        })
        .collect();
    units.sort_by_key(|u| u.id);
    units
}

fn build_bases(world: &World) -> Vec<BaseView> {
    let mut bases: Vec<BaseView> = world
        .query::<(&BaseStructure, &Allegiance, &Health, &Position)>()
        .iter()
        .map(|(_, (_base, allegiance, health, pos))| BaseView {
            faction: allegiance.0,
            position: *pos,
            health_current: health.current,
            health_max: health.max,
            health_ratio: health.ratio(),
        })
        .collect();
    bases.sort_by_key(|b| b.faction != Faction::Player);
    bases
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<(u32, ProjectileView)> = world
        .query::<(&HomingProjectile, &Allegiance, &Position)>()
        .iter()
        .map(|(entity, (proj, allegiance, pos))| {
            (
                entity.id(),
                ProjectileView {
                    faction: allegiance.0,
                    position: *pos,
                    damage: proj.damage,
                },
            )
        })
        .collect();
    projectiles.sort_by_key(|(id, _)| *id);
    projectiles.into_iter().map(|(_, view)| view).collect()
}
