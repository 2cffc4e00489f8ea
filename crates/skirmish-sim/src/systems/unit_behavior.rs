//! Per-unit behavior state machine: movement, target detection, and
//! attack resolution.
//!
//! Each tick a melee unit dispatches on its current state (Move or
//! Attack), then re-evaluates the state for the next tick from an
//! attack-range detection query. Ranged units bypass the gating: unless
//! `ranged_state_gated` is set they keep advancing every tick and
//! attempt attack resolution every tick, without ever leaving Move.
//!
//! Damage is not applied here — melee hits and projectile launches are
//! buffered so that every unit resolves against the same tick-start
//! world state.

use hecs::{Entity, World};

use skirmish_core::components::{Allegiance, AttackClock, Health, Unit, UnitStats};
use skirmish_core::config::BattleConfig;
use skirmish_core::constants::{BLOCK_PROBE_DISTANCE, BLOCK_PROBE_RADIUS};
use skirmish_core::enums::{ContactKind, Faction, UnitKind, UnitState};
use skirmish_core::types::Position;

use crate::spatial::{Contact, SpatialIndex};

/// A resolved hit, applied later by the damage system.
#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: i32,
}

/// A ranged attack's detached payload, instantiated after the pass.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileShot {
    pub origin: Position,
    pub faction: Faction,
    pub damage: i32,
    pub target: Entity,
}

/// Run one behavior tick for every living unit.
pub fn run(
    world: &mut World,
    index: &SpatialIndex,
    config: &BattleConfig,
    now: f64,
    dt: f64,
    damage_out: &mut Vec<DamageEvent>,
    shots_out: &mut Vec<ProjectileShot>,
) {
    for (entity, (_unit, allegiance, stats, clock, state, pos, health)) in world.query_mut::<(
        &Unit,
        &Allegiance,
        &UnitStats,
        &mut AttackClock,
        &mut UnitState,
        &mut Position,
        &Health,
    )>() {
        if health.is_depleted() {
            continue;
        }
        let faction = allegiance.0;

        if stats.is_ranged && !config.ranged_state_gated {
            // Fire on the move: forward advance and attack opportunity are
            // checked every tick, independently.
            advance(entity, faction, stats.move_speed, pos, index, dt);
            resolve_attack(
                entity, faction, stats, clock, pos, index, config, now, damage_out, shots_out,
            );
            *state = UnitState::Move;
            continue;
        }

        match *state {
            UnitState::Move => {
                advance(entity, faction, stats.move_speed, pos, index, dt);
            }
            UnitState::Attack => {
                let had_target = resolve_attack(
                    entity, faction, stats, clock, pos, index, config, now, damage_out, shots_out,
                );
                if !had_target {
                    *state = UnitState::Move;
                    continue;
                }
            }
            UnitState::Idle => continue,
        }

        // Re-evaluate for next tick: any valid enemy in attack range?
        *state = if nearest_target(entity, faction, pos, stats.attack_range, index).is_some() {
            UnitState::Attack
        } else {
            UnitState::Move
        };
    }
}

/// Lane advance with a short forward obstruction probe. Any unit (either
/// faction) or an enemy base in the immediate forward cell blocks this
/// tick's displacement; a friendly base never does.
fn advance(
    entity: Entity,
    faction: Faction,
    speed: f64,
    pos: &mut Position,
    index: &SpatialIndex,
    dt: f64,
) {
    let dir = faction.lane_direction();
    let probe = Position::new(pos.x + dir * BLOCK_PROBE_DISTANCE, pos.y);

    let blocked = index.query_circle(probe, BLOCK_PROBE_RADIUS).any(|c| {
        c.entity != entity
            && match c.kind {
                ContactKind::Unit => true,
                ContactKind::Base => c.faction != faction,
            }
    });

    if !blocked {
        pos.x += dir * speed * dt;
    }
}

/// Attack resolution: cooldown gate, target re-query, nearest selection,
/// then melee damage or projectile launch. Returns whether any valid
/// target was in range (false tells the melee state machine to revert to
/// Move).
#[allow(clippy::too_many_arguments)]
fn resolve_attack(
    entity: Entity,
    faction: Faction,
    stats: &UnitStats,
    clock: &mut AttackClock,
    pos: &Position,
    index: &SpatialIndex,
    config: &BattleConfig,
    now: f64,
    damage_out: &mut Vec<DamageEvent>,
    shots_out: &mut Vec<ProjectileShot>,
) -> bool {
    if now < clock.last_attack_secs + stats.attack_cooldown_secs {
        return true;
    }

    let Some(target) = nearest_target(entity, faction, pos, stats.attack_range, index) else {
        return false;
    };

    if stats.is_ranged {
        shots_out.push(ProjectileShot {
            origin: *pos,
            faction,
            damage: stats.attack_damage,
            target: target.entity,
        });
    } else {
        let amount = match target.kind {
            ContactKind::Unit => scaled_damage(
                stats.attack_damage,
                stats.kind,
                target.unit_kind,
                config.advantage_multiplier,
            ),
            // Bases take raw damage, no type advantage.
            ContactKind::Base => stats.attack_damage,
        };
        damage_out.push(DamageEvent {
            target: target.entity,
            amount,
        });
    }

    clock.last_attack_secs = now;
    true
}

/// Nearest valid enemy target within `range` of `pos`, by Euclidean
/// distance. Ties go to the first contact encountered. Valid targets are
/// opposing-faction units and bases.
fn nearest_target<'a>(
    entity: Entity,
    faction: Faction,
    pos: &Position,
    range: f64,
    index: &'a SpatialIndex,
) -> Option<&'a Contact> {
    let mut nearest: Option<(&Contact, f64)> = None;
    for contact in index.query_circle(*pos, range) {
        if contact.entity == entity || contact.faction == faction {
            continue;
        }
        let dist = pos.distance_to(&contact.position);
        if nearest.map_or(true, |(_, best)| dist < best) {
            nearest = Some((contact, dist));
        }
    }
    nearest.map(|(contact, _)| contact)
}

/// Final applied damage with the cyclic type-advantage multiplier.
/// Rounds half away from zero (`f64::round`).
pub fn scaled_damage(
    base: i32,
    attacker: UnitKind,
    defender: Option<UnitKind>,
    multiplier: f64,
) -> i32 {
    match defender {
        Some(kind) if attacker.dominates(kind) => (f64::from(base) * multiplier).round() as i32,
        _ => base,
    }
}
