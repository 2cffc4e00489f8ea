//! Damage application and death resolution.
//!
//! All hits from the behavior and projectile passes are buffered as
//! [`DamageEvent`]s and applied here in one place, so the terminal-health
//! invariant has a single enforcement point: an entity whose health is
//! already depleted takes no further damage and is never destroyed twice.

use hecs::{Entity, World};
use tracing::{debug, info};

use skirmish_core::components::{Allegiance, BaseStructure, Health, UnitStats};
use skirmish_core::enums::Faction;
use skirmish_core::events::SimEvent;

use crate::ledger::ResourceLedger;
use crate::systems::unit_behavior::DamageEvent;

/// Apply all buffered damage. Returns the faction whose base fell this
/// tick, if any — the sole match-ending condition.
pub fn run(
    world: &mut World,
    damage_events: &mut Vec<DamageEvent>,
    kill_reward_fraction: f64,
    player_ledger: &mut ResourceLedger,
    enemy_ledger: &mut ResourceLedger,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> Option<Faction> {
    let mut loser = None;

    for hit in damage_events.drain(..) {
        let died = {
            let Ok(mut health) = world.get::<&mut Health>(hit.target) else {
                // Target already removed; stale hit is a no-op.
                continue;
            };
            if health.is_depleted() {
                continue;
            }
            health.current = (health.current - hit.amount).max(0);
            health.is_depleted()
        };
        if !died {
            continue;
        }

        let Ok(faction) = world.get::<&Allegiance>(hit.target).map(|a| a.0) else {
            continue;
        };

        if let Ok(stats) = world.get::<&UnitStats>(hit.target) {
            // Unit death: credit a fraction of its gold cost to the
            // opposing ledger.
            let reward =
                (f64::from(stats.gold_cost) * kill_reward_fraction).round() as i32;
            let kind = stats.kind;
            drop(stats);

            match faction {
                Faction::Player => enemy_ledger.credit_gold(reward),
                Faction::Enemy => player_ledger.credit_gold(reward),
            }
            debug!(?faction, ?kind, reward, "unit killed");
            events.push(SimEvent::UnitKilled {
                faction,
                kind,
                reward_gold: reward,
            });
            despawn_buffer.push(hit.target);
        } else if world.get::<&BaseStructure>(hit.target).is_ok() {
            info!(?faction, "base destroyed");
            events.push(SimEvent::BaseDestroyed { faction });
            despawn_buffer.push(hit.target);
            loser.get_or_insert(faction);
        }
    }

    loser
}
