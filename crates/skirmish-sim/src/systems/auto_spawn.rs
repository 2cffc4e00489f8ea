//! Enemy auto-spawn driver.
//!
//! On a fixed interval the enemy side rolls a weighted-random roster slot
//! (weights favor weaker units) and pushes it through the same spawn gate
//! as the player. Rejections are logged and otherwise ignored — the next
//! interval simply tries again.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::config::BattleConfig;
use skirmish_core::enums::{Faction, SpawnResult};
use skirmish_core::events::SimEvent;

use crate::ledger::ResourceLedger;
use crate::spawn_gate::SpawnGate;
use crate::world_setup;

/// Attempt one auto-spawn if the interval has elapsed.
pub fn run(
    world: &mut World,
    gate: &mut SpawnGate,
    ledger: &mut ResourceLedger,
    config: &BattleConfig,
    rng: &mut ChaCha8Rng,
    now: f64,
    next_due_secs: &mut f64,
    events: &mut Vec<SimEvent>,
) {
    if now < *next_due_secs || gate.slot_count() == 0 {
        return;
    }
    *next_due_secs = now + config.auto_spawn_interval_secs;

    let slot = weighted_index(&config.auto_spawn_weights, gate.slot_count(), rng);
    match gate.request_spawn(slot, now, ledger) {
        SpawnResult::Admitted => {
            if let Some(spec) = gate.slot(slot).map(|entry| entry.spec.clone()) {
                world_setup::spawn_unit(world, Faction::Enemy, &spec);
                events.push(SimEvent::UnitSpawned {
                    faction: Faction::Enemy,
                    kind: spec.kind,
                });
            }
        }
        result => {
            debug!(slot, ?result, "enemy auto-spawn rejected");
            events.push(SimEvent::SpawnRejected {
                faction: Faction::Enemy,
                slot,
                result,
            });
        }
    }
}

/// Cumulative-weight roll over the first `slots` weights. Weights beyond
/// the roster are ignored; a weight participates only if it is finite
/// and positive, in the total and the scan alike. A degenerate total
/// falls back to slot 0.
fn weighted_index(weights: &[f64], slots: usize, rng: &mut ChaCha8Rng) -> usize {
    let weights = &weights[..weights.len().min(slots)];
    let usable = |w: f64| w.is_finite() && w > 0.0;
    let total: f64 = weights.iter().copied().filter(|&w| usable(w)).sum();
    if total <= 0.0 {
        return 0;
    }

    let roll: f64 = rng.gen_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = 0;
    for (i, &w) in weights.iter().enumerate() {
        if !usable(w) {
            continue;
        }
        cumulative += w;
        last = i;
        if roll < cumulative {
            return i;
        }
    }
    last
}

#[cfg(test)]
mod tests {
    use super::weighted_index;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_weighted_index_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let weights = [0.6, 0.3, 0.1];
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            counts[weighted_index(&weights, 3, &mut rng)] += 1;
        }
        // Weak units should dominate the draw, strong ones stay rare.
        assert!(counts[0] > counts[1] && counts[1] > counts[2]);
        assert!(counts[0] > 5_000 && counts[2] < 2_000);
    }

    #[test]
    fn test_weighted_index_truncates_to_roster() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(weighted_index(&[0.6, 0.3, 0.1], 2, &mut rng) < 2);
        }
    }

    #[test]
    fn test_weighted_index_degenerate_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(weighted_index(&[], 3, &mut rng), 0);
        assert_eq!(weighted_index(&[0.0, 0.0], 2, &mut rng), 0);
    }

    #[test]
    fn test_weighted_index_ignores_non_finite_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            // An infinite or NaN weight must not pin or skew the roll.
            assert_ne!(weighted_index(&[f64::INFINITY, 0.3, 0.1], 3, &mut rng), 0);
            assert_ne!(weighted_index(&[0.6, f64::NAN, 0.1], 3, &mut rng), 1);
        }
    }
}
