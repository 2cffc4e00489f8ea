//! Spawn admission control: per-slot cooldowns coupled to the ledger.
//!
//! The gate is the single authority on whether a spawn request is
//! honored. Check order is load-bearing: index bounds, then cooldown,
//! then the atomic spend. A spend failure must NOT advance the cooldown,
//! so a unit that cannot be afforded does not consume its slot.

use tracing::warn;

use skirmish_core::config::UnitSpec;
use skirmish_core::enums::SpawnResult;
use skirmish_core::state::SpawnSlotView;

use crate::ledger::ResourceLedger;

/// One roster slot's cooldown tracker.
#[derive(Debug, Clone)]
pub struct SpawnSlot {
    pub spec: UnitSpec,
    /// False when the spec failed validation at construction. The slot
    /// stays in place so later indices are not renumbered; requests
    /// against it are rejected without touching the ledger.
    pub valid: bool,
    /// Simulation time of the last admitted spawn. Starts at -inf so the
    /// first request is never cooldown-gated.
    pub last_spawn_secs: f64,
}

/// Per-faction spawn gate over the shared roster.
#[derive(Debug, Clone)]
pub struct SpawnGate {
    slots: Vec<SpawnSlot>,
}

impl SpawnGate {
    /// Build a gate from the roster. Malformed specs are kept in place
    /// but marked invalid, with a diagnostic: slot indices and the
    /// auto-spawn weights stay aligned with the roster, and requests
    /// against a bad slot degrade to a rejected no-op.
    pub fn new(roster: &[UnitSpec]) -> Self {
        let slots = roster
            .iter()
            .map(|spec| {
                let valid =
                    spec.max_health > 0 && spec.move_speed > 0.0 && spec.attack_damage >= 0;
                if !valid {
                    warn!(name = %spec.name, "misconfigured spawn slot; requests will be rejected");
                }
                SpawnSlot {
                    spec: spec.clone(),
                    valid,
                    last_spawn_secs: f64::NEG_INFINITY,
                }
            })
            .collect();
        Self { slots }
    }

    /// Decide a spawn request at simulation time `now`. On Admitted the
    /// ledger has been charged and the slot's cooldown stamp advanced;
    /// every other result leaves both untouched.
    pub fn request_spawn(
        &mut self,
        index: usize,
        now: f64,
        ledger: &mut ResourceLedger,
    ) -> SpawnResult {
        let Some(slot) = self.slots.get_mut(index) else {
            return SpawnResult::InvalidIndex;
        };
        if !slot.valid {
            return SpawnResult::InvalidIndex;
        }
        if now < slot.last_spawn_secs + slot.spec.spawn_cooldown_secs {
            return SpawnResult::CooldownActive;
        }
        if !ledger.try_spend(&slot.spec.cost) {
            return SpawnResult::InsufficientResources;
        }
        slot.last_spawn_secs = now;
        SpawnResult::Admitted
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&SpawnSlot> {
        self.slots.get(index)
    }

    /// Seconds until slot `index` comes off cooldown; 0 when ready.
    pub fn remaining_cooldown(&self, index: usize, now: f64) -> f64 {
        self.slots
            .get(index)
            .map(|slot| (slot.last_spawn_secs + slot.spec.spawn_cooldown_secs - now).max(0.0))
            .unwrap_or(0.0)
    }

    /// UI-facing views of every slot (cooldown dials, button gating).
    pub fn views(&self, now: f64) -> Vec<SpawnSlotView> {
        self.slots
            .iter()
            .enumerate()
            .map(|(slot, entry)| {
                let remaining = self.remaining_cooldown(slot, now);
                SpawnSlotView {
                    slot,
                    name: entry.spec.name.clone(),
                    kind: entry.spec.kind,
                    cost: entry.spec.cost,
                    cooldown_remaining_secs: remaining,
                    ready: entry.valid && remaining <= 0.0,
                }
            })
            .collect()
    }
}
