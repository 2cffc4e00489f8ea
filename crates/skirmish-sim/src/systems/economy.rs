//! Economy system: passive ledger regeneration.
//!
//! Both ledgers regenerate integer amounts on whole-second tick
//! boundaries of the shared simulation clock, never wall time.

use skirmish_core::constants::TICK_RATE;

use crate::ledger::ResourceLedger;

/// Run regeneration if `completed_tick` closes out a full second.
pub fn run(completed_tick: u64, player: &mut ResourceLedger, enemy: &mut ResourceLedger) {
    if completed_tick == 0 || completed_tick % u64::from(TICK_RATE) != 0 {
        return;
    }
    player.regenerate_second();
    enemy.regenerate_second();
}
