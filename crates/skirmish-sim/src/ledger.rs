//! Per-faction resource ledger: Gold/Wood/Food balances with caps and
//! passive regeneration.
//!
//! This is a pure accounting primitive. The only failure mode is the
//! boolean result of [`ResourceLedger::try_spend`]; balances are always
//! kept within `[0, cap]`.

use skirmish_core::config::{LedgerSettings, ResourceCost};
use skirmish_core::state::LedgerView;

/// One currency's balance, cap, and per-second regeneration rate.
#[derive(Debug, Clone, Copy)]
struct Currency {
    balance: i32,
    cap: i32,
    regen_per_sec: i32,
}

impl Currency {
    fn new(start: i32, cap: i32, regen_per_sec: i32) -> Self {
        Self {
            balance: start.clamp(0, cap),
            cap,
            regen_per_sec,
        }
    }

    fn regenerate_second(&mut self) {
        self.balance = (self.balance + self.regen_per_sec).min(self.cap);
    }

    fn credit(&mut self, amount: i32) {
        self.balance = (self.balance + amount.max(0)).min(self.cap);
    }
}

/// Multi-currency balance for one faction.
#[derive(Debug, Clone)]
pub struct ResourceLedger {
    gold: Currency,
    wood: Currency,
    food: Currency,
}

impl ResourceLedger {
    pub fn new(settings: &LedgerSettings) -> Self {
        Self {
            gold: Currency::new(
                settings.start_gold,
                settings.max_gold,
                settings.regen_gold_per_sec,
            ),
            wood: Currency::new(
                settings.start_wood,
                settings.max_wood,
                settings.regen_wood_per_sec,
            ),
            food: Currency::new(
                settings.start_food,
                settings.max_food,
                settings.regen_food_per_sec,
            ),
        }
    }

    /// Apply one second's worth of regeneration to every currency,
    /// clamped to the caps.
    pub fn regenerate_second(&mut self) {
        self.gold.regenerate_second();
        self.wood.regenerate_second();
        self.food.regenerate_second();
    }

    /// Atomically deduct `cost` from all three balances. Succeeds iff every
    /// balance covers its share; on failure nothing is mutated.
    pub fn try_spend(&mut self, cost: &ResourceCost) -> bool {
        if self.gold.balance >= cost.gold
            && self.wood.balance >= cost.wood
            && self.food.balance >= cost.food
        {
            self.gold.balance -= cost.gold;
            self.wood.balance -= cost.wood;
            self.food.balance -= cost.food;
            return true;
        }
        false
    }

    /// Credit gold (kill rewards), clamped to the cap.
    pub fn credit_gold(&mut self, amount: i32) {
        self.gold.credit(amount);
    }

    pub fn gold(&self) -> i32 {
        self.gold.balance
    }

    pub fn wood(&self) -> i32 {
        self.wood.balance
    }

    pub fn food(&self) -> i32 {
        self.food.balance
    }

    /// Read-only view for HUD display.
    pub fn view(&self) -> LedgerView {
        LedgerView {
            gold: self.gold.balance,
            wood: self.wood.balance,
            food: self.food.balance,
        }
    }
}
