//! Buyers: anything with a gold balance that can shop.

use crate::item::Item;

/// Minimal contract a shop needs from whoever is paying.
pub trait Buyer {
    fn current_gold(&self) -> u32;

    fn current_gold_mut(&mut self) -> &mut u32;
}

/// The player tower: a gold balance, passive income and the items bought so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    current_gold: u32,
    gold_per_second: u32,
    /// Income earned but not yet a whole gold piece, in gold*ms.
    income_remainder: u64,
    inventory: Vec<Item>,
}

impl Player {
    pub fn new(starting_gold: u32) -> Self {
        Self {
            current_gold: starting_gold,
            gold_per_second: 0,
            income_remainder: 0,
            inventory: Vec::new(),
        }
    }

    pub fn with_income(mut self, gold_per_second: u32) -> Self {
        self.gold_per_second = gold_per_second;
        self
    }

    pub fn gold_per_second(&self) -> u32 {
        self.gold_per_second
    }

    /// Accrue passive income for `elapsed_ms`.
    ///
    /// Fractions of a gold piece carry over to the next call, so many small
    /// ticks pay out the same as one long one. Returns the gold added.
    pub fn accrue(&mut self, elapsed_ms: u32) -> u32 {
        self.income_remainder += self.gold_per_second as u64 * elapsed_ms as u64;
        let whole = (self.income_remainder / 1000) as u32;
        self.income_remainder %= 1000;
        self.earn(whole);
        whole
    }

    /// Add gold, saturating at `u32::MAX`.
    pub fn earn(&mut self, amount: u32) {
        self.current_gold = self.current_gold.saturating_add(amount);
    }

    /// Take ownership of a purchased item.
    pub fn receive(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Start over with `starting_gold` and an empty inventory.
    ///
    /// The income rate is kept. This is a host action (a restart), not a
    /// purchase, so it lives here rather than in the shop.
    pub fn reset(&mut self, starting_gold: u32) {
        self.current_gold = starting_gold;
        self.income_remainder = 0;
        self.inventory.clear();
    }
}

impl Buyer for Player {
    fn current_gold(&self) -> u32 {
        self.current_gold
    }

    fn current_gold_mut(&mut self) -> &mut u32 {
        &mut self.current_gold
    }
}
