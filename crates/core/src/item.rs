//! Purchasable item value.

use crate::types::{Grade, PowerupKind};

/// A purchasable powerup with a rarity grade and a gold price.
///
/// Fields are private: an item never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    powerup: PowerupKind,
    grade: Grade,
    cost: u32,
}

impl Item {
    pub fn new(powerup: PowerupKind, grade: Grade, cost: u32) -> Self {
        Self {
            powerup,
            grade,
            cost,
        }
    }

    pub fn powerup(&self) -> PowerupKind {
        self.powerup
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}
