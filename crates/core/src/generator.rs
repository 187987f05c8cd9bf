//! Random item generation.
//!
//! Each call draws exactly three values from the source, in this order:
//!
//! 1. grade roll in `[0, 100)`
//! 2. price scale `u` in `[0, 1)`
//! 3. powerup pick
//!
//! The fixed order keeps scripted tests readable and seeded runs replayable.

use tracing::debug;

use crate::item::Item;
use crate::rng::RandomSource;
use crate::types::{Grade, PowerupKind, COST_FLOOR, COST_SPREAD, GRADE_ROLL_MAX, GRADE_THRESHOLDS};

/// Map a roll in `[0, 100)` to its grade.
///
/// Ranges are disjoint, so the first bound that holds wins.
pub fn grade_for_roll(roll: f64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(bound, _)| roll <= *bound)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::S)
}

/// Price of an item of `grade` for a scale draw `u` in `[0, 1)`.
///
/// Always at least 1.
pub fn cost_for(grade: Grade, u: f64) -> u32 {
    let scaled = grade.base_price() as f64 * (COST_SPREAD * u + COST_FLOOR);
    scaled.floor() as u32 + 1
}

/// Generate a fresh random item.
pub fn generate_item<R: RandomSource + ?Sized>(rng: &mut R) -> Item {
    let roll = rng.uniform(0.0, GRADE_ROLL_MAX);
    let grade = grade_for_roll(roll);
    let cost = cost_for(grade, rng.next_unit());
    let powerup = rng
        .pick(&PowerupKind::ALL)
        .copied()
        .unwrap_or(PowerupKind::ArrowRate);

    debug!(roll, grade = %grade, cost, powerup = %powerup, "generated shop item");
    Item::new(powerup, grade, cost)
}
