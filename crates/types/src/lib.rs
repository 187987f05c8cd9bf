//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the shop.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grade Table
//!
//! Every generated item rolls a value in `[0, 100)` and maps it to a grade:
//!
//! | Grade | Roll | Chance | Base price |
//! |-------|------|--------|------------|
//! | D | `r <= 40` | 40% | 20 |
//! | C | `r <= 70` | 30% | 40 |
//! | B | `r <= 90` | 20% | 60 |
//! | A | `r <= 98` | 8% | 80 |
//! | S | otherwise | 2% | 120 |
//!
//! # Cost Scaling
//!
//! Final price is `floor(base * (COST_SPREAD * u + COST_FLOOR)) + 1` for a
//! second uniform draw `u` in `[0, 1)`, i.e. roughly `0.7x..1.3x` of the base.
//!
//! # Examples
//!
//! ```
//! use tower_shop_types::{Grade, Keybind, PowerupKind, ShopAction};
//!
//! assert!(Grade::D < Grade::S);
//! assert_eq!(Grade::from_str("b"), Some(Grade::B));
//! assert_eq!(Grade::A.base_price(), 80);
//!
//! assert_eq!(PowerupKind::from_str("arrowRate"), Some(PowerupKind::ArrowRate));
//!
//! let key = Keybind::new('z').unwrap();
//! assert_eq!(key.as_char(), 'Z');
//! assert_eq!(ShopAction::Buy(key), ShopAction::Buy(Keybind::new('Z').unwrap()));
//! ```

use std::fmt;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Upper bound (exclusive) of the grade roll.
pub const GRADE_ROLL_MAX: f64 = 100.0;

/// Inclusive upper roll bound for each grade, in ascending grade order.
///
/// Anything above the last bound maps to S.
pub const GRADE_THRESHOLDS: [(f64, Grade); 4] = [
    (40.0, Grade::D),
    (70.0, Grade::C),
    (90.0, Grade::B),
    (98.0, Grade::A),
];

/// Width of the random price band, as a fraction of the base price.
pub const COST_SPREAD: f64 = 0.6;

/// Lower edge of the random price band, as a fraction of the base price.
pub const COST_FLOOR: f64 = 0.7;

/// Maximum number of slots a single shop can hold.
pub const MAX_SLOTS: usize = 8;

/// Keybinds used when none are configured.
pub const DEFAULT_KEYBINDS: [char; 3] = ['Z', 'X', 'C'];

/// Gold a fresh player starts with.
pub const DEFAULT_STARTING_GOLD: u32 = 50;

/// Passive gold income per second.
pub const DEFAULT_GOLD_PER_SECOND: u32 = 5;

/// Item rarity tier, ordered from lowest (D) to highest (S).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    D,
    C,
    B,
    A,
    S,
}

impl Grade {
    /// All grades in ascending order.
    pub const ALL: [Grade; 5] = [Grade::D, Grade::C, Grade::B, Grade::A, Grade::S];

    /// Base gold price before random scaling.
    pub fn base_price(&self) -> u32 {
        match self {
            Grade::D => 20,
            Grade::C => 40,
            Grade::B => 60,
            Grade::A => 80,
            Grade::S => 120,
        }
    }

    /// Parse grade from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tower_shop_types::Grade;
    ///
    /// assert_eq!(Grade::from_str("s"), Some(Grade::S));
    /// assert_eq!(Grade::from_str("D"), Some(Grade::D));
    /// assert_eq!(Grade::from_str("E"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "d" => Some(Grade::D),
            "c" => Some(Grade::C),
            "b" => Some(Grade::B),
            "a" => Some(Grade::A),
            "s" => Some(Grade::S),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::D => "D",
            Grade::C => "C",
            Grade::B => "B",
            Grade::A => "A",
            Grade::S => "S",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The gameplay effect an item grants when used.
///
/// - **ArrowRate**: faster tower fire rate
/// - **Tornado**: area knock-back spell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerupKind {
    ArrowRate,
    Tornado,
}

impl PowerupKind {
    /// Every powerup a shop can roll. Generation picks uniformly from this list.
    pub const ALL: [PowerupKind; 2] = [PowerupKind::ArrowRate, PowerupKind::Tornado];

    /// Parse powerup kind from its camelCase identifier (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arrowrate" => Some(PowerupKind::ArrowRate),
            "tornado" => Some(PowerupKind::Tornado),
            _ => None,
        }
    }

    /// camelCase identifier, also used as the sprite key by presenters.
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerupKind::ArrowRate => "arrowRate",
            PowerupKind::Tornado => "tornado",
        }
    }
}

impl fmt::Display for PowerupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single key token that addresses one shop slot.
///
/// Always stored uppercase so `z` and `Z` address the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keybind(char);

impl Keybind {
    /// Build a keybind from a printable ASCII character.
    ///
    /// # Examples
    ///
    /// ```
    /// use tower_shop_types::Keybind;
    ///
    /// assert_eq!(Keybind::new('x').map(|k| k.as_char()), Some('X'));
    /// assert_eq!(Keybind::new('1').map(|k| k.as_char()), Some('1'));
    /// assert_eq!(Keybind::new(' '), None);
    /// assert_eq!(Keybind::new('é'), None);
    /// ```
    pub fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_graphic() {
            Some(Self(ch.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// Whether a pressed character addresses this keybind.
    pub fn matches(&self, ch: char) -> bool {
        ch.to_ascii_uppercase() == self.0
    }
}

impl fmt::Display for Keybind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Placement of a slot, handed through to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlotPosition {
    pub x: u16,
    pub y: u16,
}

impl SlotPosition {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Player-facing actions that can be applied to a shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    /// Try to buy the item in the slot bound to this key
    Buy(Keybind),
    /// Reset the player's gold and restock every slot
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds_cover_published_odds() {
        let mut prev = 0.0;
        let mut widths = Vec::new();
        for (bound, _) in GRADE_THRESHOLDS {
            widths.push(bound - prev);
            prev = bound;
        }
        widths.push(GRADE_ROLL_MAX - prev);
        assert_eq!(widths, vec![40.0, 30.0, 20.0, 8.0, 2.0]);
    }

    #[test]
    fn grade_thresholds_are_in_grade_order() {
        let grades: Vec<Grade> = GRADE_THRESHOLDS.iter().map(|(_, g)| *g).collect();
        assert_eq!(grades, Grade::ALL[..4].to_vec());
    }

    #[test]
    fn base_prices_grow_with_grade() {
        let prices: Vec<u32> = Grade::ALL.iter().map(|g| g.base_price()).collect();
        assert_eq!(prices, vec![20, 40, 60, 80, 120]);
    }

    #[test]
    fn powerup_round_trips_through_identifier() {
        for kind in PowerupKind::ALL {
            assert_eq!(PowerupKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PowerupKind::from_str("fireball"), None);
    }

    #[test]
    fn keybind_matches_either_case() {
        let k = Keybind::new('c').unwrap();
        assert!(k.matches('c'));
        assert!(k.matches('C'));
        assert!(!k.matches('x'));
        assert_eq!(k.to_string(), "C");
    }

    #[test]
    fn default_keybinds_are_valid() {
        for ch in DEFAULT_KEYBINDS {
            assert!(Keybind::new(ch).is_some());
        }
        assert!(DEFAULT_KEYBINDS.len() <= MAX_SLOTS);
    }
}
