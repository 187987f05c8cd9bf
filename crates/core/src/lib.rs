//! Core shop logic module - pure, deterministic, and testable
//!
//! This module contains all the shop rules: item generation, per-slot purchase
//! state and gold-gated buying. It has **no dependency** on rendering, input
//! or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical item sequences
//! - **Testable**: Randomness and presentation are injected collaborators
//! - **Portable**: Can drive a terminal view, a game engine, or nothing at all
//!
//! # Module Structure
//!
//! - [`item`]: Immutable purchasable item (powerup, grade, cost)
//! - [`generator`]: Grade roll and cost scaling for random items
//! - [`slot`]: One keybind-addressed slot and its purchase rules
//! - [`shop`]: A row of slots sharing an RNG and a presenter
//! - [`buyer`]: The `Buyer` contract and the `Player` that implements it
//! - [`presenter`]: The seam to the rendering collaborator
//! - [`rng`]: Injectable random sources (seeded LCG, scripted replay)
//! - [`snapshot`]: Plain copy of shop state for views
//!
//! # Purchase Rules
//!
//! - A purchase succeeds only when the slot holds an item and the buyer has at
//!   least its cost in gold
//! - On success the buyer pays exactly the item's cost and the slot is
//!   restocked with a freshly generated item before the call returns
//! - On failure nothing changes; the caller just gets `None`
//!
//! # Example
//!
//! ```
//! use tower_shop_core::{Buyer, Item, NullPresenter, Player, Shop, SimpleRng};
//! use tower_shop_types::{Grade, Keybind, PowerupKind};
//!
//! let z = Keybind::new('z').unwrap();
//! let mut shop = Shop::new(&[z], SimpleRng::new(12345), NullPresenter::new());
//! shop.add_item(z, Some(Item::new(PowerupKind::Tornado, Grade::D, 15)));
//!
//! let mut player = Player::new(20);
//! let bought = shop.buy(z, &mut player);
//!
//! assert_eq!(bought.map(|i| i.cost()), Some(15));
//! assert_eq!(player.current_gold(), 5);
//! assert!(shop.item(z).is_some()); // restocked
//! ```

pub mod buyer;
pub mod generator;
pub mod item;
pub mod presenter;
pub mod rng;
pub mod shop;
pub mod slot;
pub mod snapshot;

pub use tower_shop_types as types;

// Re-export commonly used types for convenience
pub use buyer::{Buyer, Player};
pub use generator::{cost_for, generate_item, grade_for_roll};
pub use item::Item;
pub use presenter::{NullPresenter, SlotPresenter, VisualId};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use shop::Shop;
pub use slot::{PurchaseCheck, ShopSlot};
pub use snapshot::{ShopSnapshot, SlotSnapshot};
