//! Terminal input module (shop-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key presses onto
//! [`crate::types::ShopAction`] values using the shop's configured keybinds.

pub mod map;

pub use tower_shop_types as types;

pub use map::{action_for_key, should_quit};
