//! Per-frame copies of shop state for views.
//!
//! Views draw from a snapshot instead of borrowing the shop. `snapshot_into`
//! refills one in place each frame.

use arrayvec::ArrayVec;

use crate::item::Item;
use crate::presenter::VisualId;
use crate::slot::PurchaseCheck;
use crate::types::{Keybind, SlotPosition, MAX_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSnapshot {
    pub keybind: Keybind,
    pub position: SlotPosition,
    pub item: Option<Item>,
    pub visual: Option<VisualId>,
    pub check: PurchaseCheck,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShopSnapshot {
    pub slots: ArrayVec<SlotSnapshot, MAX_SLOTS>,
    pub gold: u32,
    pub gold_per_second: u32,
    pub inventory_len: u32,
}

impl ShopSnapshot {
    pub fn clear(&mut self) {
        self.slots.clear();
        self.gold = 0;
        self.gold_per_second = 0;
        self.inventory_len = 0;
    }
}
