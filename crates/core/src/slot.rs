//! A single shop slot: one keybind, at most one item on offer.

use tracing::{debug, info};

use crate::buyer::Buyer;
use crate::generator::generate_item;
use crate::item::Item;
use crate::presenter::{SlotPresenter, VisualId};
use crate::rng::RandomSource;
use crate::types::{Keybind, SlotPosition};

/// Outcome of checking whether a buyer could purchase from a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseCheck {
    Affordable,
    InsufficientGold { missing: u32 },
    Empty,
}

impl PurchaseCheck {
    pub fn is_affordable(&self) -> bool {
        matches!(self, PurchaseCheck::Affordable)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopSlot {
    keybind: Keybind,
    position: SlotPosition,
    current_item: Option<Item>,
    visual: Option<VisualId>,
}

impl ShopSlot {
    /// Create an empty slot.
    pub fn new(keybind: Keybind, position: SlotPosition) -> Self {
        Self {
            keybind,
            position,
            current_item: None,
            visual: None,
        }
    }

    pub fn keybind(&self) -> Keybind {
        self.keybind
    }

    pub fn position(&self) -> SlotPosition {
        self.position
    }

    pub fn item(&self) -> Option<&Item> {
        self.current_item.as_ref()
    }

    /// Handle of the visual currently shown for this slot, if any.
    pub fn visual(&self) -> Option<VisualId> {
        self.visual
    }

    /// Put an item on offer, generating one when `item` is `None`.
    ///
    /// Any previous item is replaced and its visual destroyed.
    pub fn add_item<R, P>(&mut self, item: Option<Item>, rng: &mut R, presenter: &mut P)
    where
        R: RandomSource + ?Sized,
        P: SlotPresenter + ?Sized,
    {
        let item = item.unwrap_or_else(|| generate_item(rng));
        self.clear(presenter);
        self.visual = Some(presenter.show_item(self.position, self.keybind, &item));
        self.current_item = Some(item);
    }

    /// Check a purchase without changing anything.
    pub fn check_purchase<B: Buyer + ?Sized>(&self, buyer: &B) -> PurchaseCheck {
        match self.current_item {
            None => PurchaseCheck::Empty,
            Some(item) if buyer.current_gold() >= item.cost() => PurchaseCheck::Affordable,
            Some(item) => PurchaseCheck::InsufficientGold {
                missing: item.cost() - buyer.current_gold(),
            },
        }
    }

    /// Sell the current item to `buyer`.
    ///
    /// On success the buyer is charged, the slot is restocked with a freshly
    /// generated item and the bought item is returned. Otherwise nothing
    /// changes and `None` is returned.
    pub fn buy_item<B, R, P>(&mut self, buyer: &mut B, rng: &mut R, presenter: &mut P) -> Option<Item>
    where
        B: Buyer + ?Sized,
        R: RandomSource + ?Sized,
        P: SlotPresenter + ?Sized,
    {
        let check = self.check_purchase(buyer);
        if !check.is_affordable() {
            debug!(keybind = %self.keybind, ?check, gold = buyer.current_gold(), "purchase rejected");
            return None;
        }

        // Clear before restocking so the slot never holds two items.
        let bought = self.take(presenter)?;
        *buyer.current_gold_mut() -= bought.cost();
        self.add_item(None, rng, presenter);

        info!(
            keybind = %self.keybind,
            grade = %bought.grade(),
            powerup = %bought.powerup(),
            cost = bought.cost(),
            gold_left = buyer.current_gold(),
            "item purchased"
        );
        Some(bought)
    }

    /// Withdraw the current offer without restocking.
    pub fn remove_item<P: SlotPresenter + ?Sized>(&mut self, presenter: &mut P) {
        self.clear(presenter);
    }

    fn take<P: SlotPresenter + ?Sized>(&mut self, presenter: &mut P) -> Option<Item> {
        if let Some(visual) = self.visual.take() {
            presenter.hide(visual);
        }
        self.current_item.take()
    }

    fn clear<P: SlotPresenter + ?Sized>(&mut self, presenter: &mut P) {
        let _ = self.take(presenter);
    }
}
