//! A row of keybind-addressed slots sharing one RNG and one presenter.

use arrayvec::ArrayVec;
use tracing::{info, warn};

use crate::buyer::{Buyer, Player};
use crate::item::Item;
use crate::presenter::SlotPresenter;
use crate::rng::RandomSource;
use crate::slot::{PurchaseCheck, ShopSlot};
use crate::snapshot::{ShopSnapshot, SlotSnapshot};
use crate::types::{Keybind, ShopAction, SlotPosition, MAX_SLOTS};

/// Horizontal distance between neighbouring slots.
pub const SLOT_SPACING: u16 = 1;

/// Shop state: the slots plus the collaborators they call into.
#[derive(Debug)]
pub struct Shop<R, P> {
    slots: ArrayVec<ShopSlot, MAX_SLOTS>,
    rng: R,
    presenter: P,
}

impl<R: RandomSource, P: SlotPresenter> Shop<R, P> {
    /// Build one empty slot per keybind, laid out left to right.
    ///
    /// Duplicate keybinds and anything past [`MAX_SLOTS`] are skipped.
    pub fn new(keybinds: &[Keybind], rng: R, presenter: P) -> Self {
        let mut slots: ArrayVec<ShopSlot, MAX_SLOTS> = ArrayVec::new();
        for &keybind in keybinds {
            if slots.iter().any(|s| s.keybind() == keybind) {
                warn!(%keybind, "duplicate shop keybind skipped");
                continue;
            }
            let position = SlotPosition::new(slots.len() as u16 * SLOT_SPACING, 0);
            if slots.try_push(ShopSlot::new(keybind, position)).is_err() {
                warn!(%keybind, max = MAX_SLOTS, "shop is full, keybind skipped");
            }
        }
        Self {
            slots,
            rng,
            presenter,
        }
    }

    /// Fill every slot with a freshly generated item.
    pub fn stock_all(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.add_item(None, &mut self.rng, &mut self.presenter);
        }
        info!(slots = self.slots.len(), "shop stocked");
    }

    pub fn slots(&self) -> &[ShopSlot] {
        &self.slots
    }

    pub fn slot(&self, keybind: Keybind) -> Option<&ShopSlot> {
        self.slots.iter().find(|s| s.keybind() == keybind)
    }

    pub fn item(&self, keybind: Keybind) -> Option<&Item> {
        self.slot(keybind).and_then(ShopSlot::item)
    }

    pub fn keybinds(&self) -> impl Iterator<Item = Keybind> + '_ {
        self.slots.iter().map(ShopSlot::keybind)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Put an item in the slot bound to `keybind`, generating one if `None`.
    ///
    /// Returns `false` if no slot uses that keybind.
    pub fn add_item(&mut self, keybind: Keybind, item: Option<Item>) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|s| s.keybind() == keybind) else {
            return false;
        };
        slot.add_item(item, &mut self.rng, &mut self.presenter);
        true
    }

    /// Try to buy from the slot bound to `keybind`.
    pub fn buy<B: Buyer + ?Sized>(&mut self, keybind: Keybind, buyer: &mut B) -> Option<Item> {
        let slot = self.slots.iter_mut().find(|s| s.keybind() == keybind)?;
        slot.buy_item(buyer, &mut self.rng, &mut self.presenter)
    }

    /// Withdraw the offer in the slot bound to `keybind`. Returns `false` if
    /// no slot uses that keybind.
    pub fn remove_item(&mut self, keybind: Keybind) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|s| s.keybind() == keybind) else {
            return false;
        };
        slot.remove_item(&mut self.presenter);
        true
    }

    /// Unknown keybinds report [`PurchaseCheck::Empty`].
    pub fn check_purchase<B: Buyer + ?Sized>(&self, keybind: Keybind, buyer: &B) -> PurchaseCheck {
        self.slot(keybind)
            .map(|s| s.check_purchase(buyer))
            .unwrap_or(PurchaseCheck::Empty)
    }

    /// Apply a player action.
    ///
    /// Bought items go straight into the player's inventory; the return value
    /// is a copy for the caller's feedback. `Restart` only restocks: gold is
    /// never touched here except by a purchase, so resetting the player is
    /// up to the host (see [`Player::reset`]).
    pub fn apply(&mut self, action: ShopAction, player: &mut Player) -> Option<Item> {
        match action {
            ShopAction::Buy(keybind) => {
                let item = self.buy(keybind, player)?;
                player.receive(item);
                Some(item)
            }
            ShopAction::Restart => {
                self.stock_all();
                None
            }
        }
    }

    /// Copy out everything a view needs to draw the shop for `player`.
    pub fn snapshot(&self, player: &Player) -> ShopSnapshot {
        let mut snap = ShopSnapshot::default();
        self.snapshot_into(player, &mut snap);
        snap
    }

    /// Allocation-free variant of [`Shop::snapshot`].
    pub fn snapshot_into(&self, player: &Player, snap: &mut ShopSnapshot) {
        snap.clear();
        snap.gold = player.current_gold();
        snap.gold_per_second = player.gold_per_second();
        snap.inventory_len = player.inventory().len() as u32;
        for slot in &self.slots {
            snap.slots.push(SlotSnapshot {
                keybind: slot.keybind(),
                position: slot.position(),
                item: slot.item().copied(),
                visual: slot.visual(),
                check: slot.check_purchase(player),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::NullPresenter;
    use crate::rng::SimpleRng;
    use crate::types::{Grade, PowerupKind};

    fn keys(chars: &[char]) -> Vec<Keybind> {
        chars.iter().filter_map(|c| Keybind::new(*c)).collect()
    }

    fn shop(chars: &[char]) -> Shop<SimpleRng, NullPresenter> {
        Shop::new(&keys(chars), SimpleRng::new(42), NullPresenter::new())
    }

    #[test]
    fn slots_follow_keybind_order() {
        let shop = shop(&['z', 'x', 'c']);
        let order: String = shop.keybinds().map(|k| k.as_char()).collect();
        assert_eq!(order, "ZXC");
        assert_eq!(shop.slots()[2].position(), SlotPosition::new(2, 0));
    }

    #[test]
    fn duplicate_keybinds_are_skipped() {
        let shop = shop(&['z', 'Z', 'x']);
        assert_eq!(shop.slots().len(), 2);
    }

    #[test]
    fn slot_count_is_capped() {
        let shop = shop(&['1', '2', '3', '4', '5', '6', '7', '8', '9']);
        assert_eq!(shop.slots().len(), MAX_SLOTS);
    }

    #[test]
    fn stock_all_fills_every_slot() {
        let mut shop = shop(&['z', 'x', 'c']);
        assert!(shop.slots().iter().all(|s| s.item().is_none()));
        shop.stock_all();
        assert!(shop.slots().iter().all(|s| s.item().is_some()));
    }

    #[test]
    fn unknown_keybind_is_a_no_op() {
        let mut shop = shop(&['z']);
        shop.stock_all();
        let q = Keybind::new('q').unwrap();
        let mut player = Player::new(1000);

        assert!(!shop.add_item(q, None));
        assert!(!shop.remove_item(q));
        assert_eq!(shop.buy(q, &mut player), None);
        assert_eq!(shop.check_purchase(q, &player), PurchaseCheck::Empty);
        assert_eq!(player.current_gold(), 1000);
    }

    #[test]
    fn apply_buy_moves_item_to_inventory() {
        let mut shop = shop(&['z']);
        let z = Keybind::new('z').unwrap();
        let item = Item::new(PowerupKind::ArrowRate, Grade::B, 60);
        shop.add_item(z, Some(item));

        let mut player = Player::new(100);
        assert_eq!(shop.apply(ShopAction::Buy(z), &mut player), Some(item));
        assert_eq!(player.current_gold(), 40);
        assert_eq!(player.inventory(), &[item]);
        assert!(shop.item(z).is_some());
    }

    #[test]
    fn apply_restart_restocks_without_touching_gold() {
        let mut shop = shop(&['z', 'x']);
        let z = Keybind::new('z').unwrap();
        shop.remove_item(z);

        let item = Item::new(PowerupKind::Tornado, Grade::D, 15);
        let mut player = Player::new(3).with_income(7);
        player.receive(item);

        assert_eq!(shop.apply(ShopAction::Restart, &mut player), None);
        assert_eq!(player.current_gold(), 3);
        assert_eq!(player.inventory(), &[item]);
        assert!(shop.item(z).is_some());
    }

    #[test]
    fn snapshot_reports_affordability() {
        let mut shop = shop(&['z', 'x']);
        let z = Keybind::new('z').unwrap();
        let x = Keybind::new('x').unwrap();
        shop.add_item(z, Some(Item::new(PowerupKind::Tornado, Grade::D, 15)));
        shop.add_item(x, Some(Item::new(PowerupKind::Tornado, Grade::S, 120)));

        let player = Player::new(20);
        let snap = shop.snapshot(&player);
        assert_eq!(snap.gold, 20);
        assert_eq!(snap.slots.len(), 2);
        assert_eq!(snap.slots[0].check, PurchaseCheck::Affordable);
        assert_eq!(
            snap.slots[1].check,
            PurchaseCheck::InsufficientGold { missing: 100 }
        );
    }
}
