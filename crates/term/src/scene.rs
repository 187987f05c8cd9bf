//! TermScene: the terminal presentation collaborator.
//!
//! Slots ask the scene to show or hide item visuals; the scene just keeps a
//! table of what is live. [`crate::ShopView`] reads that table when drawing.

use crate::core::{Item, SlotPresenter, VisualId};
use crate::types::{Grade, Keybind, PowerupKind, SlotPosition};

/// What the terminal draws for one item on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemVisual {
    pub id: VisualId,
    pub position: SlotPosition,
    pub keybind: Keybind,
    pub glyph: char,
    pub grade: Grade,
    pub price: u32,
}

#[derive(Debug, Clone, Default)]
pub struct TermScene {
    visuals: Vec<ItemVisual>,
    next_id: u32,
}

impl TermScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: VisualId) -> Option<&ItemVisual> {
        self.visuals.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }
}

impl SlotPresenter for TermScene {
    fn show_item(&mut self, position: SlotPosition, keybind: Keybind, item: &Item) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.visuals.push(ItemVisual {
            id,
            position,
            keybind,
            glyph: powerup_glyph(item.powerup()),
            grade: item.grade(),
            price: item.cost(),
        });
        id
    }

    fn hide(&mut self, visual: VisualId) {
        self.visuals.retain(|v| v.id != visual);
    }
}

/// Sprite stand-in for each powerup.
pub fn powerup_glyph(kind: PowerupKind) -> char {
    match kind {
        PowerupKind::ArrowRate => '»',
        PowerupKind::Tornado => '@',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_hide_round_trip() {
        let mut scene = TermScene::new();
        let item = Item::new(PowerupKind::Tornado, Grade::B, 55);
        let key = Keybind::new('z').unwrap();

        let id = scene.show_item(SlotPosition::new(1, 0), key, &item);
        let v = scene.get(id).copied().unwrap();
        assert_eq!(v.glyph, '@');
        assert_eq!(v.price, 55);
        assert_eq!(v.grade, Grade::B);
        assert_eq!(v.position, SlotPosition::new(1, 0));

        scene.hide(id);
        assert!(scene.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut scene = TermScene::new();
        let item = Item::new(PowerupKind::ArrowRate, Grade::D, 15);
        let key = Keybind::new('x').unwrap();
        let a = scene.show_item(SlotPosition::default(), key, &item);
        let b = scene.show_item(SlotPosition::default(), key, &item);
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
    }
}
