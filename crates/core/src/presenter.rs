//! Seam between shop logic and whatever draws it.
//!
//! Slots never own renderable state. They ask a [`SlotPresenter`] to create a
//! visual for an item and keep only the returned [`VisualId`], then hand that
//! id back when the visual should go away.

use crate::item::Item;
use crate::types::{Keybind, SlotPosition};

/// Opaque handle to a visual owned by a presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualId(pub u32);

/// Presentation collaborator driven by shop slots.
pub trait SlotPresenter {
    /// Create the visual for `item` (sprite plus price label) at a slot.
    fn show_item(&mut self, position: SlotPosition, keybind: Keybind, item: &Item) -> VisualId;

    /// Destroy a visual previously returned by [`SlotPresenter::show_item`].
    fn hide(&mut self, visual: VisualId);
}

impl<P: SlotPresenter + ?Sized> SlotPresenter for &mut P {
    fn show_item(&mut self, position: SlotPosition, keybind: Keybind, item: &Item) -> VisualId {
        (**self).show_item(position, keybind, item)
    }

    fn hide(&mut self, visual: VisualId) {
        (**self).hide(visual)
    }
}

/// Presenter that draws nothing. Handy for headless simulation.
#[derive(Debug, Clone, Default)]
pub struct NullPresenter {
    next_id: u32,
}

impl NullPresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotPresenter for NullPresenter {
    fn show_item(&mut self, _position: SlotPosition, _keybind: Keybind, _item: &Item) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    fn hide(&mut self, _visual: VisualId) {}
}
