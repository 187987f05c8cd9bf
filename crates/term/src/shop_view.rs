//! ShopView: maps a `core::ShopSnapshot` and the scene's visuals into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ShopSnapshot, SlotSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::scene::{ItemVisual, TermScene};
use crate::types::Grade;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows used by the whole layout: title, gap, boxes, keybinds, gap, status, hint.
pub const LAYOUT_HEIGHT: u16 = 2 + SLOT_BOX_H + 1 + 1 + 2;

pub const SLOT_BOX_W: u16 = 9;
pub const SLOT_BOX_H: u16 = 5;

const TITLE: &str = "TOWER SHOP";

/// A lightweight terminal renderer for the shop.
pub struct ShopView {
    /// Columns between neighbouring slot boxes.
    gap: u16,
}

impl Default for ShopView {
    fn default() -> Self {
        Self { gap: 2 }
    }
}

impl ShopView {
    /// Width of the slot row for `slots` slots.
    pub fn row_width(&self, slots: u16) -> u16 {
        if slots == 0 {
            return 0;
        }
        slots * SLOT_BOX_W + (slots - 1) * self.gap
    }

    /// Render into an existing framebuffer. Reuse it across frames.
    pub fn render_into(
        &self,
        snap: &ShopSnapshot,
        scene: &TermScene,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let row_w = self.row_width(snap.slots.len() as u16);
        let start_x = viewport.width.saturating_sub(row_w) / 2;
        let start_y = viewport.height.saturating_sub(LAYOUT_HEIGHT) / 2;

        let title_x = viewport.width.saturating_sub(TITLE.len() as u16) / 2;
        fb.put_str(title_x, start_y, TITLE, CellStyle::fg(Rgb::new(240, 200, 80)).bold());

        let box_y = start_y + 2;
        for slot in &snap.slots {
            let bx = start_x + slot.position.x * (SLOT_BOX_W + self.gap);
            let visual = slot.visual.and_then(|id| scene.get(id));
            self.draw_slot(fb, bx, box_y, slot, visual);
        }

        let status_y = box_y + SLOT_BOX_H + 2;
        self.draw_status(fb, start_x, status_y, snap);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &ShopSnapshot, scene: &TermScene, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, scene, viewport, &mut fb);
        fb
    }

    fn draw_slot(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        slot: &SlotSnapshot,
        visual: Option<&ItemVisual>,
    ) {
        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        self.draw_border(fb, x, y, SLOT_BOX_W, SLOT_BOX_H, border);

        let mid_x = x + SLOT_BOX_W / 2;
        match visual {
            Some(v) => {
                let gold = CellStyle::fg(Rgb::new(240, 200, 80));
                let price = if slot.check.is_affordable() {
                    gold.bold()
                } else {
                    gold.dim()
                };
                let end = fb.put_u32(x + 2, y + 1, v.price, price);
                fb.put_char(end, y + 1, 'g', price);

                fb.put_char(mid_x, y + 2, v.glyph, CellStyle::fg(Rgb::new(255, 255, 255)).bold());
                fb.put_str(mid_x, y + 3, v.grade.as_str(), CellStyle::fg(grade_color(v.grade)));
            }
            None => {
                let empty = CellStyle::fg(Rgb::new(120, 120, 120)).dim();
                fb.put_str(x + 2, y + 2, "EMPTY", empty);
            }
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let lx = mid_x - 1;
        fb.put_char(lx, y + SLOT_BOX_H, '[', label);
        fb.put_char(lx + 1, y + SLOT_BOX_H, slot.keybind.as_char(), label);
        fb.put_char(lx + 2, y + SLOT_BOX_H, ']', label);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, x: u16, y: u16, snap: &ShopSnapshot) {
        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut cx = fb.put_str(x, y, "GOLD ", label);
        cx = fb.put_u32(cx, y, snap.gold, value);
        if snap.gold_per_second > 0 {
            cx = fb.put_str(cx, y, " +", value);
            cx = fb.put_u32(cx, y, snap.gold_per_second, value);
            cx = fb.put_str(cx, y, "/s", value);
        }
        cx = fb.put_str(cx, y, "  ITEMS ", label);
        fb.put_u32(cx, y, snap.inventory_len, value);

        let hint = CellStyle::fg(Rgb::new(140, 140, 140)).dim();
        let mut cx = x;
        for (i, slot) in snap.slots.iter().enumerate() {
            if i > 0 {
                cx = fb.put_str(cx, y + 1, "/", hint);
            }
            fb.put_char(cx, y + 1, slot.keybind.as_char(), hint);
            cx += 1;
        }
        fb.put_str(cx, y + 1, " buy  R restart  Q quit", hint);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

fn grade_color(grade: Grade) -> Rgb {
    match grade {
        Grade::D => Rgb::new(160, 160, 160),
        Grade::C => Rgb::new(100, 220, 120),
        Grade::B => Rgb::new(80, 140, 240),
        Grade::A => Rgb::new(200, 120, 220),
        Grade::S => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_width_accounts_for_gaps() {
        let view = ShopView::default();
        assert_eq!(view.row_width(0), 0);
        assert_eq!(view.row_width(1), 9);
        assert_eq!(view.row_width(3), 31);
    }

    #[test]
    fn grades_have_distinct_colors() {
        for (i, a) in Grade::ALL.iter().enumerate() {
            for b in &Grade::ALL[i + 1..] {
                assert_ne!(grade_color(*a), grade_color(*b));
            }
        }
    }
}
