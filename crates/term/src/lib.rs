//! Terminal presentation layer for the shop.
//!
//! This is the rendering collaborator the core talks to through
//! [`core::SlotPresenter`]. It renders into a simple framebuffer that is then
//! flushed to a terminal backend.
//!
//! - [`scene::TermScene`] keeps the live item visuals slots asked for
//! - [`shop_view::ShopView`] draws slots, prices and gold into a framebuffer
//! - [`renderer::TerminalRenderer`] owns raw mode and rewrites damaged rows

pub mod fb;
pub mod renderer;
pub mod scene;
pub mod shop_view;

pub use tower_shop_core as core;
pub use tower_shop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{damaged_rows, encode_all_rows, encode_damaged_rows, TerminalRenderer};
pub use scene::{powerup_glyph, ItemVisual, TermScene};
pub use shop_view::{ShopView, Viewport, LAYOUT_HEIGHT, SLOT_BOX_H, SLOT_BOX_W};
