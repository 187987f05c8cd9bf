//! TerminalRenderer: puts shop frames on a real terminal.
//!
//! Frames are compared row by row against the one already on screen. Only
//! damaged rows are rewritten, so a purchase repaints the slot rows and the
//! status line while the title, borders and keybind labels stay put. The
//! first frame and any frame after a resize repaint every row.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            scratch: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.scratch.clear();
        self.scratch.queue(terminal::EnterAlternateScreen)?;
        self.scratch.queue(cursor::Hide)?;
        self.scratch.queue(terminal::DisableLineWrap)?;
        self.flush_scratch()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        self.scratch.queue(ResetColor)?;
        self.scratch.queue(SetAttribute(Attribute::Reset))?;
        self.scratch.queue(terminal::EnableLineWrap)?;
        self.scratch.queue(cursor::Show)?;
        self.scratch.queue(terminal::LeaveAlternateScreen)?;
        self.flush_scratch()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen; the next frame repaints every row.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `frame` and return how many rows were written.
    ///
    /// `frame` is kept as the new on-screen state and the previous one is
    /// handed back through the same reference, so a caller that redraws into
    /// it every frame never allocates.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<u16> {
        self.scratch.clear();
        let rows = match &self.shown {
            Some(prev) if same_size(prev, frame) => encode_damaged_rows(prev, frame, &mut self.scratch)?,
            _ => encode_all_rows(frame, &mut self.scratch)?,
        };
        if rows > 0 {
            self.flush_scratch()?;
        }

        let previous = self.shown.take().unwrap_or_else(|| FrameBuffer::new(0, 0));
        self.shown = Some(std::mem::replace(frame, previous));
        Ok(rows)
    }

    fn flush_scratch(&mut self) -> Result<()> {
        self.stdout.write_all(&self.scratch)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Rows of `next` that differ from `prev`. Both must be the same size.
pub fn damaged_rows<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> impl Iterator<Item = u16> + 'a {
    (0..next.height()).filter(move |&y| prev.row(y) != next.row(y))
}

/// Clear the screen and encode every row of `frame` into `out`.
pub fn encode_all_rows(frame: &FrameBuffer, out: &mut Vec<u8>) -> Result<u16> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..frame.height() {
        encode_row(frame, y, &mut style, out)?;
    }
    finish(out)?;
    Ok(frame.height())
}

/// Encode only the rows of `next` that changed since `prev`.
pub fn encode_damaged_rows(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<u16> {
    let mut style = None;
    let mut rows = 0;
    for y in damaged_rows(prev, next) {
        encode_row(next, y, &mut style, out)?;
        rows += 1;
    }
    if rows > 0 {
        finish(out)?;
    }
    Ok(rows)
}

fn encode_row(
    frame: &FrameBuffer,
    y: u16,
    style: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(cursor::MoveTo(0, y))?;
    for cell in frame.row(y) {
        if *style != Some(cell.style) {
            set_style(out, cell.style)?;
            *style = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
