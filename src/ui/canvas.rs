//! Drawing surfaces that decorations are written onto.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::error::{OverlayError, Result};

/// Where on a node a piece of decoration text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    /// Alarm count, top row.
    Alarm,
    /// Alert/event summary, second row.
    Event,
    /// Informational label, bottom row.
    Info,
}

impl TextSlot {
    /// Row for this slot on a surface `height` rows tall.
    pub fn row(self, height: u16) -> u16 {
        match self {
            TextSlot::Alarm => 0,
            TextSlot::Event => 1,
            TextSlot::Info => height.saturating_sub(1).max(2),
        }
    }
}

/// A caller-owned region that decoration text is written to.
///
/// Decorators only write; they never read a surface back.
pub trait DrawingSurface {
    /// Write `text` into `slot`, truncated to `max_width` columns.
    fn draw_text(&mut self, slot: TextSlot, text: &str, style: Style, max_width: u16)
        -> Result<()>;

    fn width(&self) -> u16;

    fn height(&self) -> u16;
}

/// Terminal-cell canvas for a single node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeCanvas {
    buffer: Buffer,
}

impl NodeCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, width, height)),
        }
    }

    /// The underlying cell buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Text content of one row, trailing blanks trimmed.
    pub fn row_text(&self, row: u16) -> String {
        let area = self.buffer.area;
        if row >= area.height {
            return String::new();
        }
        let line: String = (0..area.width)
            .map(|x| self.buffer[(x, row)].symbol())
            .collect();
        line.trim_end().to_string()
    }

    /// Every row as plain text.
    pub fn lines(&self) -> Vec<String> {
        (0..self.buffer.area.height).map(|row| self.row_text(row)).collect()
    }
}

impl DrawingSurface for NodeCanvas {
    fn draw_text(
        &mut self,
        slot: TextSlot,
        text: &str,
        style: Style,
        max_width: u16,
    ) -> Result<()> {
        let area = self.buffer.area;
        let row = slot.row(area.height);
        if row >= area.height {
            return Err(OverlayError::SurfaceTooSmall {
                slot,
                row,
                height: area.height,
            });
        }

        // Clear the row so a shorter label fully replaces a longer one
        for x in 0..area.width {
            self.buffer[(x, row)].reset();
        }

        let columns = max_width.min(area.width) as usize;
        self.buffer.set_stringn(0, row, text, columns, style);
        Ok(())
    }

    fn width(&self) -> u16 {
        self.buffer.area.width
    }

    fn height(&self) -> u16 {
        self.buffer.area.height
    }
}

impl Widget for &NodeCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let source = self.buffer.area;
        for y in 0..source.height.min(area.height) {
            for x in 0..source.width.min(area.width) {
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    *cell = self.buffer[(x, y)].clone();
                }
            }
        }
    }
}
