//! Region geometry for the three screen areas.
//!
//! ```text
//! ┌──────────────────────────────┐  row 0
//! │  text area (cols - 4 wide)   │
//! │                              │
//! └──────────────────────────────┘  row rows - 2
//!   > status / input bar            row rows - 1
//! ```

use ratatui::layout::Rect;

/// Height of the status / input bar.
pub const STATUS_HEIGHT: u16 = 1;
/// Border (1) plus inner margin (1) on each side of the text area.
pub const TEXT_MARGIN_X: u16 = 2;
/// Top border.
pub const TEXT_MARGIN_Y: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub outer_rows: u16,
    pub outer_cols: u16,
    pub text_rows: u16,
    pub text_cols: u16,
    pub status_row: u16,
    pub status_cols: u16,
}

impl Geometry {
    /// Compute the layout for a terminal of `rows` x `cols` cells.
    /// Tiny terminals collapse regions to zero size instead of underflowing.
    pub fn compute(rows: u16, cols: u16) -> Self {
        let outer_rows = rows.saturating_sub(STATUS_HEIGHT);
        Self {
            outer_rows,
            outer_cols: cols,
            text_rows: outer_rows.saturating_sub(TEXT_MARGIN_Y * 2),
            text_cols: cols.saturating_sub(TEXT_MARGIN_X * 2),
            status_row: outer_rows,
            status_cols: cols.saturating_sub(TEXT_MARGIN_X * 2),
        }
    }

    /// The bordered pane.
    pub fn outer(&self) -> Rect {
        Rect::new(0, 0, self.outer_cols, self.outer_rows)
    }

    /// The writable area inside the border and margin.
    pub fn text(&self) -> Rect {
        Rect::new(TEXT_MARGIN_X, TEXT_MARGIN_Y, self.text_cols, self.text_rows)
    }

    pub fn status(&self) -> Rect {
        let height = if self.outer_cols == 0 { 0 } else { STATUS_HEIGHT };
        Rect::new(TEXT_MARGIN_X, self.status_row, self.status_cols, height)
    }
}
