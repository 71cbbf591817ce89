//! UI components and widgets.

mod entry_list;
mod size_bar;

pub use entry_list::EntryList;
pub use size_bar::SizeBar;

pub use dirscope_core::format_size;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::constants::{
    FOOTER_HEIGHT, HEADER_HEIGHT, MIN_BAR_WIDTH, NAME_COLUMN_WIDTH, SIZE_COLUMN_WIDTH,
};

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub list: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        let [header, list, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        Self {
            header,
            list,
            footer,
        }
    }

    /// Entry rows that fit in the list area.
    pub fn visible_rows(&self) -> usize {
        usize::from(self.list.height)
    }
}

/// Column widths for one entry row: name, gap, size, gap, bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowColumns {
    pub name: u16,
    pub size: u16,
    pub bar: u16,
}

impl RowColumns {
    /// Split a row `width` cells wide.
    ///
    /// The name column is capped at [`NAME_COLUMN_WIDTH`] and shrinks first
    /// on narrow terminals; the bar takes whatever is left.
    pub fn new(width: u16) -> Self {
        let fixed = SIZE_COLUMN_WIDTH + 2;
        let name = width
            .saturating_sub(fixed + MIN_BAR_WIDTH)
            .min(NAME_COLUMN_WIDTH);
        let size = SIZE_COLUMN_WIDTH.min(width.saturating_sub(name + 1));
        let bar = width.saturating_sub(name + fixed);

        Self { name, size, bar }
    }
}

/// Cut `text` to at most `width` terminal cells, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Right-align `text` in a field `width` cells wide.
pub fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(pad))
}

/// Left-align `text` in a field `width` cells wide.
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(pad))
}
