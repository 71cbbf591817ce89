//! Ranked entry list widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use dirscope_core::DirectoryView;

use crate::app::constants::EMPTY_VIEW_MESSAGE;
use crate::theme::Theme;
use crate::ui::{format_size, pad_left, pad_right, truncate_to_width, RowColumns, SizeBar};

/// One row per subdirectory: name, formatted size, and a bar relative to
/// the largest entry.
pub struct EntryList<'a> {
    view: &'a DirectoryView,
    selected: usize,
    offset: usize,
    theme: &'a Theme,
}

impl<'a> EntryList<'a> {
    /// Create a list over `view`, scrolled to `offset`.
    pub fn new(view: &'a DirectoryView, selected: usize, offset: usize, theme: &'a Theme) -> Self {
        Self {
            view,
            selected,
            offset,
            theme,
        }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.view.is_empty() {
            let message = Span::styled(EMPTY_VIEW_MESSAGE, Style::new().fg(self.theme.muted));
            Line::from(message).render(Rect::new(area.x, area.y, area.width, 1), buf);
            return;
        }

        let cols = RowColumns::new(area.width);
        let rows = usize::from(area.height);
        let end = self.offset.saturating_add(rows).min(self.view.len());

        for (row, index) in (self.offset..end).enumerate() {
            let Some(entry) = self.view.get(index) else {
                break;
            };
            let y = area.y + row as u16;
            let is_selected = index == self.selected;

            let name = truncate_to_width(entry.name(), usize::from(cols.name));
            let size = format_size(entry.size());

            let name_style = if is_selected {
                self.theme.selected
            } else {
                self.theme.directory
            };
            let size_style = if is_selected {
                self.theme.selected
            } else {
                Style::new().fg(self.theme.foreground)
            };

            let mut spans = Vec::with_capacity(3);
            if cols.name > 0 {
                spans.push(Span::styled(pad_right(&name, usize::from(cols.name)), name_style));
                spans.push(Span::styled(" ", name_style));
            }
            spans.push(Span::styled(pad_left(&size, usize::from(cols.size)), size_style));

            // Name, size, and the gap before the bar
            let text_width = area.width - cols.bar;
            Line::from(spans).render(Rect::new(area.x, y, text_width, 1), buf);

            if cols.bar > 0 {
                let ratio = self.view.ratio(index);
                let bar = SizeBar::new(ratio)
                    .filled_style(self.theme.size_bar_style(ratio))
                    .empty_style(Style::new().fg(self.theme.muted));
                let bar_area = Rect::new(area.x + text_width, y, cols.bar, 1);
                bar.render(bar_area, buf);
            }
        }
    }
}
