//! Size bar widget for visualizing relative sizes.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

/// A horizontal bar showing an entry's size relative to the largest one.
pub struct SizeBar {
    /// Value to display (0.0 - 1.0).
    ratio: f64,
    /// Style for filled portion.
    filled_style: Style,
    /// Style for empty portion.
    empty_style: Style,
}

impl SizeBar {
    const FILLED: char = '█';
    const EMPTY: char = '░';

    /// Create a new size bar.
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 },
            filled_style: Style::default(),
            empty_style: Style::default(),
        }
    }

    /// Set the style for the filled portion.
    pub fn filled_style(mut self, style: Style) -> Self {
        self.filled_style = style;
        self
    }

    /// Set the style for the empty portion.
    pub fn empty_style(mut self, style: Style) -> Self {
        self.empty_style = style;
        self
    }

    /// Number of filled cells for a bar `width` cells wide.
    ///
    /// Rounds down, but any non-zero ratio fills at least one cell.
    pub fn filled_cells(ratio: f64, width: u16) -> u16 {
        if width == 0 || !(ratio > 0.0) {
            return 0;
        }
        let cells = (f64::from(width) * ratio.min(1.0)).floor() as u16;
        cells.clamp(1, width)
    }
}

impl Widget for SizeBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let filled_width = Self::filled_cells(self.ratio, area.width);

        for x in 0..area.width {
            let (symbol, style) = if x < filled_width {
                (Self::FILLED, self.filled_style)
            } else {
                (Self::EMPTY, self.empty_style)
            };

            buf[(area.x + x, area.y)].set_char(symbol).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    fn render(ratio: f64, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        SizeBar::new(ratio).render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_size_bar_empty() {
        assert_eq!(render(0.0, 10), "░".repeat(10));
    }

    #[test]
    fn test_size_bar_full() {
        assert_eq!(render(1.0, 10), "█".repeat(10));
    }

    #[test]
    fn test_size_bar_half() {
        assert_eq!(render(0.5, 10), format!("{}{}", "█".repeat(5), "░".repeat(5)));
    }

    #[test]
    fn test_size_bar_rounds_down() {
        // 0.29 of 10 cells is 2.9 cells
        assert_eq!(render(0.29, 10), format!("{}{}", "█".repeat(2), "░".repeat(8)));
    }

    #[test]
    fn test_tiny_ratio_still_visible() {
        assert_eq!(SizeBar::filled_cells(0.0001, 40), 1);
        assert_eq!(render(0.0001, 5), format!("█{}", "░".repeat(4)));
    }

    #[test]
    fn test_filled_cells_bounds() {
        assert_eq!(SizeBar::filled_cells(0.5, 0), 0);
        assert_eq!(SizeBar::filled_cells(f64::NAN, 10), 0);
        assert_eq!(SizeBar::filled_cells(2.0, 10), 10);
    }
}
