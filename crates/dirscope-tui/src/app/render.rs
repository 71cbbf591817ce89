//! Application rendering.

use std::path::Path;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

use dirscope_core::DirectoryView;

use crate::event::get_key_hints;
use crate::theme::Theme;
use crate::ui::{format_size, AppLayout, EntryList};

/// Everything one frame needs.
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub path: &'a Path,
    pub view: &'a DirectoryView,
    pub selected: usize,
    pub offset: usize,
    pub banner: Option<&'a str>,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::default().fg(ctx.theme.foreground));

    let layout = AppLayout::new(area);

    render_header(ctx, layout.header, buf);
    EntryList::new(ctx.view, ctx.selected, ctx.offset, ctx.theme).render(layout.list, buf);
    render_footer(ctx, layout.footer, buf, layout.visible_rows());
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(ctx.theme.border);
    let inner = block.inner(area);
    block.render(area, buf);

    let mut title = vec![Span::styled(" dirscope ", ctx.theme.title), Span::raw(" ")];
    for (i, hint) in get_key_hints().iter().enumerate() {
        if i > 0 {
            title.push(Span::styled(", ", ctx.theme.help_desc));
        }
        title.push(Span::styled(hint.keys, ctx.theme.help_key));
        title.push(Span::styled(format!(": {}", hint.description), ctx.theme.help_desc));
    }

    let lines = [
        Line::from(title).style(ctx.theme.header),
        Line::from(format!("Path: {}", ctx.path.display())),
        Line::from(format!("Total size: {}", format_size(ctx.view.total_size()))),
    ];

    for (row, line) in lines.into_iter().enumerate() {
        let row = row as u16;
        if row >= inner.height {
            break;
        }
        line.render(Rect::new(inner.x, inner.y + row, inner.width, 1), buf);
    }
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer, visible_rows: usize) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(ctx.theme.border);
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 {
        return;
    }

    let summary = footer_summary(ctx.view, ctx.offset, visible_rows);
    Line::from(summary)
        .style(ctx.theme.footer)
        .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

    if let Some(banner) = ctx.banner {
        if inner.height > 1 {
            Line::from(Span::styled(banner, Style::new().fg(ctx.theme.error)))
                .render(Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);
        }
    }
}

/// Footer summary: which entries are on screen and how they are ordered.
pub fn footer_summary(view: &DirectoryView, offset: usize, visible_rows: usize) -> String {
    let total = view.len();
    let end = offset.saturating_add(visible_rows).min(total);

    let mut text = if end > offset {
        format!(
            "Showing {}-{} of {} subdirectories | sorted by size (largest first)",
            offset + 1,
            end,
            total
        )
    } else {
        format!("Showing 0 of {total} subdirectories | sorted by size (largest first)")
    };

    if view.skipped() > 0 {
        text.push_str(&format!(" ({} unreadable entries skipped)", view.skipped()));
    }
    text
}
