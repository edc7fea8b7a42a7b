//! Fixed navbar with section links, theme indicator and mobile menu.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::reactor::NavLink;
use crate::theme::{Theme, ThemeMode};
use crate::tui::layout::NAVBAR_HEIGHT;

use super::text::width;

const MENU_LABEL: &str = "☰ menu";
/// Columns reserved at the right edge for the theme icon.
const ICON_SPACE: u16 = 4;
/// Navbar row holding the brand and links.
pub const TEXT_ROW: u16 = 1;

/// Screen columns covered by each link on the navbar's text row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkHitbox {
    pub index: usize,
    pub start: u16,
    pub end: u16,
}

fn link_text(index: usize, link: &NavLink) -> String {
    format!("{} {}", index + 1, link.label)
}

/// Where each link sits on a desktop navbar `width` columns wide.
pub fn link_hitboxes(width_cols: u16, links: &[NavLink]) -> Vec<LinkHitbox> {
    let texts: Vec<String> = links.iter().enumerate().map(|(i, l)| link_text(i, l)).collect();
    let total: usize = texts.iter().map(|t| width(t)).sum::<usize>() + 2 * texts.len().saturating_sub(1);
    let mut col = width_cols
        .saturating_sub(ICON_SPACE)
        .saturating_sub(total as u16);

    texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let start = col;
            let end = start + width(text) as u16;
            col = end + 2;
            LinkHitbox { index, start, end }
        })
        .collect()
}

/// Link under a click on the navbar text row.
pub fn link_at(width_cols: u16, links: &[NavLink], column: u16) -> Option<usize> {
    link_hitboxes(width_cols, links)
        .into_iter()
        .find(|h| column >= h.start && column < h.end)
        .map(|h| h.index)
}

/// Screen area of the expanded mobile menu.
pub fn menu_area(area: Rect, links: usize) -> Rect {
    let width = 20.min(area.width);
    let height = (links as u16 + 2).min(area.height.saturating_sub(NAVBAR_HEIGHT as u16));
    Rect::new(
        area.x + area.width.saturating_sub(width),
        area.y + NAVBAR_HEIGHT as u16,
        width,
        height,
    )
}

/// Menu entry under a click, if the menu is open and the click hits one.
pub fn menu_entry_at(area: Rect, links: usize, column: u16, row: u16) -> Option<usize> {
    let menu = menu_area(area, links);
    let inside = column > menu.x && column < menu.x + menu.width.saturating_sub(1);
    if !inside || row <= menu.y {
        return None;
    }
    let index = (row - menu.y - 1) as usize;
    (index < links).then_some(index)
}

/// Column range of the menu toggle on a mobile navbar.
pub fn menu_toggle_hit(width_cols: u16, column: u16) -> bool {
    column >= menu_start(width_cols) && column < width_cols.saturating_sub(ICON_SPACE)
}

/// Whether `column` hits the theme icon at the right edge.
pub fn theme_icon_hit(width_cols: u16, column: u16) -> bool {
    column >= width_cols.saturating_sub(ICON_SPACE) && column < width_cols
}

/// Everything the navbar needs to draw itself.
pub struct NavbarView<'a> {
    pub brand: &'a str,
    pub links: &'a [NavLink],
    pub scrolled: bool,
    pub mobile: bool,
    pub menu_open: bool,
    pub mode: ThemeMode,
}

pub fn render_navbar(frame: &mut Frame, area: Rect, view: &NavbarView<'_>, theme: &Theme) {
    let bar = Rect::new(area.x, area.y, area.width, (NAVBAR_HEIGHT as u16).min(area.height));
    frame.render_widget(Clear, bar);

    // The scrolled navbar gets a raised surface and a separator line.
    let block = if view.scrolled {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.accent_style())
            .style(theme.surface_style())
    } else {
        Block::default().style(theme.page_style())
    };
    frame.render_widget(block, bar);

    let text_row = Rect::new(bar.x, bar.y + TEXT_ROW, bar.width, 1);

    let mut spans = vec![Span::styled(format!(" {}", view.brand), theme.accent_bold_style())];
    let brand_width = width(view.brand) as u16 + 1;

    if view.mobile {
        let start = menu_start(bar.width);
        push_gap(&mut spans, brand_width, start);
        let style = if view.menu_open {
            theme.accent_bold_style()
        } else {
            theme.text_style()
        };
        spans.push(Span::styled(MENU_LABEL.to_string(), style));
        push_gap(&mut spans, start + width(MENU_LABEL) as u16, bar.width.saturating_sub(ICON_SPACE));
    } else {
        let hitboxes = link_hitboxes(bar.width, view.links);
        let mut col = brand_width;
        for (hit, link) in hitboxes.iter().zip(view.links) {
            push_gap(&mut spans, col, hit.start);
            spans.push(Span::styled(link_text(hit.index, link), link_style(link, theme)));
            col = hit.end;
        }
        push_gap(&mut spans, col, bar.width.saturating_sub(ICON_SPACE));
    }
    let icon = match view.mode {
        ThemeMode::Light => " ☀",
        ThemeMode::Dark => " ☾",
    };
    spans.push(Span::styled(icon.to_string(), theme.accent_style()));

    frame.render_widget(Paragraph::new(Line::from(spans)), text_row);

    if view.mobile && view.menu_open {
        render_menu(frame, area, view.links, theme);
    }
}

fn menu_start(width_cols: u16) -> u16 {
    width_cols
        .saturating_sub(ICON_SPACE)
        .saturating_sub(width(MENU_LABEL) as u16)
}

fn push_gap(spans: &mut Vec<Span<'static>>, from: u16, to: u16) {
    if to > from {
        spans.push(Span::raw(" ".repeat((to - from) as usize)));
    }
}

fn link_style(link: &NavLink, theme: &Theme) -> Style {
    if link.active {
        theme.accent_bold_style().add_modifier(Modifier::UNDERLINED)
    } else {
        theme.text_secondary_style()
    }
}

fn render_menu(frame: &mut Frame, area: Rect, links: &[NavLink], theme: &Theme) {
    let menu = menu_area(area, links.len());
    frame.render_widget(Clear, menu);
    let lines: Vec<Line> = links
        .iter()
        .enumerate()
        .map(|(i, link)| Line::from(Span::styled(link_text(i, link), link_style(link, theme))))
        .collect();
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .style(theme.surface_style()),
    );
    frame.render_widget(widget, menu);
}
