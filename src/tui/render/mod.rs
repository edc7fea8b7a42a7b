//! Page rendering
//!
//! The document is rebuilt from the layout every frame: each block in view
//! produces its lines, the viewport slice is drawn, and the navbar, menu,
//! help modal and footer are drawn over it.

pub mod blocks;
pub mod form;
pub mod navbar;
pub mod text;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::content::Site;
use crate::contact::Submitter;
use crate::prefs::PreferenceStore;
use crate::reactor::ElementId;
use crate::session::Session;
use crate::theme::Theme;

use super::app::status_footer::render_footer;
use super::layout::PageLayout;
use super::state::UiState;
use super::ui::centered_rect;

use blocks::{block_lines, BlockContext};
use navbar::{render_navbar, NavbarView};
use text::{fit, indent};

const BROWSE_KEYS: &[(&str, &str)] = &[
    ("q", "quit"),
    ("1-5", "jump"),
    ("t", "theme"),
    ("c", "contact"),
    ("?", "help"),
];
const EDIT_KEYS: &[(&str, &str)] = &[("Tab", "next"), ("Enter", "send"), ("Esc", "done")];

const HELP: &[(&str, &str)] = &[
    ("j / k, wheel", "scroll"),
    ("Space / PgUp", "page down / up"),
    ("g / G", "top / bottom"),
    ("1-5, click", "jump to section"),
    ("m", "toggle menu"),
    ("t", "toggle theme"),
    ("c / Enter", "edit contact form"),
    ("Tab / S-Tab", "next / previous field"),
    ("Esc", "stop editing"),
    ("q", "quit"),
];

/// Split the screen into the page viewport and the footer row.
pub fn screen_areas(area: Rect) -> (Rect, Rect) {
    let [page, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .areas(area);
    (page, footer)
}

/// Document rows `offset..offset + height`, one line per row.
///
/// Blocks that reveal on intersection stay blank until revealed.
pub fn visible_lines(
    layout: &PageLayout,
    cx: &BlockContext<'_>,
    is_revealed: &dyn Fn(ElementId) -> bool,
    offset: i64,
    height: usize,
) -> Vec<Line<'static>> {
    let end = offset + height as i64;
    let mut lines = Vec::with_capacity(height);

    for block in &layout.blocks {
        let bottom = block.top + block.height;
        if bottom <= offset || block.top >= end {
            continue;
        }
        let content = match block.element {
            Some(id) if !is_revealed(id) => Vec::new(),
            _ => block_lines(block, cx),
        };
        let content = fit(content, block.height.max(0) as usize);

        let skip = (offset - block.top).max(0) as usize;
        let take = (end.min(bottom) - block.top.max(offset)).max(0) as usize;
        lines.extend(
            content
                .into_iter()
                .skip(skip)
                .take(take)
                .map(|l| indent(l, layout.margin)),
        );
    }
    fit(lines, height)
}

/// Draw one frame of the page.
pub fn render_page<P: PreferenceStore, S: Submitter>(
    frame: &mut Frame,
    session: &Session<P, S>,
    site: &Site,
    layout: &PageLayout,
    ui: &UiState,
    offset: i64,
) {
    let mode = session.theme();
    let theme = mode.theme();
    let (page, footer) = screen_areas(frame.area());

    frame.render_widget(Block::default().style(theme.page_style()), frame.area());
    if !session.page_visible() {
        return;
    }

    let skill_active = |id: ElementId, i: usize| session.skill_active(id, i);
    let cx = BlockContext {
        site,
        theme: &theme,
        width: layout.content_width,
        headline: session.headline(),
        parallax: session.parallax(),
        counters: session.counters(),
        skill_active: &skill_active,
        hovered_project: ui.hovered_project,
        contact: session.contact(),
        editing: ui.editing,
    };
    let lines = visible_lines(
        layout,
        &cx,
        &|id| session.is_revealed(id),
        offset,
        page.height as usize,
    );
    frame.render_widget(Paragraph::new(lines).style(theme.page_style()), page);

    let view = NavbarView {
        brand: &site.name,
        links: session.links(),
        scrolled: session.navbar_scrolled(),
        mobile: layout.is_mobile(),
        menu_open: ui.menu_open,
        mode,
    };
    render_navbar(frame, page, &view, &theme);

    if ui.show_help {
        render_help(frame, page, &theme);
    }

    let keys = if ui.editing { EDIT_KEYS } else { BROWSE_KEYS };
    render_footer(frame, footer, ui.status.as_deref().unwrap_or(""), keys, &theme);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal = centered_rect(60, 70, area);
    frame.render_widget(Clear, modal);

    let key_width = HELP.iter().map(|(k, _)| text::width(k)).max().unwrap_or(0);
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {} ", text::pad(key, key_width)), theme.accent_style()),
                Span::styled(desc.to_string(), theme.text_style()),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .style(theme.surface_style()),
    );
    frame.render_widget(widget, modal);
}
