//! Footer bar rendering
//!
//! One row at the bottom of the screen: a status message on the left
//! (validation errors, theme changes) and keybinding hints on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Render the footer: `status` on the left, `keys` on the right.
pub fn render_footer(frame: &mut Frame, area: Rect, status: &str, keys: &[(&str, &str)], theme: &Theme) {
    let hints = build_footer_spans(keys, theme);
    let hints_width: usize = hints.iter().map(|s| s.width()).sum();

    let [left, right] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints_width as u16)])
        .areas(area);

    let status = Paragraph::new(status.to_string()).style(theme.text_secondary_style());
    frame.render_widget(status, left);

    let footer = Paragraph::new(Line::from(hints))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Right);
    frame.render_widget(footer, right);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_spans_join_with_separator() {
        let theme = Theme::light();
        let spans = build_footer_spans(&[("q", "quit"), ("t", "theme")], &theme);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "q: quit | t: theme");
        assert_eq!(spans[0].style.fg, Some(theme.accent));
    }

    #[test]
    fn empty_keys_give_no_spans() {
        assert!(build_footer_spans(&[], &Theme::dark()).is_empty());
    }
}
