//! Contact form lines: four boxed fields, the submit button and the
//! validation message.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::contact::{ButtonState, ContactFlow, Field};
use crate::theme::Theme;

use super::text::{blank, box_bottom, box_row, box_top, center, width};

const CURSOR: &str = "▏";

pub fn form_lines(flow: &ContactFlow, editing: bool, cols: usize, theme: &Theme) -> Vec<Line<'static>> {
    let form = flow.form();
    let inner = cols.saturating_sub(2);
    let mut lines = Vec::with_capacity(17);

    for field in Field::ALL {
        let focused = form.is_focused(field);
        let border = field_border(focused, form.is_filled(field), theme);

        let avail = inner.saturating_sub(2 + usize::from(focused && editing));
        let mut spans = vec![Span::styled(tail(form.value(field), avail), theme.text_style())];
        if focused && editing {
            spans.push(Span::styled(CURSOR.to_string(), theme.accent_style()));
        }

        lines.push(box_top(inner, Some(field.label()), border));
        lines.push(box_row(spans, inner, border));
        lines.push(box_bottom(inner, border));
    }

    let button = flow.button();
    let label = button.label();
    let button_inner = (width(label) + 4).min(inner);
    let style = button_style(button, theme);
    lines.push(box_top(button_inner, None, style));
    lines.push(Line::from(vec![
        Span::styled("│".to_string(), style),
        Span::styled(center(label, button_inner), style.add_modifier(Modifier::BOLD)),
        Span::styled("│".to_string(), style),
    ]));
    lines.push(box_bottom(button_inner, style));

    match flow.error() {
        Some(error) => lines.push(Line::styled(format!("⚠ {}", error), theme.error_style())),
        None => lines.push(blank()),
    }
    lines
}

fn field_border(focused: bool, filled: bool, theme: &Theme) -> Style {
    if focused {
        theme.accent_bold_style()
    } else if filled {
        theme.text_style()
    } else {
        theme.text_secondary_style()
    }
}

fn button_style(state: ButtonState, theme: &Theme) -> Style {
    match state {
        ButtonState::Idle => theme.accent_style(),
        ButtonState::Loading => theme.text_secondary_style(),
        ButtonState::Success => theme.success_style(),
        ButtonState::Error => theme.error_style(),
    }
}

/// The end of `text` that fits in `cols` columns, so the caret stays visible.
fn tail(text: &str, cols: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > cols {
            break;
        }
        used += w;
        start = i;
    }
    text[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn form_fills_its_block() {
        let lines = form_lines(&ContactFlow::new(), false, 40, &Theme::light());
        assert_eq!(lines.len(), 16);
        let rows = text(&lines);
        assert!(rows[0].contains(" Name "));
        assert!(rows[9].contains(" Message "));
        assert!(rows[13].contains("Send Message"));
    }

    #[test]
    fn focused_field_shows_cursor_while_editing() {
        let mut flow = ContactFlow::new();
        flow.form_mut().set_focus(Some(Field::Email));
        flow.form_mut().set_value(Field::Email, "a@b.co");

        let rows = text(&form_lines(&flow, true, 40, &Theme::light()));
        assert!(rows[4].contains("a@b.co▏"));
        let rows = text(&form_lines(&flow, false, 40, &Theme::light()));
        assert!(!rows[4].contains(CURSOR));
    }

    #[test]
    fn validation_error_is_shown() {
        let mut flow = ContactFlow::new();
        flow.submit();
        let rows = text(&form_lines(&flow, false, 60, &Theme::light()));
        assert_eq!(rows[15], "⚠ Please fill in all fields.");
    }

    #[test]
    fn long_values_keep_their_end() {
        assert_eq!(tail("hello world", 5), "world");
        assert_eq!(tail("hi", 5), "hi");
        assert_eq!(tail("", 5), "");
    }

    #[test]
    fn focused_border_uses_accent() {
        let theme = Theme::dark();
        assert_eq!(field_border(true, false, &theme), theme.accent_bold_style());
        assert_eq!(field_border(false, true, &theme), theme.text_style());
    }
}
