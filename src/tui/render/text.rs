//! Width-aware text helpers for building lines.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::content::wrap::truncate;

/// Display width of `text` in terminal columns.
pub fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// `text` centered in `total` columns, truncated if too wide.
pub fn center(text: &str, total: usize) -> String {
    let text = truncate(text, total);
    let w = width(&text);
    let left = (total - w) / 2;
    let right = total - w - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// `text` padded with spaces to `total` columns, truncated if too wide.
pub fn pad(text: &str, total: usize) -> String {
    let text = truncate(text, total);
    let w = width(&text);
    format!("{}{}", text, " ".repeat(total - w))
}

/// An empty line.
pub fn blank() -> Line<'static> {
    Line::default()
}

/// Prefix every line with `margin` spaces.
pub fn indent(line: Line<'static>, margin: usize) -> Line<'static> {
    if margin == 0 {
        return line;
    }
    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    spans.push(Span::raw(" ".repeat(margin)));
    spans.extend(line.spans);
    Line::from(spans).style(line.style)
}

/// Top border of a box `inner` columns wide, with an optional title.
pub fn box_top(inner: usize, title: Option<&str>, style: Style) -> Line<'static> {
    let title = title.map(|t| format!(" {} ", t)).unwrap_or_default();
    let title = truncate(&title, inner);
    let rest = inner - width(&title);
    Line::from(vec![
        Span::styled("╭".to_string(), style),
        Span::styled(title, style),
        Span::styled(format!("{}╮", "─".repeat(rest)), style),
    ])
}

pub fn box_bottom(inner: usize, style: Style) -> Line<'static> {
    Line::from(Span::styled(format!("╰{}╯", "─".repeat(inner)), style))
}

/// Box side borders around `content`, padded to `inner` columns.
///
/// `inner` includes one column of padding on each side.
pub fn box_row(content: Vec<Span<'static>>, inner: usize, border: Style) -> Line<'static> {
    let avail = inner.saturating_sub(2);
    let mut spans = vec![Span::styled("│ ".to_string(), border)];
    let mut used = 0;
    for span in content {
        let w = span.width();
        if used + w > avail {
            let room = avail - used;
            if room > 0 {
                spans.push(Span::styled(truncate(&span.content, room), span.style));
                used += width(&truncate(&span.content, room));
            }
            break;
        }
        used += w;
        spans.push(span);
    }
    spans.push(Span::raw(" ".repeat(avail - used)));
    spans.push(Span::styled(" │".to_string(), border));
    Line::from(spans)
}

/// Force `lines` to exactly `height` entries.
pub fn fit(mut lines: Vec<Line<'static>>, height: usize) -> Vec<Line<'static>> {
    lines.truncate(height);
    lines.resize(height, blank());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn center_and_pad() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(width(&pad("toolongtext", 4)), 4);
    }

    #[test]
    fn box_lines_have_equal_width() {
        let style = Style::default();
        let top = box_top(10, Some("Name"), style);
        let row = box_row(vec![Span::raw("hello")], 10, style);
        let bottom = box_bottom(10, style);
        assert_eq!(width(&text_of(&top)), 12);
        assert_eq!(width(&text_of(&row)), 12);
        assert_eq!(width(&text_of(&bottom)), 12);
    }

    #[test]
    fn box_row_truncates_overflow() {
        let row = box_row(vec![Span::raw("a very long piece of text")], 8, Style::default());
        assert_eq!(width(&text_of(&row)), 10);
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit(vec![Line::from("a")], 3).len(), 3);
        assert_eq!(fit(vec![blank(); 5], 2).len(), 2);
    }

    #[test]
    fn indent_prefixes_spaces() {
        let line = indent(Line::from("x"), 3);
        assert_eq!(text_of(&line), "   x");
    }
}
