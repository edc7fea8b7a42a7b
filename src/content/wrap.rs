//! Word wrapping by terminal display width.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` at word boundaries so no line exceeds `max_width` cells.
///
/// Explicit newlines are hard breaks. Words wider than the line are split
/// at character boundaries. Returns an empty `Vec` for empty input.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        wrap_line(raw_line, max_width, &mut lines);
    }
    lines
}

fn wrap_line(line: &str, max_width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in line.split_whitespace() {
        let word_width = word.width();
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= max_width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            // hard-split a word that cannot fit on any line
            for ch in word.chars() {
                let cw = ch.width().unwrap_or(0);
                if current_width + cw > max_width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += cw;
            }
        }
    }

    lines.push(current);
}

/// Truncate `text` to at most `max_width` cells.
pub fn truncate(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let cw = ch.width().unwrap_or(0);
        if width + cw > max_width {
            break;
        }
        out.push(ch);
        width += cw;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_words("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn newline_is_a_hard_break() {
        let lines = wrap_words("a\nb", 10);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn long_word_is_split() {
        let lines = wrap_words("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn empty_input_produces_no_lines() {
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn wide_characters_count_double() {
        let lines = wrap_words("日本 語", 4);
        assert_eq!(lines, vec!["日本", "語"]);
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("日本語", 5), "日本");
    }
}
