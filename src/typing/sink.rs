//! Output side of the typing animation.

/// Receives the visible text after every sequencer tick that changes it.
pub trait TextSink {
    /// Replace the displayed content.
    fn set_text(&mut self, content: &str);
}

/// In-memory text display.
///
/// The TUI reads the headline from here when drawing the hero block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSink {
    text: String,
    updates: usize,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current displayed content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times the content was replaced.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl TextSink for StringSink {
    fn set_text(&mut self, content: &str) {
        self.text.clear();
        self.text.push_str(content);
        self.updates += 1;
    }
}

impl TextSink for String {
    fn set_text(&mut self, content: &str) {
        self.clear();
        self.push_str(content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_sink_replaces_content() {
        let mut sink = StringSink::new();
        sink.set_text("Hel");
        sink.set_text("He");
        assert_eq!(sink.text(), "He");
        assert_eq!(sink.updates(), 2);
    }

    #[test]
    fn plain_string_is_a_sink() {
        let mut s = String::from("old");
        s.set_text("new");
        assert_eq!(s, "new");
    }
}
