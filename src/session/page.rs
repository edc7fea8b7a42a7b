//! Layout handed to the session and the timer events it schedules.

use crate::reactor::{ElementBounds, ElementId, RevealKind, SectionExtent};

/// Geometry of the laid-out document.
///
/// Built by the host whenever the page is laid out (startup and after a
/// debounced resize).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMap {
    /// Page sections in document order
    pub sections: Vec<SectionExtent>,
    /// Elements that reveal on first intersection
    pub elements: Vec<(ElementId, ElementBounds, RevealKind)>,
    /// Number of parallax decoration orbs in the hero
    pub orbs: usize,
    /// Total document height
    pub height: i64,
}

impl PageMap {
    pub fn element(&self, id: ElementId) -> Option<&(ElementId, ElementBounds, RevealKind)> {
        self.elements.iter().find(|(e, _, _)| *e == id)
    }

    /// Largest valid scroll offset for a viewport of `viewport_height`.
    pub fn max_scroll(&self, viewport_height: i64) -> i64 {
        (self.height - viewport_height).max(0)
    }
}

/// Work scheduled on the session's timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Next step of the hero typing animation
    TypingTick,
    /// Activate one item of a revealed skill category
    SkillItem { category: ElementId, index: usize },
    /// One step of a stat counter
    CounterTick { stat: usize },
    /// The simulated send delay elapsed
    SubmissionDue,
    /// Success/error display on the submit button is over
    ButtonReset,
    /// Hide a validation message, unless a newer one replaced it
    FormErrorExpire { generation: u64 },
    /// End of the page-load fade
    PageReveal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_scroll_never_negative() {
        let map = PageMap {
            height: 40,
            ..PageMap::default()
        };
        assert_eq!(map.max_scroll(30), 10);
        assert_eq!(map.max_scroll(50), 0);
    }

    #[test]
    fn element_lookup() {
        let map = PageMap {
            elements: vec![(ElementId(3), ElementBounds::new(10, 5), RevealKind::Plain)],
            ..PageMap::default()
        };
        assert!(map.element(ElementId(3)).is_some());
        assert!(map.element(ElementId(4)).is_none());
    }
}
