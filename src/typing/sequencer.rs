//! Typing sequencer state machine
//!
//! Contains the phrase queue, the cursor into it, and the tick function
//! that advances the animation by exactly one step.

use std::time::Duration;

use super::sink::TextSink;

/// Errors raised while building a sequencer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypingError {
    #[error("Phrase list is empty; the typing animation needs at least one phrase")]
    EmptyPhraseQueue,
}

/// Ordered, cyclic list of phrases.
///
/// Never empty. Indexes wrap around with modulo arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseQueue {
    phrases: Vec<String>,
}

impl PhraseQueue {
    /// Build a queue, rejecting an empty phrase list.
    pub fn new<I, S>(phrases: I) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypingError::EmptyPhraseQueue);
        }
        Ok(Self { phrases })
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Never true for a constructed queue.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrase at `index`, wrapping past the end.
    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }

    /// Index following `index`, wrapping to 0 after the last phrase.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phrases.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

/// Which step the sequencer takes on its next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Appending characters to the current phrase
    #[default]
    Typing,
    /// Phrase fully typed; the next tick only inserts the dwell delay
    PausedBeforeDelete,
    /// Removing characters from the current phrase
    Deleting,
}

/// Position of the sequencer in the phrase queue.
///
/// `char_index` counts Unicode scalar values, so phrases with emoji
/// are typed one symbol at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Index of the phrase being typed or erased
    pub phrase_index: usize,
    /// Number of characters of the phrase currently shown
    pub char_index: usize,
    /// Next step to take
    pub phase: Phase,
}

impl Cursor {
    /// True from the moment a phrase is fully typed until it is erased.
    pub fn deleting(&self) -> bool {
        matches!(self.phase, Phase::PausedBeforeDelete | Phase::Deleting)
    }

    /// True only while the one-shot dwell delay is pending.
    pub fn paused(&self) -> bool {
        self.phase == Phase::PausedBeforeDelete
    }
}

/// Delays between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Delay after typing a character
    pub type_delay: Duration,
    /// Delay after deleting a character
    pub delete_delay: Duration,
    /// Extra delay between finishing a phrase and erasing it
    pub dwell: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            dwell: Duration::from_millis(1500),
        }
    }
}

/// Type-and-delete animation over a [`PhraseQueue`].
///
/// Driven entirely by [`tick`](Self::tick); the caller owns the timer.
#[derive(Debug, Clone)]
pub struct TypingSequencer {
    queue: PhraseQueue,
    pacing: Pacing,
    cursor: Cursor,
    text: String,
}

impl TypingSequencer {
    pub fn new(queue: PhraseQueue, pacing: Pacing) -> Self {
        Self {
            queue,
            pacing,
            cursor: Cursor::default(),
            text: String::new(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn queue(&self) -> &PhraseQueue {
        &self.queue
    }

    /// Phrase the cursor currently points at.
    pub fn current_phrase(&self) -> &str {
        self.queue.get(self.cursor.phrase_index)
    }

    /// Text shown after the last tick.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Advance the animation by one step.
    ///
    /// Writes the new visible text into `sink` (except on the dwell tick,
    /// which changes nothing on screen) and returns the delay before the
    /// next tick should run.
    pub fn tick<S>(&mut self, sink: &mut S) -> Duration
    where
        S: TextSink + ?Sized,
    {
        match self.cursor.phase {
            Phase::PausedBeforeDelete => {
                self.cursor.phase = Phase::Deleting;
                self.pacing.dwell
            }
            Phase::Deleting => {
                self.cursor.char_index = self.cursor.char_index.saturating_sub(1);
                self.render(sink);

                if self.cursor.char_index == 0 {
                    self.cursor.phase = Phase::Typing;
                    self.cursor.phrase_index = self.queue.next_index(self.cursor.phrase_index);
                    tracing::trace!(
                        phrase_index = self.cursor.phrase_index,
                        "typing next phrase"
                    );
                }
                self.pacing.delete_delay
            }
            Phase::Typing => {
                let len = self.current_phrase().chars().count();
                if self.cursor.char_index < len {
                    self.cursor.char_index += 1;
                }
                self.render(sink);

                if self.cursor.char_index == len {
                    self.cursor.phase = Phase::PausedBeforeDelete;
                }
                self.pacing.type_delay
            }
        }
    }

    fn render<S>(&mut self, sink: &mut S)
    where
        S: TextSink + ?Sized,
    {
        let prefix = char_prefix(self.queue.get(self.cursor.phrase_index), self.cursor.char_index);
        self.text.clear();
        self.text.push_str(prefix);
        sink.set_text(&self.text);
    }
}

/// First `count` characters of `s`, or all of it if shorter.
fn char_prefix(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::StringSink;
    use proptest::prelude::*;

    fn sequencer(phrases: &[&str]) -> TypingSequencer {
        let queue = PhraseQueue::new(phrases.iter().copied()).unwrap();
        TypingSequencer::new(queue, Pacing::default())
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        let result = PhraseQueue::new(Vec::<String>::new());
        assert_eq!(result, Err(TypingError::EmptyPhraseQueue));
    }

    #[test]
    fn queue_wraps_indexes() {
        let queue = PhraseQueue::new(["a", "b", "c"]).unwrap();
        assert_eq!(queue.get(4), "b");
        assert_eq!(queue.next_index(2), 0);
        assert_eq!(queue.len(), 3);
        assert!(!queue.is_empty());
    }

    #[test]
    fn typing_appends_one_character_per_tick() {
        let mut seq = sequencer(&["Hey"]);
        let mut sink = StringSink::new();

        assert_eq!(seq.tick(&mut sink), Duration::from_millis(100));
        assert_eq!(sink.text(), "H");
        seq.tick(&mut sink);
        assert_eq!(sink.text(), "He");
    }

    #[test]
    fn hi_yo_scenario() {
        let mut seq = sequencer(&["Hi", "Yo"]);
        let mut sink = StringSink::new();

        // type "Hi"
        seq.tick(&mut sink);
        seq.tick(&mut sink);
        assert_eq!(sink.text(), "Hi");
        assert!(seq.cursor().paused());

        // dwell tick: no text change
        let delay = seq.tick(&mut sink);
        assert_eq!(delay, Duration::from_millis(1500));
        assert_eq!(sink.updates(), 2);
        assert_eq!(seq.cursor().phase, Phase::Deleting);

        // delete "Hi"
        assert_eq!(seq.tick(&mut sink), Duration::from_millis(50));
        assert_eq!(sink.text(), "H");
        seq.tick(&mut sink);
        assert_eq!(sink.text(), "");
        assert_eq!(seq.current_phrase(), "Yo");
        assert_eq!(seq.cursor().char_index, 0);
        assert!(!seq.cursor().deleting());
    }

    #[test]
    fn pause_happens_exactly_once_per_phrase() {
        let mut seq = sequencer(&["abc"]);
        let mut sink = StringSink::new();
        let mut dwell_ticks = 0;

        // 3 typing + 1 dwell + 3 deleting
        for _ in 0..7 {
            if seq.tick(&mut sink) == Duration::from_millis(1500) {
                dwell_ticks += 1;
            }
        }
        assert_eq!(dwell_ticks, 1);
        assert_eq!(seq.cursor(), Cursor::default());
    }

    #[test]
    fn full_cycle_returns_to_origin() {
        let phrases = ["one", "two 👋", "three"];
        let mut seq = sequencer(&phrases);
        let mut sink = StringSink::new();

        let ticks: usize = phrases
            .iter()
            .map(|p| 2 * p.chars().count() + 1)
            .sum();
        for _ in 0..ticks {
            seq.tick(&mut sink);
        }

        let cursor = seq.cursor();
        assert_eq!(cursor.phrase_index, 0);
        assert_eq!(cursor.char_index, 0);
        assert!(!cursor.deleting());
    }

    #[test]
    fn emoji_is_typed_as_one_character() {
        let mut seq = sequencer(&["a👋"]);
        let mut sink = StringSink::new();
        seq.tick(&mut sink);
        seq.tick(&mut sink);
        assert_eq!(sink.text(), "a👋");
        assert!(seq.cursor().paused());
    }

    #[test]
    fn empty_phrase_is_skipped_without_breaking_bounds() {
        let mut seq = sequencer(&["", "x"]);
        let mut sink = StringSink::new();

        seq.tick(&mut sink);
        assert!(seq.cursor().paused());
        assert_eq!(seq.cursor().char_index, 0);

        seq.tick(&mut sink); // dwell
        seq.tick(&mut sink); // erase nothing, advance
        assert_eq!(seq.cursor().phrase_index, 1);
        assert_eq!(seq.cursor().phase, Phase::Typing);
    }

    #[test]
    fn char_prefix_handles_multibyte() {
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("abc", 0), "");
    }

    proptest! {
        #[test]
        fn char_index_stays_within_phrase(
            phrases in prop::collection::vec(".{0,12}", 1..5),
            ticks in 0usize..400,
        ) {
            let queue = PhraseQueue::new(phrases).unwrap();
            let mut seq = TypingSequencer::new(queue, Pacing::default());
            let mut sink = String::new();

            for _ in 0..ticks {
                seq.tick(&mut sink);
                let len = seq.current_phrase().chars().count();
                prop_assert!(seq.cursor().char_index <= len);
                prop_assert!(sink.chars().count() <= len);
            }
        }

        #[test]
        fn phrase_index_advances_by_one(
            phrases in prop::collection::vec("[a-z]{1,6}", 1..6),
        ) {
            let queue = PhraseQueue::new(phrases.clone()).unwrap();
            let mut seq = TypingSequencer::new(queue, Pacing::default());
            let mut sink = String::new();
            let first_len = phrases[0].chars().count();

            for _ in 0..(2 * first_len + 1) {
                seq.tick(&mut sink);
            }
            prop_assert_eq!(seq.cursor().phrase_index, 1 % phrases.len());
            prop_assert_eq!(seq.cursor().char_index, 0);
            prop_assert_eq!(seq.cursor().phase, Phase::Typing);
        }
    }
}
