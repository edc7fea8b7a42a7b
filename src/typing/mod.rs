//! Typing animation for the hero headline
//!
//! Cycles through a fixed list of phrases, typing each one character by
//! character, pausing once, then erasing it before moving to the next.
//!
//! # Architecture
//!
//! - `sequencer`: the `TypingSequencer` state machine and its cursor
//! - `sink`: the `TextSink` trait the sequencer writes visible text into
//!
//! The sequencer never schedules anything itself. Each call to
//! [`TypingSequencer::tick`] returns the delay the host should wait before
//! calling it again.

mod sequencer;
mod sink;

pub use sequencer::{Cursor, Pacing, Phase, PhraseQueue, TypingError, TypingSequencer};
pub use sink::{StringSink, TextSink};
