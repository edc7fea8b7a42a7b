//! Timer queue on a virtual clock.

use std::time::Duration;

/// Smallest interval a repeating timer may use.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle returned when scheduling, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<E> {
    id: TimerId,
    due: Duration,
    /// Tie-breaker: timers due at the same instant fire in scheduling order
    seq: u64,
    every: Option<Duration>,
    event: E,
}

/// Pending timers, each carrying an event to hand back when it fires.
///
/// Delays are measured from the queue's current time. While timers are
/// being drained the current time is the due time of the timer that just
/// fired, so a callback that reschedules itself keeps exact pacing even
/// when frames arrive late.
#[derive(Debug)]
pub struct TimerQueue<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
    next_seq: u64,
    now: Duration,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            next_seq: 0,
            now: Duration::ZERO,
        }
    }
}

impl<E: Clone> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fire `event` once after `delay`.
    pub fn schedule_once(&mut self, delay: Duration, event: E) -> TimerId {
        self.push(delay, None, event)
    }

    /// Fire `event` every `interval` until cancelled.
    pub fn schedule_repeating(&mut self, interval: Duration, event: E) -> TimerId {
        let interval = interval.max(MIN_INTERVAL);
        self.push(interval, Some(interval), event)
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Earliest due time among pending timers.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// Moves the clock to that timer's due time. Repeating timers are
    /// re-armed before being returned, so the callback may cancel them.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, E)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;

        self.now = self.now.max(self.entries[idx].due);

        match self.entries[idx].every {
            Some(every) => {
                let seq = self.bump_seq();
                let entry = &mut self.entries[idx];
                entry.due += every;
                entry.seq = seq;
                Some((entry.id, entry.event.clone()))
            }
            None => {
                let entry = self.entries.swap_remove(idx);
                Some((entry.id, entry.event))
            }
        }
    }

    /// Move the clock forward after all due timers were drained.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn push(&mut self, delay: Duration, every: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.entries.push(Entry {
            id,
            due: self.now + delay,
            seq,
            every,
            event,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
