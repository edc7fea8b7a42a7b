//! Entrance reveals triggered by viewport intersection.
//!
//! Each registered element is revealed the first time it intersects the
//! viewport and stays revealed for the rest of the session. Skill categories
//! and the stats block start a follow-up animation when they reveal.

use std::collections::BTreeMap;
use std::time::Duration;

use super::counter::{CounterAnimation, CounterSpec};
use super::intersection::{ElementId, IntersectionEntry};
use super::stagger::{stagger_delays, StaggerPlan};

/// What kind of element is being revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealKind {
    /// Plain fade/slide-in
    Plain,
    /// Skill category: its items activate one after another
    SkillCategory {
        /// Per-item delay override, `None` to use the stagger step
        item_delays: Vec<Option<Duration>>,
    },
    /// Stats block: every stat counts up to its target
    Stats {
        /// Counter target for each stat
        targets: Vec<u64>,
    },
}

/// Animation started by a reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    None,
    Stagger(StaggerPlan),
    Counters(Vec<CounterAnimation>),
}

/// Produced exactly once per element, on its first intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealed {
    pub element: ElementId,
    pub follow_up: FollowUp,
}

/// Per-element reveal flag. Monotonic: never goes back to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityRecord {
    pub revealed: bool,
}

/// Settings shared by all follow-up animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSettings {
    pub stagger_step: Duration,
    pub counter: CounterSpec,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            stagger_step: super::stagger::DEFAULT_STAGGER_STEP,
            counter: CounterSpec::default(),
        }
    }
}

/// Turns intersection entries into one-time reveals.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    settings: RevealSettings,
    kinds: BTreeMap<ElementId, RevealKind>,
    records: BTreeMap<ElementId, VisibilityRecord>,
}

impl RevealTracker {
    pub fn new(settings: RevealSettings) -> Self {
        Self {
            settings,
            kinds: BTreeMap::new(),
            records: BTreeMap::new(),
        }
    }

    pub fn settings(&self) -> RevealSettings {
        self.settings
    }

    /// Register (or re-register after a relayout) an element's kind.
    pub fn register(&mut self, id: ElementId, kind: RevealKind) {
        self.kinds.insert(id, kind);
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.records.get(&id).is_some_and(|r| r.revealed)
    }

    /// Number of elements revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.records.values().filter(|r| r.revealed).count()
    }

    /// Handle one intersection entry.
    ///
    /// Returns `Some` only for the first intersecting entry of a registered
    /// element. Leaving the viewport never clears the record, and entries
    /// for unknown elements are ignored.
    pub fn handle(&mut self, entry: &IntersectionEntry) -> Option<Revealed> {
        let kind = self.kinds.get(&entry.element)?;
        let record = self.records.entry(entry.element).or_default();

        if !entry.is_intersecting || record.revealed {
            return None;
        }
        record.revealed = true;

        let follow_up = match kind {
            RevealKind::Plain => FollowUp::None,
            RevealKind::SkillCategory { item_delays } => FollowUp::Stagger(StaggerPlan {
                category: entry.element,
                delays: stagger_delays(item_delays, self.settings.stagger_step),
            }),
            RevealKind::Stats { targets } => FollowUp::Counters(
                targets
                    .iter()
                    .map(|&t| CounterAnimation::new(t, self.settings.counter.steps))
                    .collect(),
            ),
        };

        tracing::debug!(element = entry.element.0, ratio = entry.ratio, "element revealed");
        Some(Revealed {
            element: entry.element,
            follow_up,
        })
    }

    /// Forget every element and record.
    pub fn clear(&mut self) {
        self.kinds.clear();
        self.records.clear();
    }
}
