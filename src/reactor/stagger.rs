//! Staggered activation of skill items inside a revealed category.

use std::time::Duration;

use super::intersection::ElementId;

/// Default delay step between consecutive skill items.
pub const DEFAULT_STAGGER_STEP: Duration = Duration::from_millis(100);

/// Activation schedule for the items of one skill category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggerPlan {
    /// Category the items belong to
    pub category: ElementId,
    /// Delay for each item, indexed like the items themselves
    pub delays: Vec<Duration>,
}

/// Delay for every item: its explicit override if present, otherwise
/// `index * step`.
///
/// Items are independent; an override does not shift the items after it.
pub fn stagger_delays(overrides: &[Option<Duration>], step: Duration) -> Vec<Duration> {
    overrides
        .iter()
        .enumerate()
        .map(|(i, delay)| delay.unwrap_or_else(|| step.saturating_mul(i as u32)))
        .collect()
}
