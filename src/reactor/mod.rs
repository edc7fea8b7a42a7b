//! Scroll-driven page effects
//!
//! Derives three independent effects from the scroll position and from
//! element intersection with the viewport:
//!
//! - `navbar`: compact navbar style past a scroll threshold
//! - `active`: which navigation link matches the section in view
//! - `intersection` + `reveal`: one-time entrance reveals, with
//!   `stagger` (skill items) and `counter` (stats) follow-ups
//!
//! `parallax` is a cosmetic extra recomputed from the same signal.
//!
//! [`ScrollReactor`] owns the registries and runs all effects against the
//! same viewport. It does not schedule timers; follow-up animations are
//! returned to the caller in [`ScrollEffects`].

pub mod active;
pub mod counter;
pub mod intersection;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod stagger;

use std::time::Duration;

pub use active::{active_section, sync_links, NavLink, SectionExtent, DEFAULT_HEADER_OFFSET};
pub use counter::{format_counter, CounterAnimation, CounterSpec};
pub use intersection::{
    ElementBounds, ElementId, IntersectionEntry, IntersectionObserver, ObserverOptions, Viewport,
};
pub use navbar::{navbar_scrolled, DEFAULT_SCROLLED_THRESHOLD};
pub use parallax::Parallax;
pub use reveal::{FollowUp, RevealKind, RevealSettings, RevealTracker, Revealed};
pub use stagger::{StaggerPlan, DEFAULT_STAGGER_STEP};

/// Tunables for every scroll-derived effect.
///
/// Defaults use browser pixel units. The terminal host overrides them with
/// row-based values from the config file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactorConfig {
    /// Offset past which the navbar is "scrolled"
    pub navbar_threshold: i64,
    /// Subtracted from section tops when matching the active section
    pub header_offset: i64,
    /// Intersection threshold and root margin for reveals
    pub observer: ObserverOptions,
    /// Delay step between skill items
    pub stagger_step: Duration,
    /// Counter pacing
    pub counter: CounterSpec,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: DEFAULT_SCROLLED_THRESHOLD,
            header_offset: DEFAULT_HEADER_OFFSET,
            observer: ObserverOptions::default(),
            stagger_step: DEFAULT_STAGGER_STEP,
            counter: CounterSpec::default(),
        }
    }
}

/// Everything a single scroll event changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollEffects {
    /// Current navbar style
    pub navbar_scrolled: bool,
    /// Navbar style flipped on this event
    pub navbar_changed: bool,
    /// Section matched by the offset, if any
    pub active_section: Option<String>,
    /// Some link's highlight changed on this event
    pub links_changed: bool,
    /// Elements revealed on this event, with their follow-ups
    pub reveals: Vec<Revealed>,
}

/// Owns the section/link registries, the observer and the reveal records.
#[derive(Debug, Clone)]
pub struct ScrollReactor {
    config: ReactorConfig,
    sections: Vec<SectionExtent>,
    links: Vec<NavLink>,
    observer: IntersectionObserver,
    reveals: RevealTracker,
    navbar_scrolled: bool,
    active: Option<String>,
}

impl ScrollReactor {
    pub fn new(config: ReactorConfig) -> Self {
        Self {
            config,
            sections: Vec::new(),
            links: Vec::new(),
            observer: IntersectionObserver::new(config.observer),
            reveals: RevealTracker::new(RevealSettings {
                stagger_step: config.stagger_step,
                counter: config.counter,
            }),
            navbar_scrolled: false,
            active: None,
        }
    }

    pub fn config(&self) -> ReactorConfig {
        self.config
    }

    /// Replace the section extents (after a relayout).
    pub fn set_sections(&mut self, sections: Vec<SectionExtent>) {
        self.sections = sections;
    }

    pub fn sections(&self) -> &[SectionExtent] {
        &self.sections
    }

    /// Replace the navigation links.
    pub fn set_links(&mut self, links: Vec<NavLink>) {
        self.links = links;
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Register an element for reveal, or update its bounds.
    ///
    /// Reveal records survive re-registration, so a relayout never hides
    /// an element that was already revealed.
    pub fn observe(&mut self, id: ElementId, bounds: ElementBounds, kind: RevealKind) {
        self.observer.observe(id, bounds);
        self.reveals.register(id, kind);
    }

    /// Swap in a new element set. Elements missing from `elements` are no
    /// longer observed; reveal records are kept either way.
    pub fn replace_elements(&mut self, elements: Vec<(ElementId, ElementBounds, RevealKind)>) {
        self.observer
            .retain(|id| elements.iter().any(|(kept, _, _)| *kept == id));
        for (id, bounds, kind) in elements {
            self.observe(id, bounds, kind);
        }
    }

    pub fn is_observing(&self, id: ElementId) -> bool {
        self.observer.is_observing(id)
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.reveals.is_revealed(id)
    }

    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Section extent by id.
    pub fn section(&self, id: &str) -> Option<&SectionExtent> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Run every effect for the initial viewport.
    ///
    /// The page may open already scrolled (deep link), so this is a full
    /// scroll pass rather than a reset.
    pub fn init(&mut self, viewport: Viewport) -> ScrollEffects {
        let mut effects = self.on_scroll(viewport);
        effects.links_changed = true;
        effects.navbar_changed = true;
        effects
    }

    /// Run every effect against one scroll event.
    pub fn on_scroll(&mut self, viewport: Viewport) -> ScrollEffects {
        let scrolled = navbar_scrolled(viewport.offset, self.config.navbar_threshold);
        let navbar_changed = scrolled != self.navbar_scrolled;
        self.navbar_scrolled = scrolled;

        let active = active_section(&self.sections, viewport.offset, self.config.header_offset)
            .map(str::to_string);
        let links_changed = sync_links(&mut self.links, active.as_deref());
        if active != self.active {
            tracing::debug!(section = ?active, "active section changed");
        }
        self.active = active.clone();

        let reveals = self
            .observer
            .compute(viewport)
            .iter()
            .filter_map(|entry| self.reveals.handle(entry))
            .collect();

        ScrollEffects {
            navbar_scrolled: scrolled,
            navbar_changed,
            active_section: active,
            links_changed,
            reveals,
        }
    }

    /// Drop all registries and records.
    pub fn teardown(&mut self) {
        self.sections.clear();
        self.links.clear();
        self.observer.disconnect();
        self.reveals.clear();
        self.navbar_scrolled = false;
        self.active = None;
    }
}
