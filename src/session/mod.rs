//! Portfolio session
//!
//! [`Session`] is the one context object behind a running page. It owns the
//! typing sequencer, the scroll reactor, the timer queue and the contact
//! flow, and is driven by the host through a handful of entry points:
//!
//! - `init` / `teardown` bracket the page lifetime
//! - `advance` moves the virtual clock and fires due timers
//! - `on_scroll` / `on_resize` feed viewport changes
//! - `toggle_theme` / `submit_contact` handle user actions
//!
//! Nothing here blocks or sleeps. Delays are timer entries; the host
//! decides how real time maps onto the clock.

mod page;

use std::collections::BTreeMap;
use std::time::Duration;

pub use page::{PageMap, TimerEvent};

use crate::config::Config;
use crate::contact::{ContactFlow, SubmitAttempt, Submitter};
use crate::content::{ContentError, Site, SECTIONS};
use crate::prefs::PreferenceStore;
use crate::reactor::{
    CounterAnimation, ElementId, FollowUp, NavLink, Parallax, ReactorConfig, Revealed,
    ScrollEffects, ScrollReactor, Viewport,
};
use crate::theme::{load_theme_mode, save_theme_mode, ThemeMode};
use crate::timer::{Debouncer, TimerId, TimerQueue};
use crate::typing::{Cursor, Pacing, PhraseQueue, TypingError, TypingSequencer};

/// Errors creating a session from site content.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Typing(#[from] TypingError),

    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Timings and tunables of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub pacing: Pacing,
    pub reactor: ReactorConfig,
    /// Rows left above a section when jumping to it
    pub anchor_offset: i64,
    pub submit_delay: Duration,
    pub error_display: Duration,
    pub button_reset: Duration,
    pub page_fade: Duration,
    pub resize_debounce: Duration,
    pub parallax_debounce: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionConfig {
    fn from(config: &Config) -> Self {
        Self {
            pacing: config.typing.pacing(),
            reactor: config.scroll.reactor_config(),
            anchor_offset: config.scroll.anchor_offset,
            submit_delay: Duration::from_millis(config.contact.submit_delay_ms),
            error_display: Duration::from_millis(config.contact.error_display_ms),
            button_reset: Duration::from_millis(config.contact.button_reset_ms),
            page_fade: Duration::from_millis(config.ui.page_fade_ms),
            resize_debounce: Duration::from_millis(config.scroll.resize_debounce_ms),
            parallax_debounce: Duration::from_millis(config.scroll.parallax_debounce_ms),
        }
    }
}

/// A running portfolio page.
pub struct Session<P, S> {
    config: SessionConfig,
    typing: TypingSequencer,
    headline: String,
    reactor: ScrollReactor,
    timers: TimerQueue<TimerEvent>,
    stat_targets: Vec<u64>,
    counters: Vec<CounterAnimation>,
    skills: BTreeMap<ElementId, Vec<bool>>,
    parallax: Parallax,
    parallax_debounce: Debouncer,
    resize_debounce: Debouncer,
    relayout_pending: bool,
    viewport: Viewport,
    page_visible: bool,
    started: bool,
    theme: ThemeMode,
    prefs: P,
    submitter: S,
    contact: ContactFlow,
}

impl<P: PreferenceStore, S: Submitter> Session<P, S> {
    /// Build a session for `site`. Nothing runs until [`Session::init`].
    pub fn new(
        config: SessionConfig,
        site: &Site,
        prefs: P,
        submitter: S,
    ) -> Result<Self, SessionError> {
        let queue = PhraseQueue::new(site.phrases.iter().cloned())?;
        let stat_targets = site.stat_targets()?;
        let theme = load_theme_mode(&prefs);
        let counters = idle_counters(&stat_targets, config.reactor.counter.steps);

        Ok(Self {
            typing: TypingSequencer::new(queue, config.pacing),
            headline: String::new(),
            reactor: ScrollReactor::new(config.reactor),
            timers: TimerQueue::new(),
            stat_targets,
            counters,
            skills: BTreeMap::new(),
            parallax: Parallax::default(),
            parallax_debounce: Debouncer::new(config.parallax_debounce),
            resize_debounce: Debouncer::new(config.resize_debounce),
            relayout_pending: false,
            viewport: Viewport::default(),
            page_visible: false,
            started: false,
            theme,
            prefs,
            submitter,
            contact: ContactFlow::new(),
            config,
        })
    }

    /// Start the page: register the layout, type the first character,
    /// run the scroll effects for the opening viewport and begin the
    /// load fade.
    pub fn init(&mut self, map: PageMap, viewport: Viewport) -> ScrollEffects {
        if self.started {
            self.teardown();
        }
        self.started = true;
        self.viewport = viewport;

        self.reactor.set_links(
            SECTIONS
                .iter()
                .map(|(id, label)| NavLink::new(*id, *label))
                .collect(),
        );
        self.install_layout(map);

        self.page_visible = self.config.page_fade.is_zero();
        if !self.page_visible {
            self.timers
                .schedule_once(self.config.page_fade, TimerEvent::PageReveal);
        }

        self.dispatch(TimerEvent::TypingTick, None);

        let effects = self.reactor.init(viewport);
        self.start_follow_ups(&effects.reveals);
        self.parallax.update(viewport.offset, viewport.height);

        tracing::info!(
            offset = viewport.offset,
            height = viewport.height,
            theme = %self.theme,
            "session started"
        );
        effects
    }

    /// Stop every timer and forget all page state.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.typing = TypingSequencer::new(self.typing.queue().clone(), self.config.pacing);
        self.headline.clear();
        self.reactor.teardown();
        self.skills.clear();
        self.counters = idle_counters(&self.stat_targets, self.config.reactor.counter.steps);
        self.parallax_debounce.cancel();
        self.resize_debounce.cancel();
        self.relayout_pending = false;
        self.contact.abort();
        self.page_visible = false;
        if self.started {
            tracing::info!("session stopped");
        }
        self.started = false;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Move the clock to `now` and fire every timer due by then.
    ///
    /// Returns the number of timer events handled.
    pub fn advance(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while let Some((id, event)) = self.timers.pop_due(now) {
            self.dispatch(event, Some(id));
            fired += 1;
        }
        self.timers.advance_to(now);

        if self.parallax_debounce.poll(now) {
            self.parallax
                .update(self.viewport.offset, self.viewport.height);
        }
        if self.resize_debounce.poll(now) {
            self.relayout_pending = true;
            self.parallax
                .update(self.viewport.offset, self.viewport.height);
        }
        fired
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Number of pending timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Run the scroll effects for a new viewport position.
    pub fn on_scroll(&mut self, viewport: Viewport) -> ScrollEffects {
        self.viewport = viewport;
        let effects = self.reactor.on_scroll(viewport);
        self.start_follow_ups(&effects.reveals);
        self.parallax_debounce.trigger(self.timers.now());
        effects
    }

    /// Note a terminal resize. The relayout request comes out of
    /// [`Session::take_relayout`] once resizes have been quiet long enough.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.resize_debounce.trigger(self.timers.now());
    }

    /// Whether the host should lay the page out again. Clears the request.
    pub fn take_relayout(&mut self) -> bool {
        std::mem::take(&mut self.relayout_pending)
    }

    /// Install a fresh layout. Revealed elements stay revealed.
    pub fn relayout(&mut self, map: PageMap, viewport: Viewport) -> ScrollEffects {
        self.install_layout(map);
        tracing::debug!(height = viewport.height, "page relaid out");
        self.on_scroll(viewport)
    }

    /// Scroll offset that brings section `id` under the navbar.
    pub fn anchor_offset(&self, id: &str) -> Option<i64> {
        self.reactor
            .section(id)
            .map(|s| (s.top - self.config.anchor_offset).max(0))
    }

    /// Switch between light and dark and persist the choice.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        save_theme_mode(&mut self.prefs, self.theme);
        tracing::info!(theme = %self.theme, "theme changed");
        self.theme
    }

    /// Press the contact form's submit button.
    pub fn submit_contact(&mut self) -> SubmitAttempt {
        let attempt = self.contact.submit();
        match attempt {
            SubmitAttempt::Invalid { generation, .. } => {
                self.timers.schedule_once(
                    self.config.error_display,
                    TimerEvent::FormErrorExpire { generation },
                );
            }
            SubmitAttempt::Sending => {
                self.timers
                    .schedule_once(self.config.submit_delay, TimerEvent::SubmissionDue);
            }
            SubmitAttempt::Ignored => {}
        }
        attempt
    }

    // Accessors

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Text typed so far in the hero headline.
    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn typing_cursor(&self) -> Cursor {
        self.typing.cursor()
    }

    pub fn reactor(&self) -> &ScrollReactor {
        &self.reactor
    }

    pub fn links(&self) -> &[NavLink] {
        self.reactor.links()
    }

    pub fn navbar_scrolled(&self) -> bool {
        self.reactor.navbar_scrolled()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.reactor.active_section()
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.reactor.is_revealed(id)
    }

    pub fn counters(&self) -> &[CounterAnimation] {
        &self.counters
    }

    /// Whether item `index` of skill category `category` has animated in.
    pub fn skill_active(&self, category: ElementId, index: usize) -> bool {
        self.skills
            .get(&category)
            .and_then(|items| items.get(index))
            .copied()
            .unwrap_or(false)
    }

    pub fn parallax(&self) -> &Parallax {
        &self.parallax
    }

    pub fn page_visible(&self) -> bool {
        self.page_visible
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn contact(&self) -> &ContactFlow {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactFlow {
        &mut self.contact
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    fn install_layout(&mut self, map: PageMap) {
        self.reactor.set_sections(map.sections);
        self.reactor.replace_elements(map.elements);
        if self.parallax.orbs.len() != map.orbs {
            self.parallax = Parallax::new(map.orbs);
        }
    }

    fn start_follow_ups(&mut self, reveals: &[Revealed]) {
        for revealed in reveals {
            match &revealed.follow_up {
                FollowUp::None => {}
                FollowUp::Stagger(plan) => {
                    self.skills
                        .insert(plan.category, vec![false; plan.delays.len()]);
                    for (index, delay) in plan.delays.iter().enumerate() {
                        self.timers.schedule_once(
                            *delay,
                            TimerEvent::SkillItem {
                                category: plan.category,
                                index,
                            },
                        );
                    }
                }
                FollowUp::Counters(counters) => {
                    self.counters = counters.clone();
                    let interval = self.config.reactor.counter.interval;
                    for (stat, counter) in self.counters.iter().enumerate() {
                        if !counter.is_finished() {
                            self.timers
                                .schedule_repeating(interval, TimerEvent::CounterTick { stat });
                        }
                    }
                }
            }
        }
    }

    fn dispatch(&mut self, event: TimerEvent, id: Option<TimerId>) {
        match event {
            TimerEvent::TypingTick => {
                let delay = self.typing.tick(&mut self.headline);
                self.timers.schedule_once(delay, TimerEvent::TypingTick);
            }
            TimerEvent::SkillItem { category, index } => {
                if let Some(item) = self
                    .skills
                    .get_mut(&category)
                    .and_then(|items| items.get_mut(index))
                {
                    *item = true;
                }
            }
            TimerEvent::CounterTick { stat } => {
                let done = self.counters.get_mut(stat).map_or(true, |c| c.tick());
                if done {
                    if let Some(id) = id {
                        self.timers.cancel(id);
                    }
                }
            }
            TimerEvent::SubmissionDue => {
                if self.contact.complete(&mut self.submitter).is_some() {
                    self.timers
                        .schedule_once(self.config.button_reset, TimerEvent::ButtonReset);
                }
            }
            TimerEvent::ButtonReset => self.contact.reset_button(),
            TimerEvent::FormErrorExpire { generation } => {
                self.contact.expire_error(generation);
            }
            TimerEvent::PageReveal => self.page_visible = true,
        }
    }
}

fn idle_counters(targets: &[u64], steps: u32) -> Vec<CounterAnimation> {
    targets
        .iter()
        .map(|&t| CounterAnimation::new(t, steps))
        .collect()
}
