//! Interactive portfolio page
//!
//! [`PageHost`] holds everything a frame needs besides the terminal: the
//! session, the current layout, the scroll position and the UI state. It
//! turns input actions into session calls and maps wall time onto the
//! session clock. [`PortfolioApp`] couples a host to a real terminal.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::layout::Rect;

use super::app::App;
use super::input::{map_event, Action};
use super::layout::{FormTarget, PageLayout, NAVBAR_HEIGHT};
use super::render::navbar::{
    link_at, menu_entry_at, menu_toggle_hit, theme_icon_hit, TEXT_ROW,
};
use super::render::render_page;
use super::scroll::ScrollState;
use super::state::UiState;
use crate::contact::{Field, SubmitAttempt, Submitter};
use crate::content::{Site, SECTIONS};
use crate::prefs::PreferenceStore;
use crate::reactor::Viewport;
use crate::session::Session;

/// How long footer status messages stay up.
const STATUS_TTL: Duration = Duration::from_secs(2);

/// Terminal-independent state of the running page.
pub struct PageHost<P, S> {
    session: Session<P, S>,
    site: Site,
    layout: PageLayout,
    scroll: ScrollState,
    ui: UiState,
    /// Terminal size as (columns, rows)
    size: (u16, u16),
    status_until: Option<Duration>,
}

impl<P: PreferenceStore, S: Submitter> PageHost<P, S> {
    pub fn new(session: Session<P, S>, site: Site, size: (u16, u16)) -> Self {
        let layout = PageLayout::build(&site, size.0, page_height(size.1));
        let scroll = ScrollState::new(layout.max_scroll());
        Self {
            session,
            site,
            layout,
            scroll,
            ui: UiState::default(),
            size,
            status_until: None,
        }
    }

    /// Start the session, optionally opened at section `section`.
    pub fn start(&mut self, section: Option<&str>) {
        self.session.init(self.layout.page_map(&self.site), self.viewport());
        if let Some(target) = section.and_then(|id| self.session.anchor_offset(id)) {
            if self.scroll.jump_to(target) {
                self.session.on_scroll(self.viewport());
            }
        }
    }

    pub fn stop(&mut self) {
        self.session.teardown();
    }

    pub fn session(&self) -> &Session<P, S> {
        &self.session
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn offset(&self) -> i64 {
        self.scroll.offset()
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll.offset(), page_height(self.size.1))
    }

    /// Advance to `now`: fire timers, step the scroll animation and pick
    /// up a pending relayout.
    pub fn tick(&mut self, now: Duration) {
        self.session.advance(now);

        if self.scroll.tick(now) {
            self.session.on_scroll(self.viewport());
        }

        if self.session.take_relayout() {
            self.layout = PageLayout::build(&self.site, self.size.0, page_height(self.size.1));
            self.scroll.set_max(self.layout.max_scroll());
            if !self.layout.is_mobile() {
                self.ui.menu_open = false;
            }
            self.session
                .relayout(self.layout.page_map(&self.site), self.viewport());
        }

        if self.status_until.is_some_and(|until| now >= until) {
            self.ui.status = None;
            self.status_until = None;
        }
    }

    /// Apply one input action. Returns false once the user asked to quit.
    pub fn apply(&mut self, action: Action, now: Duration) -> bool {
        match action {
            Action::Quit => return false,
            Action::ScrollBy(delta) => self.scroll_by(delta),
            Action::PageDown => self.scroll_by(self.page_step()),
            Action::PageUp => self.scroll_by(-self.page_step()),
            Action::ScrollToTop => self.scroll.animate_to(0, now),
            Action::ScrollToBottom => self.scroll.animate_to(self.layout.max_scroll(), now),
            Action::JumpTo(index) => {
                if let Some((id, _)) = SECTIONS.get(index) {
                    self.go_to_section(id, now);
                }
            }
            Action::ToggleTheme => {
                let mode = self.session.toggle_theme();
                self.set_status(format!("Theme: {}", mode), now);
            }
            Action::ToggleMenu => {
                if self.layout.is_mobile() {
                    self.ui.toggle_menu();
                }
            }
            Action::ToggleHelp => self.ui.show_help = !self.ui.show_help,
            Action::FocusForm => {
                let field = self.session.contact().form().focus().unwrap_or(Field::Name);
                self.focus(field);
                self.go_to_section("contact", now);
            }
            Action::Blur => self.blur(),
            Action::NextField => self.move_focus(Field::next),
            Action::PrevField => self.move_focus(Field::prev),
            Action::Type(c) => {
                let form = self.session.contact_mut().form_mut();
                if let Some(field) = form.focus() {
                    form.push_char(field, c);
                }
            }
            Action::Backspace => {
                let form = self.session.contact_mut().form_mut();
                if let Some(field) = form.focus() {
                    form.pop_char(field);
                }
            }
            Action::Submit => self.submit(now),
            Action::Click { column, row } => self.click(column, row, now),
            Action::Hover { row, .. } => {
                let project = self
                    .document_row(row)
                    .and_then(|r| self.layout.project_at(r));
                self.ui.hover(project);
            }
            Action::Resize { width, height } => {
                self.size = (width, height);
                self.session.on_resize(self.viewport());
            }
            Action::None => {}
        }
        true
    }

    fn page_step(&self) -> i64 {
        (page_height(self.size.1) - NAVBAR_HEIGHT).max(1)
    }

    fn scroll_by(&mut self, delta: i64) {
        if self.scroll.scroll_by(delta) {
            self.session.on_scroll(self.viewport());
        }
    }

    fn go_to_section(&mut self, id: &str, now: Duration) {
        if let Some(target) = self.session.anchor_offset(id) {
            tracing::debug!(section = id, target, "scrolling to section");
            self.scroll.animate_to(target, now);
        }
        self.ui.link_chosen();
    }

    fn focus(&mut self, field: Field) {
        self.ui.editing = true;
        self.session
            .contact_mut()
            .form_mut()
            .set_focus(Some(field));
    }

    fn blur(&mut self) {
        self.ui.editing = false;
        self.session.contact_mut().form_mut().set_focus(None);
    }

    fn move_focus(&mut self, step: fn(Field) -> Field) {
        let current = self.session.contact().form().focus().unwrap_or(Field::Message);
        self.focus(step(current));
    }

    fn submit(&mut self, now: Duration) {
        match self.session.submit_contact() {
            SubmitAttempt::Sending => {
                self.blur();
                self.set_status("Sending message...".to_string(), now);
            }
            SubmitAttempt::Invalid { .. } | SubmitAttempt::Ignored => {}
        }
    }

    fn click(&mut self, column: u16, row: u16, now: Duration) {
        let width = self.size.0;
        let mobile = self.layout.is_mobile();

        if mobile && self.ui.menu_open {
            let area = Rect::new(0, 0, width, page_height(self.size.1) as u16);
            if let Some(index) = menu_entry_at(area, SECTIONS.len(), column, row) {
                if let Some((id, _)) = SECTIONS.get(index) {
                    self.go_to_section(id, now);
                }
                return;
            }
        }

        if i64::from(row) < NAVBAR_HEIGHT {
            if theme_icon_hit(width, column) {
                self.apply(Action::ToggleTheme, now);
            } else if mobile {
                if menu_toggle_hit(width, column) {
                    self.ui.toggle_menu();
                }
            } else if row == TEXT_ROW {
                if let Some((id, _)) = link_at(width, self.session.links(), column)
                    .and_then(|i| SECTIONS.get(i))
                {
                    self.go_to_section(id, now);
                }
            }
            return;
        }
        self.ui.menu_open = false;

        match self
            .document_row(row)
            .and_then(|r| self.layout.form_target_at(r))
        {
            Some(FormTarget::Field(field)) => self.focus(field),
            Some(FormTarget::Submit) => self.submit(now),
            None => self.blur(),
        }
    }

    /// Document row under screen `row`, if it is inside the page viewport.
    fn document_row(&self, row: u16) -> Option<i64> {
        let row = i64::from(row);
        (row >= NAVBAR_HEIGHT && row < page_height(self.size.1)).then(|| self.scroll.offset() + row)
    }

    fn set_status(&mut self, message: String, now: Duration) {
        self.ui.status = Some(message);
        self.status_until = Some(now + STATUS_TTL);
    }
}

/// Rows available to the page once the footer row is taken.
fn page_height(rows: u16) -> i64 {
    i64::from(rows.saturating_sub(1))
}

/// The page running in a real terminal.
pub struct PortfolioApp<P, S> {
    app: App,
    host: PageHost<P, S>,
    started: Instant,
}

impl<P: PreferenceStore, S: Submitter> PortfolioApp<P, S> {
    pub fn new(session: Session<P, S>, site: Site, tick_rate: Duration) -> Result<Self> {
        let app = App::new(tick_rate)?;
        let size = app.size()?;
        Ok(Self {
            app,
            host: PageHost::new(session, site, size),
            started: Instant::now(),
        })
    }

    /// Run until the user quits.
    pub fn run(&mut self, section: Option<&str>) -> Result<()> {
        self.started = Instant::now();
        self.host.start(section);

        loop {
            let now = self.started.elapsed();
            self.host.tick(now);
            self.draw()?;

            if let Some(event) = self.app.poll_event(self.app.tick_rate())? {
                let action = map_event(event, self.host.ui().editing);
                if !self.host.apply(action, self.started.elapsed()) {
                    break;
                }
            }
        }

        self.host.stop();
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let host = &self.host;
        self.app.draw(|frame| {
            render_page(
                frame,
                host.session(),
                host.site(),
                host.layout(),
                host.ui(),
                host.offset(),
            )
        })
    }
}
