//! End-to-end tests of the page host without a terminal

use std::time::Duration;

use folio::contact::{ButtonState, Field, ScriptedSubmitter};
use folio::prefs::{FilePreferences, MemoryPreferences};
use folio::tui::input::Action;
use folio::tui::layout::BlockKind;
use folio::tui::PageHost;
use folio::{Session, SessionConfig, Site, ThemeMode};

type Host = PageHost<MemoryPreferences, ScriptedSubmitter>;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn host(size: (u16, u16), submitter: ScriptedSubmitter) -> Host {
    let site = Site::default();
    let session = Session::new(
        SessionConfig::default(),
        &site,
        MemoryPreferences::new(),
        submitter,
    )
    .unwrap();
    let mut host = PageHost::new(session, site, size);
    host.start(None);
    host
}

#[test]
fn scrolling_to_the_bottom_reveals_everything() {
    let mut h = host((100, 30), ScriptedSubmitter::default());
    let mut now = Duration::ZERO;
    while h.offset() < h.layout().max_scroll() {
        h.apply(Action::ScrollBy(5), now);
        now += ms(20);
        h.tick(now);
    }
    h.tick(now + ms(5000));

    let session = h.session();
    for block in &h.layout().blocks {
        if let Some(id) = block.element {
            assert!(session.is_revealed(id), "{:?} not revealed", block.kind);
        }
    }

    let counters: Vec<String> = session.counters().iter().map(|c| c.display()).collect();
    assert_eq!(counters, vec!["50+", "120+", "5"]);

    let site = Site::default();
    for block in &h.layout().blocks {
        if let (BlockKind::SkillCategory(i), Some(id)) = (block.kind, block.element) {
            for item in 0..site.skills[i].items.len() {
                assert!(session.skill_active(id, item));
            }
        }
    }

    assert!(session.navbar_scrolled());
    assert_eq!(session.active_section(), Some("contact"));
}

#[test]
fn reveals_survive_scrolling_back_up() {
    let mut h = host((100, 30), ScriptedSubmitter::default());
    h.apply(Action::ScrollToBottom, ms(0));
    h.tick(ms(1000));
    h.apply(Action::ScrollToTop, ms(1000));
    h.tick(ms(2000));

    assert_eq!(h.offset(), 0);
    assert!(!h.session().navbar_scrolled());
    assert_eq!(h.session().active_section(), Some("home"));
    let contact = h.layout().block(BlockKind::ContactForm).unwrap().element.unwrap();
    assert!(h.session().is_revealed(contact));
}

#[test]
fn headline_types_first_phrase() {
    let mut h = host((100, 30), ScriptedSubmitter::default());
    assert_eq!(h.session().headline(), "H");
    h.tick(ms(100));
    assert_eq!(h.session().headline(), "Hi");
    h.tick(ms(300));
    assert_eq!(h.session().headline(), "Hi, ");
}

#[test]
fn page_fades_in_after_load() {
    let mut h = host((100, 30), ScriptedSubmitter::default());
    assert!(!h.session().page_visible());
    h.tick(ms(100));
    assert!(h.session().page_visible());
}

#[test]
fn failed_submission_recovers_after_reset_delay() {
    let mut h = host((100, 30), ScriptedSubmitter::new([false]));
    h.apply(Action::FocusForm, ms(0));
    for (i, value) in ["Ada", "ada@example.com", "Hi", "Hello"].iter().enumerate() {
        for c in value.chars() {
            h.apply(Action::Type(c), ms(0));
        }
        if i < 3 {
            h.apply(Action::NextField, ms(0));
        }
    }
    assert_eq!(h.session().contact().form().value(Field::Message), "Hello");

    h.apply(Action::Submit, ms(0));
    h.tick(ms(2000));
    assert_eq!(h.session().contact().button(), ButtonState::Error);
    // values are kept so the user can retry
    assert_eq!(h.session().contact().form().value(Field::Name), "Ada");

    h.tick(ms(5000));
    assert_eq!(h.session().contact().button(), ButtonState::Idle);
}

#[test]
fn invalid_submission_message_expires() {
    let mut h = host((100, 30), ScriptedSubmitter::default());
    h.apply(Action::FocusForm, ms(0));
    h.apply(Action::Submit, ms(0));
    assert!(h.session().contact().error().is_some());

    h.tick(ms(4999));
    assert!(h.session().contact().error().is_some());
    h.tick(ms(5000));
    assert!(h.session().contact().error().is_none());
}

#[test]
fn theme_choice_is_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let site = Site::default();
    let session = Session::new(
        SessionConfig::default(),
        &site,
        FilePreferences::in_dir(dir.path()),
        ScriptedSubmitter::default(),
    )
    .unwrap();
    let mut h = PageHost::new(session, site.clone(), (100, 30));
    h.start(None);
    h.apply(Action::ToggleTheme, ms(0));
    h.stop();

    let session = Session::new(
        SessionConfig::default(),
        &site,
        FilePreferences::in_dir(dir.path()),
        ScriptedSubmitter::default(),
    )
    .unwrap();
    assert_eq!(session.theme(), ThemeMode::Dark);
}
