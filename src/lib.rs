//! folio - a terminal portfolio page
//!
//! The page logic (typing headline, scroll-driven effects, contact form)
//! runs on a virtual clock inside [`session::Session`] and is independent
//! of the terminal front end in [`tui`].

pub mod cli;
pub mod config;
pub mod contact;
pub mod content;
pub mod logging;
pub mod prefs;
pub mod reactor;
pub mod session;
pub mod theme;
pub mod timer;
pub mod tui;
pub mod typing;

pub use config::Config;
pub use content::Site;
pub use session::{Session, SessionConfig};
pub use theme::ThemeMode;
