//! TUI (Text User Interface) module for folio
//!
//! Renders the portfolio as one scrollable terminal page using
//! ratatui/crossterm, with mouse support and resize handling.

pub mod app;
pub mod input;
pub mod layout;
pub mod portfolio_app;
pub mod render;
pub mod scroll;
pub mod state;
pub mod ui;

pub use app::App;
pub use layout::PageLayout;
pub use portfolio_app::{PageHost, PortfolioApp};
