//! Integration tests for folio
//!
//! Single test binary; each module covers one area.

mod helpers;

mod cli_test;
mod content_test;
mod page_test;
