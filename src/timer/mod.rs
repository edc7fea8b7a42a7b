//! Cooperative timers for the session event loop
//!
//! Everything runs on one thread. Timers are entries in a queue keyed by a
//! virtual clock (time since the session started); the host advances the
//! clock once per frame and the session drains every timer that came due.
//!
//! - `queue`: fire-once and repeating timers (`TimerQueue`)
//! - `debounce`: trailing-edge coalescing of bursty signals (`Debouncer`)

mod debounce;
mod queue;

pub use debounce::Debouncer;
pub use queue::{TimerId, TimerQueue};
