//! Navbar style switch.

/// Scroll offset past which the navbar switches to its compact style.
pub const DEFAULT_SCROLLED_THRESHOLD: i64 = 100;

/// Whether the navbar should use its "scrolled" style.
///
/// Pure function of the offset: no hysteresis, same answer whether the
/// page is scrolling up or down.
pub fn navbar_scrolled(offset: i64, threshold: i64) -> bool {
    offset > threshold
}
