//! Smooth scrolling between document offsets.

use std::time::Duration;

/// How long an anchor jump takes.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);

/// Eased transition from one scroll offset to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnimation {
    from: i64,
    to: i64,
    start: Duration,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: i64, to: i64, start: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    pub fn target(&self) -> i64 {
        self.to
    }

    pub fn is_done(&self, now: Duration) -> bool {
        now >= self.start + self.duration
    }

    /// Offset at `now`. Lands exactly on the target once done.
    pub fn offset_at(&self, now: Duration) -> i64 {
        if self.is_done(now) || self.duration.is_zero() {
            return self.to;
        }
        let t = now.saturating_sub(self.start).as_secs_f64() / self.duration.as_secs_f64();
        let eased = ease_in_out_cubic(t.clamp(0.0, 1.0));
        self.from + ((self.to - self.from) as f64 * eased).round() as i64
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Scroll position of the page viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: i64,
    max: i64,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    pub fn new(max: i64) -> Self {
        Self {
            offset: 0,
            max: max.max(0),
            animation: None,
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Update the scroll limit after a relayout, clamping the offset.
    pub fn set_max(&mut self, max: i64) {
        self.max = max.max(0);
        self.offset = self.offset.clamp(0, self.max);
    }

    /// Jump directly to `offset`. Cancels any animation. Returns whether
    /// the offset changed.
    pub fn jump_to(&mut self, offset: i64) -> bool {
        self.animation = None;
        let next = offset.clamp(0, self.max);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    pub fn scroll_by(&mut self, delta: i64) -> bool {
        let base = self.animation.map_or(self.offset, |a| a.target());
        self.jump_to(base + delta)
    }

    /// Start an eased scroll to `offset`.
    pub fn animate_to(&mut self, offset: i64, now: Duration) {
        let to = offset.clamp(0, self.max);
        self.animation = Some(ScrollAnimation::new(
            self.offset,
            to,
            now,
            SMOOTH_SCROLL_DURATION,
        ));
    }

    /// Advance a running animation. Returns whether the offset changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let next = animation.offset_at(now);
        if animation.is_done(now) {
            self.animation = None;
        }
        let changed = next != self.offset;
        self.offset = next;
        changed
    }
}
