//! Parallax offsets for the hero banner and its decoration orbs.

/// Hero moves at half the scroll speed, upwards.
pub const HERO_RATE: f64 = -0.5;
/// Rate of the first orb; each following orb moves 0.1 faster.
pub const ORB_BASE_RATE: f64 = -0.2;
pub const ORB_RATE_STEP: f64 = -0.1;

/// Hero displacement for `scroll`.
///
/// Only applies while the hero can still be on screen (scroll offset below
/// the viewport height); `None` means the previous displacement is kept.
pub fn hero_offset(scroll: i64, viewport_height: i64) -> Option<i64> {
    (scroll < viewport_height).then(|| (scroll as f64 * HERO_RATE).round() as i64)
}

/// Displacement of orb `index` for `scroll`.
pub fn orb_offset(scroll: i64, index: usize) -> i64 {
    let rate = ORB_BASE_RATE + ORB_RATE_STEP * index as f64;
    (scroll as f64 * rate).round() as i64
}

/// Parallax state derived from the latest scroll offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parallax {
    pub hero: i64,
    pub orbs: Vec<i64>,
}

impl Parallax {
    pub fn new(orb_count: usize) -> Self {
        Self {
            hero: 0,
            orbs: vec![0; orb_count],
        }
    }

    /// Recompute every offset for `scroll`.
    pub fn update(&mut self, scroll: i64, viewport_height: i64) {
        if let Some(hero) = hero_offset(scroll, viewport_height) {
            self.hero = hero;
        }
        for (i, orb) in self.orbs.iter_mut().enumerate() {
            *orb = orb_offset(scroll, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_moves_at_half_speed_while_visible() {
        assert_eq!(hero_offset(100, 800), Some(-50));
        assert_eq!(hero_offset(0, 800), Some(0));
    }

    #[test]
    fn hero_is_frozen_past_the_first_screen() {
        assert_eq!(hero_offset(800, 800), None);

        let mut p = Parallax::new(0);
        p.update(700, 800);
        p.update(900, 800);
        assert_eq!(p.hero, -350);
    }

    #[test]
    fn orbs_move_progressively_faster() {
        assert_eq!(orb_offset(100, 0), -20);
        assert_eq!(orb_offset(100, 1), -30);
        assert_eq!(orb_offset(100, 2), -40);
    }
}
