//! Viewport intersection for registered elements.
//!
//! Works like a browser intersection observer reduced to one axis: each
//! element is a vertical span of the document, the root is the viewport
//! shrunk (or grown) by a bottom margin, and an entry is produced whenever
//! an element crosses the visibility threshold.

/// Identifies an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Vertical span of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementBounds {
    pub top: i64,
    pub height: i64,
}

impl ElementBounds {
    pub fn new(top: i64, height: i64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> i64 {
        self.top + self.height
    }
}

/// Visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Scroll offset of the top edge
    pub offset: i64,
    /// Visible height
    pub height: i64,
}

impl Viewport {
    pub fn new(offset: i64, height: i64) -> Self {
        Self { offset, height }
    }
}

/// Threshold and root margin for the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be inside the root (0.0..=1.0)
    pub threshold: f64,
    /// Added to the root's bottom edge; negative values shrink the root so
    /// elements have to travel further into view
    pub bottom_margin: i64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: -50,
        }
    }
}

/// Intersection state change for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub element: ElementId,
    pub is_intersecting: bool,
    /// Visible fraction of the element inside the root
    pub ratio: f64,
}

#[derive(Debug, Clone)]
struct Target {
    id: ElementId,
    bounds: ElementBounds,
    last: Option<bool>,
}

/// Tracks which registered elements intersect the viewport.
///
/// [`compute`](Self::compute) only yields entries for elements whose state
/// changed since the previous call, plus an initial entry for every newly
/// observed element.
#[derive(Debug, Clone, Default)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    targets: Vec<Target>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Start observing an element, or update its bounds if already observed.
    pub fn observe(&mut self, id: ElementId, bounds: ElementBounds) {
        match self.targets.iter_mut().find(|t| t.id == id) {
            Some(target) => target.bounds = bounds,
            None => self.targets.push(Target {
                id,
                bounds,
                last: None,
            }),
        }
    }

    pub fn unobserve(&mut self, id: ElementId) {
        self.targets.retain(|t| t.id != id);
    }

    /// Stop observing every element `keep` rejects.
    pub fn retain(&mut self, mut keep: impl FnMut(ElementId) -> bool) {
        self.targets.retain(|t| keep(t.id));
    }

    pub fn is_observing(&self, id: ElementId) -> bool {
        self.targets.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn disconnect(&mut self) {
        self.targets.clear();
    }

    /// Recompute intersections for `viewport` and return state changes.
    pub fn compute(&mut self, viewport: Viewport) -> Vec<IntersectionEntry> {
        let options = self.options;
        let mut entries = Vec::new();

        for target in &mut self.targets {
            let ratio = intersection_ratio(target.bounds, viewport, options.bottom_margin);
            let is_intersecting = ratio > 0.0 && ratio >= options.threshold;

            if target.last != Some(is_intersecting) {
                target.last = Some(is_intersecting);
                entries.push(IntersectionEntry {
                    element: target.id,
                    is_intersecting,
                    ratio,
                });
            }
        }

        entries
    }
}

/// Fraction of `bounds` inside the root built from `viewport` and the
/// bottom margin.
pub fn intersection_ratio(bounds: ElementBounds, viewport: Viewport, bottom_margin: i64) -> f64 {
    let root_top = viewport.offset;
    let root_bottom = viewport.offset + viewport.height + bottom_margin;
    if root_bottom <= root_top {
        return 0.0;
    }

    if bounds.height <= 0 {
        // zero-height elements count as fully visible while inside the root
        return if bounds.top >= root_top && bounds.top < root_bottom {
            1.0
        } else {
            0.0
        };
    }

    let overlap = bounds.bottom().min(root_bottom) - bounds.top.max(root_top);
    if overlap <= 0 {
        return 0.0;
    }
    (overlap as f64 / bounds.height as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_fully_visible_element_is_one() {
        let r = intersection_ratio(ElementBounds::new(100, 50), Viewport::new(0, 800), -50);
        assert_eq!(r, 1.0);
    }

    #[test]
    fn bottom_margin_hides_element_touching_the_edge() {
        // element starts 30 units above the viewport bottom, inside the margin
        let bounds = ElementBounds::new(770, 200);
        assert_eq!(intersection_ratio(bounds, Viewport::new(0, 800), -50), 0.0);
        assert!(intersection_ratio(bounds, Viewport::new(0, 800), 0) > 0.0);
    }

    #[test]
    fn partial_overlap_ratio() {
        // root bottom = 750, element 700..800 -> half visible
        let r = intersection_ratio(ElementBounds::new(700, 100), Viewport::new(0, 800), -50);
        assert!((r - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn element_above_viewport_is_not_visible() {
        let r = intersection_ratio(ElementBounds::new(0, 100), Viewport::new(500, 800), -50);
        assert_eq!(r, 0.0);
    }

    #[test]
    fn initial_compute_reports_every_element() {
        let mut obs = IntersectionObserver::new(ObserverOptions::default());
        obs.observe(ElementId(0), ElementBounds::new(0, 100));
        obs.observe(ElementId(1), ElementBounds::new(5000, 100));

        let entries = obs.compute(Viewport::new(0, 800));
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_intersecting);
        assert!(!entries[1].is_intersecting);
    }

    #[test]
    fn only_changes_are_reported_afterwards() {
        let mut obs = IntersectionObserver::new(ObserverOptions::default());
        obs.observe(ElementId(0), ElementBounds::new(1000, 100));
        obs.compute(Viewport::new(0, 800));

        assert!(obs.compute(Viewport::new(10, 800)).is_empty());

        let entries = obs.compute(Viewport::new(400, 800));
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);
    }

    #[test]
    fn threshold_requires_ten_percent_visible() {
        let mut obs = IntersectionObserver::new(ObserverOptions {
            threshold: 0.1,
            bottom_margin: 0,
        });
        obs.observe(ElementId(0), ElementBounds::new(795, 100));

        // 5 of 100 units visible
        assert!(!obs.compute(Viewport::new(0, 800))[0].is_intersecting);
        // 10 of 100 units visible
        assert!(obs.compute(Viewport::new(5, 800))[0].is_intersecting);
    }

    #[test]
    fn observe_twice_updates_bounds() {
        let mut obs = IntersectionObserver::default();
        obs.observe(ElementId(3), ElementBounds::new(0, 10));
        obs.observe(ElementId(3), ElementBounds::new(20, 10));
        assert_eq!(obs.len(), 1);
        obs.unobserve(ElementId(3));
        assert!(obs.is_empty());
    }
}
