//! Scroll and visibility math shared by every section. Nothing in here
//! touches the DOM; the hooks in `hooks.rs` feed it measurements.

/// Page offset past which the header switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// A section counts as current once its top edge is this close to the
/// viewport top.
pub const ACTIVE_SECTION_OFFSET: f64 = 150.0;

pub fn is_scrolled_past(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Progress through a section from the moment its top edge enters at the
/// bottom of the viewport until its bottom edge leaves at the top.
///
/// `top` is the viewport-relative top of the section. Returns a value in
/// `[0, 1]`; a zero-sized span counts as fully scrolled once passed.
pub fn section_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + height;
    if span <= 0.0 {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    clamp_unit((viewport_height - top) / span)
}

/// Linearly maps `value` from `[start, end]` onto `[0, 1]`, clamped.
pub fn map_range(value: f64, start: f64, end: f64) -> f64 {
    if (end - start).abs() < f64::EPSILON {
        return if value >= end { 1.0 } else { 0.0 };
    }
    clamp_unit((value - start) / (end - start))
}

/// Delay before the `index`-th item of a list starts its reveal.
pub fn stagger_delay(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}

/// One-shot visibility latch. The first visible observation flips it and
/// every later observation is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    triggered: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one visibility observation. Returns `true` only for the
    /// observation that fires the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.triggered || !visible {
            return false;
        }
        self.triggered = true;
        true
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }
}

/// Per-section scroll state. Owned by one section, never shared.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub has_entered_viewport: bool,
    pub scroll_progress: f64,
}

impl ScrollState {
    /// Recomputes progress from fresh measurements. Entry is latched,
    /// progress is not.
    pub fn update(&mut self, top: f64, height: f64, viewport_height: f64) {
        if top < viewport_height && top + height > 0.0 {
            self.has_entered_viewport = true;
        }
        self.scroll_progress = section_progress(top, height, viewport_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;
    const HEIGHT: f64 = 1200.0;

    #[test]
    fn threshold_boundary_is_exclusive() {
        assert!(!is_scrolled_past(0.0));
        assert!(!is_scrolled_past(50.0));
        assert!(is_scrolled_past(50.5));
        assert!(is_scrolled_past(51.0));
    }

    #[test]
    fn progress_hits_both_boundaries() {
        // Section top at the bottom of the viewport: not started.
        assert_eq!(section_progress(VH, HEIGHT, VH), 0.0);
        // Section bottom at the top of the viewport: done.
        assert_eq!(section_progress(-HEIGHT, HEIGHT, VH), 1.0);
        // Far outside either side stays clamped.
        assert_eq!(section_progress(VH * 3.0, HEIGHT, VH), 0.0);
        assert_eq!(section_progress(-HEIGHT * 3.0, HEIGHT, VH), 1.0);
    }

    #[test]
    fn progress_is_monotonic_and_reversible() {
        let tops: Vec<f64> = (0..=40).map(|i| VH - i as f64 * 50.0).collect();
        let forward: Vec<f64> = tops.iter().map(|top| section_progress(*top, HEIGHT, VH)).collect();
        assert!(forward.windows(2).all(|w| w[1] >= w[0]));

        let backward: Vec<f64> = tops.iter().rev().map(|top| section_progress(*top, HEIGHT, VH)).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(backward, reversed);
    }

    #[test]
    fn degenerate_span_does_not_divide_by_zero() {
        assert_eq!(section_progress(10.0, 0.0, 0.0), 0.0);
        assert_eq!(section_progress(-10.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn map_range_clamps() {
        assert_eq!(map_range(0.05, 0.1, 0.6), 0.0);
        assert_eq!(map_range(0.1, 0.1, 0.6), 0.0);
        assert!((map_range(0.35, 0.1, 0.6) - 0.5).abs() < 1e-9);
        assert_eq!(map_range(0.6, 0.1, 0.6), 1.0);
        assert_eq!(map_range(0.9, 0.1, 0.6), 1.0);
        assert_eq!(map_range(f64::NAN, 0.1, 0.6), 0.0);
    }

    #[test]
    fn stagger_grows_per_index() {
        assert_eq!(stagger_delay(0, 0.1), 0.0);
        assert!((stagger_delay(3, 0.2) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.is_triggered());

        assert!(latch.observe(true));
        assert!(latch.is_triggered());

        // Leaving and re-entering the viewport changes nothing.
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_triggered());
    }

    #[test]
    fn scroll_state_latches_entry_but_not_progress() {
        let mut state = ScrollState::default();
        state.update(VH + 100.0, HEIGHT, VH);
        assert!(!state.has_entered_viewport);
        assert_eq!(state.scroll_progress, 0.0);

        state.update(0.0, HEIGHT, VH);
        assert!(state.has_entered_viewport);
        let midway = state.scroll_progress;
        assert!(midway > 0.0 && midway < 1.0);

        state.update(VH + 100.0, HEIGHT, VH);
        assert!(state.has_entered_viewport);
        assert_eq!(state.scroll_progress, 0.0);
    }
}
