use serde::Serialize;

/// Latest scroll position and the section it rounds to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollState {
    /// Absolute scroll offset in pixels, never negative.
    pub raw_offset: f64,
    /// `round(raw_offset / section_height)`.
    pub section_index: usize,
}

/// Emitted when a scroll event moves the tracker into another section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionChange {
    /// Section before the event.
    pub from: usize,
    /// Section after the event.
    pub to: usize,
}

impl SectionChange {
    /// Sections jumped over without being landed on, in crossing order.
    pub fn crossed(&self) -> impl Iterator<Item = usize> {
        // At most one of the two ranges is non-empty.
        let forward = self.from.saturating_add(1)..self.to;
        let backward = (self.to.saturating_add(1)..self.from).rev();
        forward.chain(backward)
    }
}

/// Tracks the page scroll offset and detects section crossings.
///
/// Only the latest offset matters; events may arrive in any order and at any
/// rate. One event yields at most one [`SectionChange`], even when it jumps
/// several sections at once.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    state: ScrollState,
    section_height: f64,
}

impl ScrollTracker {
    /// Tracker at offset 0 / section 0.
    ///
    /// A non-positive or non-finite `section_height` falls back to 1 pixel.
    #[must_use]
    pub fn new(section_height: f64) -> Self {
        Self {
            state: ScrollState {
                raw_offset: 0.0,
                section_index: 0,
            },
            section_height: sanitize_height(section_height),
        }
    }

    /// Current scroll state.
    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Latest raw offset.
    #[must_use]
    pub fn raw_offset(&self) -> f64 {
        self.state.raw_offset
    }

    /// Current section index.
    #[must_use]
    pub fn section_index(&self) -> usize {
        self.state.section_index
    }

    /// Height of one section in pixels.
    #[must_use]
    pub fn section_height(&self) -> f64 {
        self.section_height
    }

    /// Change the section height (viewport resize).
    ///
    /// The section index is left alone until the next scroll event.
    pub fn set_section_height(&mut self, height: f64) {
        self.section_height = sanitize_height(height);
    }

    /// Section a given offset rounds to.
    #[must_use]
    pub fn section_for(&self, offset: f64) -> usize {
        (offset.max(0.0) / self.section_height).round() as usize
    }

    /// Apply one scroll event.
    ///
    /// Negative offsets clamp to zero; non-finite offsets are dropped.
    pub fn apply(&mut self, offset: f64) -> Option<SectionChange> {
        if !offset.is_finite() {
            log::debug!("ignoring non-finite scroll offset {offset}");
            return None;
        }
        let offset = if offset < 0.0 {
            log::debug!("clamping negative scroll offset {offset}");
            0.0
        } else {
            offset
        };

        self.state.raw_offset = offset;
        let new_section = self.section_for(offset);
        if new_section == self.state.section_index {
            return None;
        }

        let change = SectionChange {
            from: self.state.section_index,
            to: new_section,
        };
        self.state.section_index = new_section;
        log::debug!("section {} -> {}", change.from, change.to);
        Some(change)
    }
}

fn sanitize_height(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        log::warn!("invalid section height {height}, using 1px");
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f64 = 900.0;

    #[test]
    fn starts_at_section_zero() {
        let tracker = ScrollTracker::new(HEIGHT);
        assert_eq!(tracker.raw_offset(), 0.0);
        assert_eq!(tracker.section_index(), 0);
    }

    #[test]
    fn invariant_holds_after_every_update() {
        let mut tracker = ScrollTracker::new(HEIGHT);
        let offsets = [
            0.0, 10.0, 449.0, 450.0, 451.0, 899.0, 2250.0, 1349.9, 1350.0,
            7.0, 100_000.0, 0.0, 3.5e6,
        ];
        for offset in offsets {
            let _ = tracker.apply(offset);
            let expected = (tracker.raw_offset() / HEIGHT).round() as usize;
            assert_eq!(tracker.section_index(), expected, "offset {offset}");
        }
    }

    #[test]
    fn single_step_emits_once() {
        let mut tracker = ScrollTracker::new(HEIGHT);
        assert_eq!(tracker.apply(200.0), None);
        assert_eq!(
            tracker.apply(600.0),
            Some(SectionChange { from: 0, to: 1 })
        );
        assert_eq!(tracker.apply(700.0), None);
        assert_eq!(tracker.apply(HEIGHT), None);
        assert_eq!(
            tracker.apply(100.0),
            Some(SectionChange { from: 1, to: 0 })
        );
    }

    #[test]
    fn jump_emits_only_arrival() {
        let mut tracker = ScrollTracker::new(HEIGHT);
        let change = tracker.apply(2.0 * HEIGHT);
        assert_eq!(change, Some(SectionChange { from: 0, to: 2 }));
        assert_eq!(tracker.apply(2.0 * HEIGHT + 5.0), None);
    }

    #[test]
    fn half_rounds_up() {
        let mut tracker = ScrollTracker::new(100.0);
        let _ = tracker.apply(50.0);
        assert_eq!(tracker.section_index(), 1);
        let _ = tracker.apply(149.999);
        assert_eq!(tracker.section_index(), 1);
    }

    #[test]
    fn negative_offset_clamps_to_zero() {
        let mut tracker = ScrollTracker::new(HEIGHT);
        let _ = tracker.apply(HEIGHT);
        let change = tracker.apply(-40.0);
        assert_eq!(change, Some(SectionChange { from: 1, to: 0 }));
        assert_eq!(tracker.raw_offset(), 0.0);
    }

    #[test]
    fn non_finite_offset_is_ignored() {
        let mut tracker = ScrollTracker::new(HEIGHT);
        let _ = tracker.apply(HEIGHT);
        assert_eq!(tracker.apply(f64::NAN), None);
        assert_eq!(tracker.apply(f64::INFINITY), None);
        assert_eq!(tracker.raw_offset(), HEIGHT);
        assert_eq!(tracker.section_index(), 1);
    }

    #[test]
    fn resize_defers_reevaluation_to_next_event() {
        let mut tracker = ScrollTracker::new(HEIGHT);
        let _ = tracker.apply(HEIGHT);
        tracker.set_section_height(HEIGHT / 2.0);
        assert_eq!(tracker.section_index(), 1);
        assert_eq!(
            tracker.apply(HEIGHT),
            Some(SectionChange { from: 1, to: 2 })
        );
    }

    #[test]
    fn bad_height_falls_back() {
        let tracker = ScrollTracker::new(0.0);
        assert_eq!(tracker.section_height(), 1.0);
        let tracker = ScrollTracker::new(f64::NAN);
        assert_eq!(tracker.section_height(), 1.0);
    }

    #[test]
    fn crossed_sections_in_order() {
        let up = SectionChange { from: 0, to: 3 };
        assert_eq!(up.crossed().collect::<Vec<_>>(), vec![1, 2]);
        let down = SectionChange { from: 4, to: 1 };
        assert_eq!(down.crossed().collect::<Vec<_>>(), vec![3, 2]);
        let step = SectionChange { from: 1, to: 2 };
        assert_eq!(step.crossed().count(), 0);
    }
}
