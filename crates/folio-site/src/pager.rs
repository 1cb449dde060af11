//! Discrete index pager for the client logo strip and project screenshots.
//!
//! The pager holds a start index into a list of `count` items of which
//! `per_view` are visible at once. The index always stays within
//! `0..=max_index()`, where `max_index() = count.saturating_sub(per_view)`.

use std::time::Duration;

/// Delay before re-measuring when layout is not ready yet.
pub const MEASURE_RETRY: Duration = Duration::from_millis(50);

/// What to do when navigation runs past either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Jump to the opposite end.
    Wrap,
    /// Stay at the end.
    Clamp,
}

/// Result of computing a slider offset from measured widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionUpdate {
    /// Horizontal translation in pixels (zero or negative).
    Offset(f64),
    /// Layout has not happened yet; measure again after the delay.
    RetryAfter(Duration),
}

/// Items visible at once in the client strip for a viewport width.
#[must_use]
pub fn per_view_for_width(width: u32) -> usize {
    match width {
        1024.. => 5,
        768.. => 4,
        640.. => 3,
        _ => 2,
    }
}

/// Start index over a windowed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscretePager {
    index: usize,
    per_view: usize,
    count: usize,
}

impl DiscretePager {
    #[must_use]
    pub fn new(count: usize, per_view: usize) -> Self {
        Self {
            index: 0,
            per_view: per_view.max(1),
            count,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn per_view(&self) -> usize {
        self.per_view
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Largest valid start index.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.count.saturating_sub(self.per_view)
    }

    /// Whether there are more items than fit in one view.
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.count > self.per_view
    }

    /// Move by `step` items.
    pub fn advance(&mut self, step: isize, overflow: Overflow) -> usize {
        let max = self.max_index();
        let target = self.index.checked_add_signed(step);
        self.index = match (target, overflow) {
            (Some(target), _) if target <= max => target,
            (None, Overflow::Wrap) => max,
            (Some(_), Overflow::Wrap) => 0,
            (None, Overflow::Clamp) => 0,
            (Some(_), Overflow::Clamp) => max,
        };
        self.index
    }

    /// Autoplay step: next item, or back to the start from the end.
    pub fn autoplay(&mut self) -> usize {
        self.index = if self.index >= self.max_index() {
            0
        } else {
            self.index + 1
        };
        self.index
    }

    /// Jump to `index`. Out of range requests are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index > self.max_index() {
            return false;
        }
        self.index = index;
        true
    }

    /// Replace the list with `count` items and start over.
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.index = 0;
    }

    /// Change the number of visible items, keeping the index in range.
    pub fn set_per_view(&mut self, per_view: usize) {
        self.per_view = per_view.max(1);
        self.index = self.index.min(self.max_index());
    }

    /// Recalculate `per_view` from a viewport width.
    pub fn recompute_viewport(&mut self, width: u32) {
        self.set_per_view(per_view_for_width(width));
    }

    /// One flag per valid start index, `true` for the current one. Empty
    /// when everything fits in one view.
    #[must_use]
    pub fn dots(&self) -> Vec<bool> {
        if !self.overflows() {
            return Vec::new();
        }
        (0..=self.max_index()).map(|i| i == self.index).collect()
    }

    /// Offset for a slider that moves one item plus `gap` per step.
    #[must_use]
    pub fn slide_offset(&self, container_width: f64, item_width: f64, gap: f64) -> PositionUpdate {
        if container_width <= 0.0 || item_width <= 0.0 {
            return PositionUpdate::RetryAfter(MEASURE_RETRY);
        }
        #[allow(clippy::cast_precision_loss)]
        let offset = -(self.index as f64 * (item_width + gap));
        PositionUpdate::Offset(offset)
    }

    /// Offset for a strip whose last item must end flush with the container.
    #[must_use]
    pub fn strip_offset(&self, item_width: f64, track_width: f64, container_width: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let offset = -(self.index as f64 * item_width);
        let min = -(track_width - container_width).max(0.0);
        offset.max(min).min(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamp_stays_in_range() {
        let mut pager = DiscretePager::new(5, 3);
        assert_eq!(pager.max_index(), 2);
        assert_eq!(pager.advance(-1, Overflow::Clamp), 0);
        assert_eq!(pager.advance(1, Overflow::Clamp), 1);
        assert_eq!(pager.advance(1, Overflow::Clamp), 2);
        assert_eq!(pager.advance(1, Overflow::Clamp), 2);
    }

    #[test]
    fn test_wrap_jumps_to_opposite_end() {
        let mut pager = DiscretePager::new(7, 5);
        assert_eq!(pager.advance(-1, Overflow::Wrap), 2);
        assert_eq!(pager.advance(1, Overflow::Wrap), 0);
    }

    #[test]
    fn test_invariant_holds_for_any_sequence() {
        for count in 0..8 {
            for per_view in 1..6 {
                let mut pager = DiscretePager::new(count, per_view);
                for (i, step) in [1, 1, -1, 1, 1, 1, -1, -1, -1, 1, 1, 1, 1].iter().enumerate() {
                    let overflow = if i % 2 == 0 { Overflow::Wrap } else { Overflow::Clamp };
                    pager.advance(*step, overflow);
                    assert!(pager.index() <= count.saturating_sub(per_view));
                }
                pager.autoplay();
                assert!(pager.index() <= pager.max_index());
            }
        }
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let mut pager = DiscretePager::new(5, 3);
        assert!(pager.go_to(2));
        assert!(!pager.go_to(3));
        assert_eq!(pager.index(), 2);
    }

    #[test]
    fn test_autoplay_wraps_at_end() {
        let mut pager = DiscretePager::new(6, 5);
        assert_eq!(pager.autoplay(), 1);
        assert_eq!(pager.autoplay(), 0);

        let mut empty = DiscretePager::new(0, 5);
        assert_eq!(empty.autoplay(), 0);
    }

    #[test]
    fn test_recompute_viewport_reclamps() {
        let mut pager = DiscretePager::new(8, 2);
        pager.go_to(6);
        pager.recompute_viewport(1200);
        assert_eq!(pager.per_view(), 5);
        assert_eq!(pager.index(), 3);
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(per_view_for_width(320), 2);
        assert_eq!(per_view_for_width(640), 3);
        assert_eq!(per_view_for_width(800), 4);
        assert_eq!(per_view_for_width(1024), 5);
    }

    #[test]
    fn test_dots() {
        let mut pager = DiscretePager::new(5, 3);
        pager.go_to(1);
        assert_eq!(pager.dots(), vec![false, true, false]);
        assert!(DiscretePager::new(3, 3).dots().is_empty());
    }

    #[test]
    fn test_slide_offset_retries_before_layout() {
        let mut pager = DiscretePager::new(5, 3);
        assert_eq!(
            pager.slide_offset(0.0, 200.0, 16.0),
            PositionUpdate::RetryAfter(MEASURE_RETRY)
        );
        pager.go_to(2);
        assert_eq!(
            pager.slide_offset(900.0, 200.0, 16.0),
            PositionUpdate::Offset(-432.0)
        );
    }

    #[test]
    fn test_strip_offset_clamps_to_track() {
        let mut pager = DiscretePager::new(6, 4);
        pager.go_to(2);
        assert!((pager.strip_offset(100.0, 600.0, 450.0) - -150.0).abs() < f64::EPSILON);
        pager.go_to(1);
        assert!((pager.strip_offset(100.0, 600.0, 450.0) - -100.0).abs() < f64::EPSILON);
        assert!((pager.strip_offset(100.0, 300.0, 450.0)).abs() < f64::EPSILON);
    }
}
