//! Property-based tests for the scroll stack layout
//!
//! Uses proptest to check the mapper's invariants over arbitrary card counts,
//! shrink steps and scroll positions.

use gymcoach_core::scroll_stack::{
    interpolate_scale, target_scale, StackConfig, StackLayout, TransformRange,
};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Card counts seen in practice, plus some long stacks
fn count_strategy() -> impl Strategy<Value = usize> {
    1usize..64
}

/// Shrink steps small enough that no target scale hits the floor
fn step_for(count: usize) -> impl Strategy<Value = f64> {
    let max = 0.9 / count.max(1) as f64;
    0.0..max
}

fn progress_strategy() -> impl Strategy<Value = f64> {
    -0.5f64..1.5
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Ranges start at i/n, always end at 1, and start strictly before they end
    #[test]
    fn ranges_are_staggered(count in count_strategy()) {
        for i in 0..count {
            let range = TransformRange::for_item(i, count);
            prop_assert!((range.start - i as f64 / count as f64).abs() < EPS);
            prop_assert_eq!(range.end, 1.0);
            prop_assert!(range.start < range.end);
        }
    }

    /// Scale always lies between the target and 1
    #[test]
    fn scale_stays_within_bounds(
        (count, step) in count_strategy().prop_flat_map(|n| (Just(n), step_for(n))),
        progress in progress_strategy(),
    ) {
        let layout = StackLayout::new(count, StackConfig::default().with_shrink_step(step));
        for (item, scale) in layout.items().iter().zip(layout.scales(progress)) {
            prop_assert!(scale <= 1.0 + EPS);
            prop_assert!(scale >= item.target_scale - EPS);
        }
    }

    /// Scale never grows as progress increases
    #[test]
    fn scale_is_monotonic(
        start in 0.0f64..0.99,
        target in 0.1f64..1.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let range = TransformRange::new(start, 1.0);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(interpolate_scale(hi, range, target) <= interpolate_scale(lo, range, target) + EPS);
    }

    /// Earlier cards never end larger than later ones; the last never shrinks
    #[test]
    fn earlier_cards_shrink_more(
        (count, step) in count_strategy().prop_flat_map(|n| (Just(n), step_for(n))),
    ) {
        for i in 1..count {
            prop_assert!(target_scale(i - 1, count, step) <= target_scale(i, count, step) + EPS);
        }
        prop_assert_eq!(target_scale(count - 1, count, step), 1.0);
    }

    /// Progress outside [0, 1] behaves exactly like the nearest edge
    #[test]
    fn out_of_range_progress_clamps(count in count_strategy(), overshoot in 0.0f64..10.0) {
        let layout = StackLayout::new(count, StackConfig::default());
        prop_assert_eq!(layout.scales(-overshoot), layout.scales(0.0));
        prop_assert_eq!(layout.scales(1.0 + overshoot), layout.scales(1.0));
    }

    /// Evaluation depends only on the current progress, not on scroll history
    #[test]
    fn scrolling_is_symmetric(
        count in count_strategy(),
        path in prop::collection::vec(0.0f64..1.0, 1..20),
        probe in 0.0f64..1.0,
    ) {
        let layout = StackLayout::new(count, StackConfig::default());
        let fresh = layout.scales(probe);
        for p in path {
            let _ = layout.scales(p);
        }
        prop_assert_eq!(layout.scales(probe), fresh);
    }
}

// ============================================================================
// Worked Examples
// ============================================================================

#[test]
fn four_cards_at_three_quarters() {
    let layout = StackLayout::new(4, StackConfig::default());
    let scales = layout.scales(0.75);

    // Card 0: 3/4 of the way from 1.0 to 0.85
    assert!((scales[0] - 0.8875).abs() < EPS);
    // Card 3 sits exactly at its range start
    assert_eq!(scales[3], 1.0);
}

#[test]
fn midpoint_is_average_of_endpoints() {
    for (i, count) in [(0usize, 4usize), (1, 4), (2, 5)] {
        let layout = StackLayout::new(count, StackConfig::default());
        let item = layout.items()[i];
        let mid = (item.range.start + item.range.end) / 2.0;
        let expected = (1.0 + item.target_scale) / 2.0;
        assert!((item.scale_at(mid) - expected).abs() < EPS);
    }
}
