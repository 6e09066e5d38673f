//! Scroll-linked card stacking.
//!
//! Maps a scroll progress signal (0..1 across a container's scrollable
//! height) onto a per-card scale so earlier cards shrink behind later ones.
//!
//! ## Layout rules
//!
//! For card `i` of `n`:
//!
//! ```text
//! range        = (i / n, 1)
//! target_scale = 1 - (n - 1 - i) * shrink_step
//! ```
//!
//! Every card finishes animating at full scroll; the last card never shrinks.
//!
//! ```
//! use gymcoach_core::scroll_stack::{StackConfig, StackLayout};
//!
//! let layout = StackLayout::new(4, StackConfig::default());
//! let scales = layout.scales(0.75);
//! assert!((scales[0] - 0.8875).abs() < 1e-9);
//! assert_eq!(scales[3], 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, CoachResult};

/// Per-card shrink increment used by the landing page showcase.
pub const DEFAULT_SHRINK_STEP: f64 = 0.05;

/// Vertical offset between stacked cards, in pixels.
pub const DEFAULT_CARD_OFFSET_PX: f64 = 25.0;

/// Floor for a card's terminal scale so long stacks never invert.
pub const DEFAULT_MIN_TARGET_SCALE: f64 = 0.1;

/// Presentation constants for a stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackConfig {
    pub shrink_step: f64,
    pub card_offset_px: f64,
    pub min_target_scale: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            shrink_step: DEFAULT_SHRINK_STEP,
            card_offset_px: DEFAULT_CARD_OFFSET_PX,
            min_target_scale: DEFAULT_MIN_TARGET_SCALE,
        }
    }
}

impl StackConfig {
    pub fn with_shrink_step(mut self, step: f64) -> Self {
        self.shrink_step = step;
        self
    }

    /// Reject values that would produce a scale outside (0, 1].
    pub fn validate(&self) -> CoachResult<()> {
        if !self.shrink_step.is_finite() || self.shrink_step < 0.0 {
            return Err(CoachError::InvalidInput(format!(
                "shrink step must be a non-negative number, got {}",
                self.shrink_step
            )));
        }
        if !(self.min_target_scale > 0.0 && self.min_target_scale <= 1.0) {
            return Err(CoachError::InvalidInput(format!(
                "minimum target scale must be in (0, 1], got {}",
                self.min_target_scale
            )));
        }
        if !self.card_offset_px.is_finite() {
            return Err(CoachError::InvalidInput(
                "card offset must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Normalized scroll position through a container.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const START: ScrollProgress = ScrollProgress(0.0);
    pub const END: ScrollProgress = ScrollProgress(1.0);

    /// Clamp any value into `[0, 1]`. NaN is treated as the start.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Progress of a scroll viewport.
    ///
    /// A viewport whose content fits without scrolling reports the start.
    pub fn from_viewport(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        let scrollable = scroll_height - client_height;
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return Self::START;
        }
        Self::new(scroll_top / scrollable)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for ScrollProgress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Sub-interval of scroll progress over which one card animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformRange {
    pub start: f64,
    pub end: f64,
}

impl TransformRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Staggered range for card `index` of `count`: `(index / count, 1)`.
    pub fn for_item(index: usize, count: usize) -> Self {
        if count == 0 {
            return Self::new(0.0, 1.0);
        }
        Self::new(index as f64 / count as f64, 1.0)
    }

    /// Fraction of the range covered at `progress`, clamped to `[0, 1]`.
    pub fn fraction(&self, progress: f64) -> f64 {
        if progress <= self.start {
            return 0.0;
        }
        if progress >= self.end || self.end <= self.start {
            return 1.0;
        }
        (progress - self.start) / (self.end - self.start)
    }
}

/// Terminal scale of card `index` of `count`.
///
/// Earlier cards shrink more; the last card stays at 1.
pub fn target_scale(index: usize, count: usize, step: f64) -> f64 {
    if count == 0 || index >= count {
        return 1.0;
    }
    let buried = (count - 1 - index) as f64;
    1.0 - buried * step
}

/// Linear map of `progress` from `range` onto `[1, target]`, clamped.
pub fn interpolate_scale(progress: f64, range: TransformRange, target: f64) -> f64 {
    let t = range.fraction(ScrollProgress::new(progress).value());
    1.0 + (target - 1.0) * t
}

/// One card's derived animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackItem {
    pub index: usize,
    pub range: TransformRange,
    pub target_scale: f64,
    /// Extra top offset so buried cards peek out above the next one.
    pub offset_px: f64,
}

impl StackItem {
    pub fn scale_at(&self, progress: impl Into<ScrollProgress>) -> f64 {
        interpolate_scale(progress.into().value(), self.range, self.target_scale)
    }
}

/// Ranges and target scales for a fixed number of cards.
///
/// Rebuild whenever the card count changes.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    config: StackConfig,
    items: Vec<StackItem>,
}

impl StackLayout {
    pub fn new(count: usize, config: StackConfig) -> Self {
        let items = (0..count)
            .map(|index| StackItem {
                index,
                range: TransformRange::for_item(index, count),
                target_scale: target_scale(index, count, config.shrink_step)
                    .max(config.min_target_scale),
                offset_px: index as f64 * config.card_offset_px,
            })
            .collect();
        Self { config, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[StackItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&StackItem> {
        self.items.get(index)
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Scale of every card at `progress`, in card order.
    pub fn scales(&self, progress: impl Into<ScrollProgress>) -> Vec<f64> {
        let progress = progress.into();
        self.items.iter().map(|item| item.scale_at(progress)).collect()
    }

    /// Container height in viewport-height units: one screen per card.
    pub fn container_height_vh(&self) -> usize {
        self.items.len() * 100
    }
}
