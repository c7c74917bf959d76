/// Change in the visibility of the carousel's region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VisibilityTransition {
    BecameVisible,
    BecameHidden,
}

/// Turns intersection ratios reported by the host into visibility transitions.
///
/// The region is considered visible once at least `threshold` (a ratio from `0.` to `1.`)
/// of it lies in the viewport.
#[derive(Debug)]
pub(crate) struct VisibilityMonitor {
    threshold: f64,
    is_visible: bool,
}

impl VisibilityMonitor {
    /// Create a new `VisibilityMonitor`.
    ///
    /// The region is assumed visible until a ratio says otherwise.
    pub(crate) fn new(threshold: f64) -> Self {
        Self {
            threshold,
            is_visible: true,
        }
    }

    #[inline(always)]
    pub(crate) fn is_visible(&self) -> bool {
        self.is_visible
    }

    #[inline(always)]
    pub(crate) fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Update the ratio from which the region is considered visible.
    ///
    /// The new threshold is only considered for the next reported ratio.
    pub(crate) fn update_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    /// Consider a newly-reported intersection ratio.
    ///
    /// Returns the corresponding transition, or `None` if the visibility did not change.
    /// A `NaN` ratio is treated as a region out of the viewport.
    pub(crate) fn on_intersection_ratio(&mut self, ratio: f64) -> Option<VisibilityTransition> {
        let is_visible = ratio >= self.threshold;
        if is_visible == self.is_visible {
            return None;
        }
        self.is_visible = is_visible;
        Some(if is_visible {
            VisibilityTransition::BecameVisible
        } else {
            VisibilityTransition::BecameHidden
        })
    }

    /// Go back to the initial state, where the region is assumed visible.
    pub(crate) fn reset(&mut self) {
        self.is_visible = true;
    }
}
