use crate::{gesture::GestureThresholds, layout::LayoutParameters};

const DEFAULT_TAP_MAX_DURATION: f64 = 300.;
const DEFAULT_TAP_TOLERANCE: f64 = 10.;
const DEFAULT_SWIPE_THRESHOLD: f64 = 50.;

/// Inner configuration on which the `CarouselController` relies.
/// Can be updated at any time through the `set_configuration` `CarouselController`'s method.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CarouselConfiguration {
    /// A pointer track lasting this amount of milliseconds or more is never considered as a
    /// tap.
    pub(crate) tap_max_duration: f64,

    /// Maximum displacement, in CSS pixels, on each axis for a pointer track to be
    /// considered as a tap.
    pub(crate) tap_tolerance: f64,

    /// Minimum horizontal displacement, in CSS pixels, for a pointer track to be considered
    /// as a swipe.
    pub(crate) swipe_threshold: f64,

    /// Ratio, from `0` to `1`, of the carousel's region which has to be in the viewport for
    /// the carousel to be considered visible.
    pub(crate) visibility_threshold: f64,

    /// If `true`, the active item starts playing again once the carousel comes back into
    /// view after having been scrolled away.
    ///
    /// If `false`, it stays paused until another item becomes the active one.
    pub(crate) resume_on_visible: bool,

    /// Amount of time, in milliseconds, during which the volume indicator is shown after
    /// the active item has been muted or unmuted.
    pub(crate) volume_indicator_duration: f64,

    /// Scale of the active item.
    pub(crate) active_scale: f64,

    /// Scale removed from an item for each slot separating it from the active one.
    pub(crate) scale_step: f64,

    /// Minimum scale of an item, however far from the active one it is.
    pub(crate) scale_floor: f64,

    /// Opacity removed from an item for each slot separating it from the active one.
    pub(crate) opacity_step: f64,

    /// Minimum opacity of an item, however far from the active one it is.
    pub(crate) opacity_floor: f64,
}

impl CarouselConfiguration {
    pub(crate) fn gesture_thresholds(&self) -> GestureThresholds {
        GestureThresholds {
            tap_max_duration: self.tap_max_duration,
            tap_tolerance: self.tap_tolerance,
            swipe_threshold: self.swipe_threshold,
        }
    }

    pub(crate) fn layout_parameters(&self) -> LayoutParameters {
        LayoutParameters {
            active_scale: self.active_scale,
            scale_step: self.scale_step,
            scale_floor: self.scale_floor,
            opacity_step: self.opacity_step,
            opacity_floor: self.opacity_floor,
        }
    }
}

impl Default for CarouselConfiguration {
    fn default() -> Self {
        let layout = LayoutParameters::default();
        Self {
            tap_max_duration: DEFAULT_TAP_MAX_DURATION,
            tap_tolerance: DEFAULT_TAP_TOLERANCE,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            visibility_threshold: 0.5,
            resume_on_visible: true,
            volume_indicator_duration: 1000.,
            active_scale: layout.active_scale,
            scale_step: layout.scale_step,
            scale_floor: layout.scale_floor,
            opacity_step: layout.opacity_step,
            opacity_floor: layout.opacity_floor,
        }
    }
}
