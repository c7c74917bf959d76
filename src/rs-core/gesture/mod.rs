/// Spatial and temporal thresholds used to classify a pointer track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GestureThresholds {
    /// A track lasting this amount of milliseconds or more is never a tap.
    pub tap_max_duration: f64,
    /// Maximum displacement, in CSS pixels, on each axis for a track to be a tap.
    pub tap_tolerance: f64,
    /// Minimum horizontal displacement, in CSS pixels, for a track to be a swipe.
    pub swipe_threshold: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            tap_max_duration: 300.,
            tap_tolerance: 10.,
            swipe_threshold: 50.,
        }
    }
}

/// Outcome of a completed pointer track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Gesture {
    /// Short and nearly motionless interaction.
    Tap,
    /// Predominantly horizontal movement towards the left: the next item is wanted.
    SwipeNext,
    /// Predominantly horizontal movement towards the right: the previous item is wanted.
    SwipePrevious,
    /// Neither a tap nor a swipe, e.g. a scroll attempt. Nothing should happen.
    Ignored,
}

/// Classify a pointer track from its horizontal displacement `dx` (signed), its vertical
/// displacement `dy` and its `duration` in milliseconds.
pub(crate) fn classify(dx: f64, dy: f64, duration: f64, thresholds: &GestureThresholds) -> Gesture {
    let abs_dx = dx.abs();
    let abs_dy = dy.abs();
    if duration < thresholds.tap_max_duration
        && abs_dx < thresholds.tap_tolerance
        && abs_dy < thresholds.tap_tolerance
    {
        Gesture::Tap
    } else if abs_dx > thresholds.swipe_threshold && abs_dy < abs_dx / 2. {
        if dx > 0. {
            Gesture::SwipePrevious
        } else {
            Gesture::SwipeNext
        }
    } else {
        Gesture::Ignored
    }
}

/// A pointer track currently followed by the `GestureRecognizer`.
#[derive(Clone, Copy, Debug)]
struct PointerTrack {
    start_x: f64,
    start_y: f64,
    start_time: f64,
    /// Largest absolute horizontal displacement seen since the track started.
    max_abs_dx: f64,
    /// Largest absolute vertical displacement seen since the track started.
    max_abs_dy: f64,
}

impl PointerTrack {
    fn record(&mut self, x: f64, y: f64) {
        self.max_abs_dx = self.max_abs_dx.max((x - self.start_x).abs());
        self.max_abs_dy = self.max_abs_dy.max((y - self.start_y).abs());
    }
}

/// Follows a single pointer track and classifies it once it ends.
///
/// Classification only ever happens when the track ends: movements received in-between
/// are only accumulated, so an ambiguous motion never fires anything mid-gesture.
#[derive(Debug)]
pub(crate) struct GestureRecognizer {
    thresholds: GestureThresholds,
    /// `None` when idle.
    track: Option<PointerTrack>,
}

impl GestureRecognizer {
    pub(crate) fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            track: None,
        }
    }

    pub(crate) fn update_thresholds(&mut self, thresholds: GestureThresholds) {
        self.thresholds = thresholds;
    }

    /// Returns `true` if a pointer track is currently followed.
    pub(crate) fn is_tracking(&self) -> bool {
        self.track.is_some()
    }

    /// Begin following a new pointer track, starting at the given coordinates and time.
    ///
    /// A track which was already followed is abandoned without being classified.
    pub(crate) fn on_start(&mut self, x: f64, y: f64, time: f64) {
        self.track = Some(PointerTrack {
            start_x: x,
            start_y: y,
            start_time: time,
            max_abs_dx: 0.,
            max_abs_dy: 0.,
        });
    }

    pub(crate) fn on_move(&mut self, x: f64, y: f64) {
        if let Some(track) = self.track.as_mut() {
            track.record(x, y);
        }
    }

    /// End the current pointer track and classify it.
    ///
    /// Returns `None` if no track was followed.
    pub(crate) fn on_end(&mut self, x: f64, y: f64, time: f64) -> Option<Gesture> {
        let mut track = self.track.take()?;
        track.record(x, y);
        let dx = x - track.start_x;
        let dy = y - track.start_y;
        let gesture = classify(dx, dy, time - track.start_time, &self.thresholds);
        if gesture == Gesture::Tap
            && (track.max_abs_dx >= self.thresholds.tap_tolerance
                || track.max_abs_dy >= self.thresholds.tap_tolerance)
        {
            // Went away then came back to its starting point.
            return Some(Gesture::Ignored);
        }
        Some(gesture)
    }

    /// Abandon the current pointer track, if one, without classifying it.
    pub(crate) fn on_cancel(&mut self) {
        self.track = None;
    }
}
