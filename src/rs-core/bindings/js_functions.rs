use crate::wasm_bindgen;

/// # js_functions
///
/// This file lists all JavaScript functions that are callable from Rust as well as
/// struct and enumeration used by those functions.

#[wasm_bindgen]
extern "C" {
    // Log the given text in the JavaScript console, with the log level given.
    pub fn jsLog(log_level: LogLevel, log: &str);

    // Starts a timer for the number of milliseconds indicated by the `duration` argument.
    //
    // Once this timer has elapsed, and unless `jsClearTimer` has been called since with
    // the `TimerId` returned by this function, the `on_timer_ended` method of this
    // `CarouselDispatcher` will be called with both the corresponding `TimerId` and `reason`.
    pub fn jsTimer(duration: f64, reason: TimerReason) -> TimerId;

    // Clear a timer started with `jsTimer`.
    pub fn jsClearTimer(id: TimerId);

    // Remove every player currently rendered by the carousel and prepare `item_count`
    // new slots for the collection identified by `generation`, whose `name` and
    // `description` should be displayed above the items.
    //
    // Players created afterwards through `jsMountItem` start paused, at position `0` and
    // with a volume of `0`.
    //
    // The `generation` has to be given back through `on_item_ready` calls, so late
    // readiness notifications from a previous collection can be recognized.
    pub fn jsMountCollection(generation: u32, item_count: u32, name: &str, description: &str);

    // Create the player for the item at `index` of the last mounted collection.
    //
    // Players loop: once the end is reached, playback starts again from position `0`
    // until `jsSetPlaying` pauses it. They are never expected to end.
    pub fn jsMountItem(index: u32, url: &str, title: &str, description: &str);

    // Communicate the visual transform of each rendered item.
    //
    // The given vector is formatted by `format_transforms_for_js`.
    pub fn jsUpdateTransforms(transforms: Vec<f64>);

    // Play or pause the player at the given index.
    pub fn jsSetPlaying(index: u32, playing: bool);

    // Move the playhead of the player at the given index, in seconds.
    pub fn jsSeekItem(index: u32, position: f64);

    // Update the volume of the player at the given index: `0.` for muted, `1.` for audible.
    //
    // This is only ever called on players which announced through `on_item_ready` that
    // they could play.
    pub fn jsSetVolume(index: u32, volume: f64);

    // Ask for the rendering surface of the item at the given index to be put in
    // fullscreen.
    //
    // The actual fullscreen state is then communicated through `on_fullscreen_change`, or
    // `on_fullscreen_error` if the platform asynchronously refused it.
    pub fn jsRequestFullscreen(index: u32) -> FullscreenRequestResult;

    // Exit fullscreen mode if enabled.
    pub fn jsExitFullscreen();

    // Scroll the page so the carousel's region becomes visible.
    pub fn jsScrollIntoView();

    // Announce the item which is now the active one, so its title and description can be
    // displayed.
    pub fn jsAnnounceActiveItem(index: u32, title: &str, description: &str);

    // Announce whether the "previous" and "next" controls can currently be used.
    pub fn jsUpdateNavigationState(can_go_previous: bool, can_go_next: bool);

    // Show or hide the volume indicator displayed over the active item.
    pub fn jsSetVolumeIndicator(visible: bool, muted: bool);

    // Announce that a collection could not be displayed because it was not found.
    pub fn jsAnnounceUnknownCollection(collection_id: &str);

    // Begin observing which ratio of the carousel's region is in the viewport.
    //
    // New ratios are then communicated through `on_intersection_change`, at least each
    // time the ratio crosses the given `threshold`, plus once right after this call.
    pub fn jsStartObservingVisibility(threshold: f64);

    // Stop the observation started with `jsStartObservingVisibility`.
    pub fn jsStopObservingVisibility();
}

/// Errors that can arise when calling the `jsRequestFullscreen` JavaScript function.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenRequestErrorCode {
    /// The platform does not expose any fullscreen API for that element (e.g. iOS Safari
    /// for anything that is not a `<video>` element).
    Unsupported,

    /// The platform refused the request, generally because it was not triggered by a
    /// user gesture or because of a permission policy.
    Denied,

    /// The operation failed because of an unknown error.
    UnknownError,
}

/// Result of calling the `jsRequestFullscreen` JavaScript function.
///
/// Creation of a `FullscreenRequestResult` should only be performed by the JavaScript side
/// through the exposed static constructors.
#[wasm_bindgen]
pub struct FullscreenRequestResult {
    error: Option<(FullscreenRequestErrorCode, Option<String>)>,
}

#[wasm_bindgen]
impl FullscreenRequestResult {
    /// Creates a `FullscreenRequestResult` indicating that the request was sent.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn success() -> Self {
        Self { error: None }
    }

    /// Creates a `FullscreenRequestResult` indicating failure, with the corresponding
    /// error.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn error(err: FullscreenRequestErrorCode, desc: Option<String>) -> Self {
        Self {
            error: Some((err, desc)),
        }
    }
}

impl JsResult<(), FullscreenRequestErrorCode> for FullscreenRequestResult {
    /// Basically unwrap and consume the `FullscreenRequestResult`, converting it into a
    /// Result enum.
    fn result(self) -> Result<(), (FullscreenRequestErrorCode, Option<String>)> {
        if let Some(err) = self.error {
            Err(err)
        } else {
            Ok(())
        }
    }
}

/// Trait allowing to convert "JavaScript Results" as exposed by the JavaScript functions into
/// `Result` structs more idiomatic to Rust.
pub(crate) trait JsResult<T, E> {
    fn result(self) -> Result<T, (E, Option<String>)>;
}

/// "Reason" associated to a timer started by the `CarouselDispatcher`.
///
/// This can then help to identify what the timer was for once resolved.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerReason {
    /// The timer is linked to the volume indicator, which has to be hidden once it
    /// resolves.
    VolumeIndicatorHide = 0,
}

/// Levels with which a log can be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}

/// Identify a pending timer.
pub type TimerId = f64;
