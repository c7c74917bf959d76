use crate::{
    bindings::{FullscreenRequestErrorCode, TimerId, TimerReason},
    controller::{CarouselEvent, NavigationKey},
    dispatcher::CarouselDispatcher,
    fullscreen::FullscreenError,
    wasm_bindgen,
};

/// Methods triggered on JavaScript events by the JavaScript code.
#[wasm_bindgen]
impl CarouselDispatcher {
    /// The JS code should call this method when a pointer is pressed on the carousel.
    ///
    /// # Arguments
    ///
    /// * `x` - Horizontal coordinate of the pointer, in CSS pixels.
    ///
    /// * `y` - Vertical coordinate of the pointer, in CSS pixels.
    ///
    /// * `time` - Timestamp of the event, in milliseconds. Only differences between
    ///   timestamps matter, so `performance.now()` or `event.timeStamp` are both fine
    ///   as long as the same clock is used for `on_pointer_up`.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, time: f64) {
        self.dispatch(CarouselEvent::PointerDown { x, y, time });
    }

    /// The JS code should call this method when the pressed pointer moves.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.dispatch(CarouselEvent::PointerMove { x, y });
    }

    /// The JS code should call this method when the pressed pointer is released.
    ///
    /// Depending on the whole track, this may lead to a mute toggle (tap) or to a
    /// navigation (swipe).
    pub fn on_pointer_up(&mut self, x: f64, y: f64, time: f64) {
        self.dispatch(CarouselEvent::PointerUp { x, y, time });
    }

    /// The JS code should call this method when the platform took over the pressed pointer,
    /// e.g. through a `pointercancel` event.
    pub fn on_pointer_cancel(&mut self) {
        self.dispatch(CarouselEvent::PointerCancel);
    }

    /// The JS code should call this method when a key is pressed while the carousel has
    /// the focus.
    ///
    /// # Arguments
    ///
    /// * `key` - The `key` attribute of the corresponding `KeyboardEvent`.
    pub fn on_key_down(&mut self, key: &str) {
        self.dispatch(CarouselEvent::KeyDown(NavigationKey::from_key(key)));
    }

    /// The JS code should call this method once the player created through `jsMountItem`
    /// is able to play.
    ///
    /// # Arguments
    ///
    /// * `generation` - The `generation` given to the `jsMountCollection` call which
    ///   preceded the creation of that player.
    ///
    /// * `index` - The index given to `jsMountItem` for that player.
    pub fn on_item_ready(&mut self, generation: u32, index: u32) {
        self.dispatch(CarouselEvent::ItemReady {
            generation,
            index: index as usize,
        });
    }

    /// The JS code should call this method each time the ratio of the carousel's region
    /// which is in the viewport is observed, after `jsStartObservingVisibility` has been
    /// called.
    pub fn on_intersection_change(&mut self, ratio: f64) {
        self.dispatch(CarouselEvent::IntersectionChange { ratio });
    }

    /// The JS code should call this method each time the page enters or exits fullscreen,
    /// whatever the reason.
    pub fn on_fullscreen_change(&mut self, is_fullscreen: bool) {
        self.dispatch(CarouselEvent::FullscreenChange { is_fullscreen });
    }

    /// The JS code should call this method when a request made through
    /// `jsRequestFullscreen` asynchronously failed.
    pub fn on_fullscreen_error(&mut self, code: FullscreenRequestErrorCode, desc: Option<String>) {
        let message = match FullscreenError::from((code, desc)) {
            FullscreenError::FullscreenUnavailable { message } => message,
            err => err.to_string(),
        };
        self.dispatch(CarouselEvent::FullscreenFailed { message });
    }

    /// The JS code should call this method on mount and each time the width of the
    /// viewport changes.
    ///
    /// # Arguments
    ///
    /// * `width` - The new width, in CSS pixels.
    pub fn on_viewport_resize(&mut self, width: f64) {
        self.dispatch(CarouselEvent::ViewportResize { width });
    }

    /// The JS code should call this method each time a timer started with the `jsTimer`
    /// function finished.
    ///
    /// # Arguments
    ///
    /// * `id` - The `TimerId` given by `jsTimer` when the timer was
    ///   started. This allows the `CarouselDispatcher` to identify which timer
    ///   actually finished.
    ///
    /// * `reason` - The `TimerReason` given by the Rust code when that timer
    ///   was started.
    pub fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) {
        match reason {
            TimerReason::VolumeIndicatorHide => self.on_volume_indicator_timer_ended(id),
        }
    }
}
