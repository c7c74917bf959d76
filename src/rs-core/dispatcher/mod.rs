use crate::{bindings::TimerId, controller::CarouselController, registry::Registry, wasm_bindgen};

mod api;
mod core;
mod event_listeners;

/// The `CarouselDispatcher` is the carousel Interface exported to the JavaScript-side,
/// providing an API to display collections of media and to signal what happens on the
/// page.
///
/// It translates each call into a `CarouselEvent` for its `CarouselController` and
/// applies the resulting `Directive`s through the JavaScript functions imported in
/// `bindings`.
#[wasm_bindgen]
pub struct CarouselDispatcher {
    /// State machine deciding what should be displayed and played.
    controller: CarouselController,

    /// Every collection which can be selected, by identifier.
    registry: Registry,

    /// Timers started to hide the volume indicator, alongside the token they should
    /// give back to the `CarouselController` once elapsed.
    volume_indicator_timers: Vec<(TimerId, u32)>,

    /// `true` once `jsStartObservingVisibility` has been called and until
    /// `jsStopObservingVisibility` is.
    is_observing_visibility: bool,
}
