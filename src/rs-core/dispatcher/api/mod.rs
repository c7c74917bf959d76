use crate::{
    bindings::jsAnnounceUnknownCollection,
    controller::{CarouselConfiguration, CarouselController, CarouselEvent, Direction},
    registry::{Collection, MediaItem, Registry},
    utils::logger::LoggerLevel,
    wasm_bindgen, Logger,
};

use super::CarouselDispatcher;

/// Methods exposed to the JavaScript-side.
///
/// Note that these are not the only methods callable by JavaScript. There's
/// also "event_listeners" which as its name point at, should be called when particular
/// events happen on the page. Such "event_listeners" are defined in their own file.
#[wasm_bindgen]
impl CarouselDispatcher {
    /// Create a new `CarouselDispatcher`, already knowing about the built-in collections.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        CarouselDispatcher {
            controller: CarouselController::new(CarouselConfiguration::default()),
            registry: Registry::with_builtin_catalog(),
            volume_indicator_timers: vec![],
            is_observing_visibility: false,
        }
    }

    /// Display the collection identified by `collection_id`, starting from its first item.
    ///
    /// Returns `false` if no collection has that identifier, in which case the current
    /// state is left untouched and `jsAnnounceUnknownCollection` is called.
    pub fn select_collection(&mut self, collection_id: &str) -> bool {
        let collection = match self.registry.get(collection_id) {
            Ok(collection) => collection.clone(),
            Err(err) => {
                Logger::lazy_warn(&|| format!("API: Cannot select collection: {err}"));
                jsAnnounceUnknownCollection(collection_id);
                return false;
            }
        };
        self.start_observing_visibility();
        self.dispatch(CarouselEvent::SelectCollection(collection));
        true
    }

    /// Add a new, empty, collection which can then be filled through `add_item`.
    ///
    /// Returns `false` if a collection with the same identifier already exists.
    pub fn register_collection(&mut self, id: String, name: String, description: String) -> bool {
        match self.registry.register(Collection::new(id, name, description)) {
            Ok(()) => true,
            Err(err) => {
                Logger::lazy_warn(&|| format!("API: Cannot register collection: {err}"));
                false
            }
        }
    }

    /// Append an item at the end of the collection identified by `collection_id`.
    ///
    /// An already-displayed collection is only updated the next time it is selected.
    /// Returns `false` if no collection has that identifier.
    pub fn add_item(
        &mut self,
        collection_id: &str,
        url: String,
        title: String,
        description: String,
    ) -> bool {
        let item = MediaItem::new(url, title, description);
        match self.registry.add_item(collection_id, item) {
            Ok(()) => true,
            Err(err) => {
                Logger::lazy_warn(&|| format!("API: Cannot add item: {err}"));
                false
            }
        }
    }

    /// Go to the previous item, if there's one.
    pub fn previous(&mut self) {
        self.dispatch(CarouselEvent::Navigate(Direction::Previous));
    }

    /// Go to the next item, if there's one.
    pub fn next(&mut self) {
        self.dispatch(CarouselEvent::Navigate(Direction::Next));
    }

    /// Go directly to the item at `index`, e.g. when one of the dots under the carousel
    /// is clicked.
    pub fn go_to(&mut self, index: u32) {
        self.dispatch(CarouselEvent::GoTo(index as usize));
    }

    /// Mute or unmute the active item. Does nothing if it cannot play yet.
    pub fn toggle_mute(&mut self) {
        self.dispatch(CarouselEvent::ToggleMute);
    }

    /// Put the item at `index` in fullscreen. Only possible for the active item.
    pub fn request_fullscreen(&mut self, index: u32) {
        self.dispatch(CarouselEvent::RequestFullscreen {
            index: index as usize,
        });
    }

    pub fn exit_fullscreen(&mut self) {
        self.dispatch(CarouselEvent::ExitFullscreen);
    }

    /// Returns the identifier of the displayed collection, if one.
    pub fn selected_collection_id(&self) -> Option<String> {
        self.controller
            .selected_collection()
            .map(|c| c.id().to_owned())
    }

    /// Returns the index of the active item, `None` if there's none.
    pub fn active_index(&self) -> Option<u32> {
        self.controller.active_index().map(|i| i as u32)
    }

    pub fn item_count(&self) -> u32 {
        self.controller
            .selected_collection()
            .map_or(0, |c| c.len() as u32)
    }

    pub fn can_go_previous(&self) -> bool {
        self.controller.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.controller.can_go_next()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.controller.is_fullscreen()
    }

    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    pub fn is_item_ready(&self, index: u32) -> bool {
        self.controller
            .readiness()
            .get(index as usize)
            .copied()
            .unwrap_or(false)
    }

    pub fn should_play(&self, index: u32) -> bool {
        self.controller.should_play(index as usize)
    }

    pub fn should_be_muted(&self, index: u32) -> bool {
        self.controller.should_be_muted(index as usize)
    }

    pub fn set_tap_max_duration(&mut self, duration: f64) {
        self.update_configuration(|c| c.tap_max_duration = duration);
    }

    pub fn set_tap_tolerance(&mut self, tolerance: f64) {
        self.update_configuration(|c| c.tap_tolerance = tolerance);
    }

    pub fn set_swipe_threshold(&mut self, threshold: f64) {
        self.update_configuration(|c| c.swipe_threshold = threshold);
    }

    /// Update the ratio of the carousel's region which has to be in the viewport for it
    /// to be considered visible.
    pub fn set_visibility_threshold(&mut self, threshold: f64) {
        self.update_configuration(|c| c.visibility_threshold = threshold);
        self.restart_observing_visibility();
    }

    pub fn set_resume_on_visible(&mut self, resume: bool) {
        self.update_configuration(|c| c.resume_on_visible = resume);
    }

    pub fn set_volume_indicator_duration(&mut self, duration: f64) {
        self.update_configuration(|c| c.volume_indicator_duration = duration);
    }

    pub fn set_active_scale(&mut self, scale: f64) {
        self.update_configuration(|c| c.active_scale = scale);
    }

    pub fn set_scale_step(&mut self, step: f64) {
        self.update_configuration(|c| c.scale_step = step);
    }

    pub fn set_scale_floor(&mut self, floor: f64) {
        self.update_configuration(|c| c.scale_floor = floor);
    }

    pub fn set_opacity_step(&mut self, step: f64) {
        self.update_configuration(|c| c.opacity_step = step);
    }

    pub fn set_opacity_floor(&mut self, floor: f64) {
        self.update_configuration(|c| c.opacity_floor = floor);
    }

    pub fn set_log_level(&mut self, level: LoggerLevel) {
        Logger::set_logger_level(level);
    }

    /// Free every resource linked to the carousel. It should be called when the carousel
    /// is removed from the page.
    ///
    /// The `CarouselDispatcher` can still be re-used afterwards by selecting a collection
    /// again.
    pub fn dispose(&mut self) {
        self.dispose_core();
    }
}

impl Default for CarouselDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
