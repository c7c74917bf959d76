use crate::{
    fullscreen::FullscreenCoordinator,
    gesture::GestureRecognizer,
    layout::{compute_transforms, ItemTransform},
    playback::PlaybackResourceManager,
    registry::{Collection, MediaItem},
    visibility::VisibilityMonitor,
};

pub(crate) use configuration::CarouselConfiguration;

mod configuration;
mod core;
#[cfg(test)]
mod tests;

/// Viewport width assumed until the host communicates the real one, in CSS pixels.
const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.;

/// Direction of a step-by-step navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Previous,
    Next,
}

/// Keyboard keys having a meaning for the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NavigationKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl NavigationKey {
    /// Convert the value of a JavaScript `KeyboardEvent.prototype.key` attribute.
    pub(crate) fn from_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => NavigationKey::ArrowLeft,
            "ArrowRight" => NavigationKey::ArrowRight,
            _ => NavigationKey::Other,
        }
    }
}

/// Everything that may happen to the carousel, be it a user interaction or a notification
/// from the page.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CarouselEvent {
    /// Display the given `Collection`, from its first item.
    SelectCollection(Collection),
    /// Go to the previous or next item.
    Navigate(Direction),
    /// Go directly to the item at the given index.
    GoTo(usize),
    /// A key has been pressed.
    KeyDown(NavigationKey),
    /// Mute or unmute the active item.
    ToggleMute,
    /// A pointer track started at the given coordinates, `time` being in milliseconds.
    PointerDown { x: f64, y: f64, time: f64 },
    /// The tracked pointer moved.
    PointerMove { x: f64, y: f64 },
    /// The tracked pointer has been released.
    PointerUp { x: f64, y: f64, time: f64 },
    /// The tracked pointer has been taken over by the platform (e.g. for scrolling).
    PointerCancel,
    /// The player at `index`, mounted for the collection identified by `generation`, is
    /// now able to play.
    ItemReady { generation: u32, index: usize },
    /// A new ratio of the carousel's region is in the viewport.
    IntersectionChange { ratio: f64 },
    /// Put the item at `index` in fullscreen.
    RequestFullscreen { index: usize },
    /// Exit fullscreen.
    ExitFullscreen,
    /// The platform reported a fullscreen change.
    FullscreenChange { is_fullscreen: bool },
    /// The last fullscreen request has been refused by the platform.
    FullscreenFailed { message: String },
    /// The viewport's width, in CSS pixels, changed.
    ViewportResize { width: f64 },
    /// The timer scheduled through `Directive::ScheduleVolumeIndicatorHide` with the same
    /// `token` elapsed.
    VolumeIndicatorElapsed { token: u32 },
    /// The carousel is being removed from the page.
    Unmount,
}

/// Action that the page should perform as a consequence of a `CarouselEvent`.
///
/// Directives are produced in the order in which they should be applied.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Directive {
    /// Remove all current players and create one per item, all paused at position `0`
    /// and silent. `name` and `description` are displayed alongside the items.
    MountCollection {
        generation: u32,
        name: String,
        description: String,
        items: Vec<MediaItem>,
    },
    /// Render every item with the given transform.
    UpdateTransforms(Vec<ItemTransform>),
    /// Play or pause the player at `index`.
    SetPlaying { index: usize, playing: bool },
    /// Move the playhead of the player at `index`, in seconds.
    Seek { index: usize, position: f64 },
    /// Set the volume of the player at `index`. Only produced for ready players.
    SetVolume { index: usize, volume: f64 },
    /// Put the rendering surface of the item at `index` in fullscreen.
    RequestFullscreen { index: usize },
    /// Exit fullscreen.
    ExitFullscreen,
    /// Scroll the page so the carousel comes into view.
    ScrollIntoView,
    /// The item at `index` is now the active one.
    AnnounceActiveItem {
        index: usize,
        title: String,
        description: String,
    },
    /// Enable or disable the previous and next controls.
    UpdateNavigationState {
        can_go_previous: bool,
        can_go_next: bool,
    },
    /// Show the volume indicator, with the glyph corresponding to `muted`.
    ShowVolumeIndicator { muted: bool },
    /// Hide the volume indicator.
    HideVolumeIndicator,
    /// Send back `CarouselEvent::VolumeIndicatorElapsed` with the same `token` after
    /// `delay` milliseconds, replacing any timer previously scheduled for it.
    ScheduleVolumeIndicatorHide { token: u32, delay: f64 },
    /// Clear the timer scheduled through `ScheduleVolumeIndicatorHide`, if one.
    CancelVolumeIndicatorHide,
}

/// Transient indicator shown over the active item when its audio is toggled.
#[derive(Clone, Copy, Debug, Default)]
struct VolumeIndicator {
    is_visible: bool,
    /// Identify the last scheduled hide, only that one should have an effect.
    token: u32,
}

/// State machine behind the carousel.
///
/// Receives `CarouselEvent`s through `handle` and produces the `Directive`s that the page
/// should then apply. It never talks to the page by itself.
#[derive(Debug)]
pub(crate) struct CarouselController {
    config: CarouselConfiguration,

    /// The `Collection` currently displayed. `None` until one is selected.
    collection: Option<Collection>,

    /// Index of the active item in `collection`.
    ///
    /// Always inside the collection's bounds, except for empty collections where it
    /// stays at `0` without any item being active.
    current_index: usize,

    /// Incremented each time a `Collection` is selected. Readiness notifications coming
    /// from a previous generation are ignored.
    generation: u32,

    /// `true` once a first `Collection` has been selected since mount.
    has_selected: bool,

    playback: PlaybackResourceManager,

    gestures: GestureRecognizer,

    visibility: VisibilityMonitor,

    fullscreen: FullscreenCoordinator,

    /// If `true`, the active item has been paused because the carousel went out of view
    /// and was not resumed since.
    is_suspended: bool,

    volume_indicator: VolumeIndicator,

    /// Last known viewport width, in CSS pixels.
    viewport_width: f64,
}

impl CarouselController {
    pub(crate) fn new(config: CarouselConfiguration) -> Self {
        Self {
            gestures: GestureRecognizer::new(config.gesture_thresholds()),
            visibility: VisibilityMonitor::new(config.visibility_threshold),
            config,
            collection: None,
            current_index: 0,
            generation: 0,
            has_selected: false,
            playback: PlaybackResourceManager::new(0),
            fullscreen: FullscreenCoordinator::new(),
            is_suspended: false,
            volume_indicator: VolumeIndicator::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }

    /// Process a single `CarouselEvent` and return the resulting `Directive`s.
    pub(crate) fn handle(&mut self, event: CarouselEvent) -> Vec<Directive> {
        let mut directives = vec![];
        match event {
            CarouselEvent::SelectCollection(collection) => {
                self.select_collection_core(collection, &mut directives)
            }
            CarouselEvent::Navigate(direction) => self.navigate_core(direction, &mut directives),
            CarouselEvent::GoTo(index) => self.go_to_core(index, &mut directives),
            CarouselEvent::KeyDown(key) => match key {
                NavigationKey::ArrowLeft => {
                    self.navigate_core(Direction::Previous, &mut directives)
                }
                NavigationKey::ArrowRight => self.navigate_core(Direction::Next, &mut directives),
                NavigationKey::Other => {}
            },
            CarouselEvent::ToggleMute => self.toggle_mute_core(&mut directives),
            CarouselEvent::PointerDown { x, y, time } => self.gestures.on_start(x, y, time),
            CarouselEvent::PointerMove { x, y } => self.gestures.on_move(x, y),
            CarouselEvent::PointerUp { x, y, time } => {
                self.on_pointer_up(x, y, time, &mut directives)
            }
            CarouselEvent::PointerCancel => self.gestures.on_cancel(),
            CarouselEvent::ItemReady { generation, index } => {
                self.on_item_ready(generation, index, &mut directives)
            }
            CarouselEvent::IntersectionChange { ratio } => {
                self.on_intersection_change(ratio, &mut directives)
            }
            CarouselEvent::RequestFullscreen { index } => {
                self.request_fullscreen_core(index, &mut directives)
            }
            CarouselEvent::ExitFullscreen => self.exit_fullscreen_if_needed(&mut directives),
            CarouselEvent::FullscreenChange { is_fullscreen } => {
                let active_index = self.active_index();
                self.fullscreen.on_native_change(is_fullscreen, active_index);
            }
            CarouselEvent::FullscreenFailed { message } => self.on_fullscreen_failed(message),
            CarouselEvent::ViewportResize { width } => {
                self.on_viewport_resize(width, &mut directives)
            }
            CarouselEvent::VolumeIndicatorElapsed { token } => {
                self.on_volume_indicator_elapsed(token, &mut directives)
            }
            CarouselEvent::Unmount => self.unmount_core(&mut directives),
        }
        directives
    }

    pub(crate) fn configuration(&self) -> &CarouselConfiguration {
        &self.config
    }

    /// Replace the current configuration.
    ///
    /// Returns the `Directive`s needed to reflect layout changes, if any.
    pub(crate) fn set_configuration(&mut self, config: CarouselConfiguration) -> Vec<Directive> {
        let layout_changed = config.layout_parameters() != self.config.layout_parameters();
        self.gestures.update_thresholds(config.gesture_thresholds());
        self.visibility.update_threshold(config.visibility_threshold);
        self.config = config;
        let mut directives = vec![];
        if layout_changed && self.active_index().is_some() {
            directives.push(Directive::UpdateTransforms(self.transforms()));
        }
        directives
    }

    /// Returns the `Collection` currently displayed, if one.
    pub(crate) fn selected_collection(&self) -> Option<&Collection> {
        self.collection.as_ref()
    }

    #[inline(always)]
    pub(crate) fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the index of the active item, `None` if there's no item to display.
    pub(crate) fn active_index(&self) -> Option<usize> {
        match &self.collection {
            Some(c) if !c.is_empty() => Some(self.current_index),
            _ => None,
        }
    }

    #[inline(always)]
    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }

    #[inline(always)]
    pub(crate) fn readiness(&self) -> &[bool] {
        self.playback.readiness()
    }

    #[inline(always)]
    pub(crate) fn muted(&self) -> &[bool] {
        self.playback.muted()
    }

    #[inline(always)]
    pub(crate) fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    #[inline(always)]
    pub(crate) fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    #[inline(always)]
    pub(crate) fn is_volume_indicator_visible(&self) -> bool {
        self.volume_indicator.is_visible
    }

    /// Returns `true` if the player at `index` should currently be playing.
    ///
    /// This is at most `true` for a single index: the active one.
    pub(crate) fn should_play(&self, index: usize) -> bool {
        self.active_index() == Some(index) && self.visibility.is_visible() && !self.is_suspended
    }

    /// Returns `true` if the player at `index` should currently be silent.
    pub(crate) fn should_be_muted(&self, index: usize) -> bool {
        self.playback.is_muted(index) || !self.visibility.is_visible()
    }

    pub(crate) fn can_go_previous(&self) -> bool {
        self.active_index().map_or(false, |i| i > 0)
    }

    pub(crate) fn can_go_next(&self) -> bool {
        match self.active_index() {
            Some(i) => i + 1 < self.item_count(),
            None => false,
        }
    }

    /// Compute the current transform of every item.
    pub(crate) fn transforms(&self) -> Vec<ItemTransform> {
        compute_transforms(
            self.item_count(),
            self.current_index,
            self.viewport_width,
            &self.config.layout_parameters(),
        )
    }

    fn item_count(&self) -> usize {
        self.collection.as_ref().map_or(0, |c| c.len())
    }
}
