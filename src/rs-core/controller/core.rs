use super::{CarouselController, Direction, Directive};
use crate::{
    gesture::Gesture, registry::Collection, visibility::VisibilityTransition, Logger,
};

impl CarouselController {
    /// Replace the displayed `Collection` and reset every piece of state linked to the
    /// previous one.
    ///
    /// Re-selecting the `Collection` already displayed also performs that full reset.
    pub(super) fn select_collection_core(
        &mut self,
        collection: Collection,
        directives: &mut Vec<Directive>,
    ) {
        Logger::lazy_info(&|| {
            format!(
                "Controller: Selecting collection \"{}\" ({} items)",
                collection.id(),
                collection.len()
            )
        });
        let is_first_selection = !self.has_selected;
        self.has_selected = true;
        self.generation = self.generation.wrapping_add(1);

        self.exit_fullscreen_if_needed(directives);
        self.hide_volume_indicator(directives);
        self.gestures.on_cancel();
        self.current_index = 0;
        self.is_suspended = !self.visibility.is_visible();
        self.playback.reset(collection.len());

        directives.push(Directive::MountCollection {
            generation: self.generation,
            name: collection.name().to_owned(),
            description: collection.description().to_owned(),
            items: collection.items().to_vec(),
        });
        self.collection = Some(collection);

        if let Some(active) = self.active_index() {
            if self.should_play(active) {
                directives.push(Directive::SetPlaying {
                    index: active,
                    playing: true,
                });
            }
        }
        self.announce_layout(directives);

        // The initial selection happens on mount, the page should not jump to it.
        if !is_first_selection {
            directives.push(Directive::ScrollIntoView);
        }
    }

    pub(super) fn navigate_core(&mut self, direction: Direction, directives: &mut Vec<Directive>) {
        let len = self.item_count();
        let requested = match direction {
            Direction::Previous => self.current_index as isize - 1,
            Direction::Next => self.current_index as isize + 1,
        };
        if requested < 0 || requested as usize >= len {
            let err = NavigationError::IndexOutOfRange { requested, len };
            Logger::lazy_debug(&|| format!("Controller: Ignored navigation: {err}"));
            return;
        }
        self.move_to(requested as usize, directives);
    }

    pub(super) fn go_to_core(&mut self, index: usize, directives: &mut Vec<Directive>) {
        let len = self.item_count();
        if index >= len {
            let err = NavigationError::IndexOutOfRange {
                requested: index as isize,
                len,
            };
            Logger::lazy_debug(&|| format!("Controller: Ignored navigation: {err}"));
            return;
        }
        self.move_to(index, directives);
    }

    /// Make the item at `target`, which has to be inside the collection's bounds, the
    /// active one.
    fn move_to(&mut self, target: usize, directives: &mut Vec<Directive>) {
        let previous = self.current_index;
        if target == previous {
            return;
        }
        Logger::lazy_debug(&|| format!("Controller: Moving from item {previous} to {target}"));
        directives.push(Directive::SetPlaying {
            index: previous,
            playing: false,
        });
        directives.push(Directive::Seek {
            index: previous,
            position: 0.,
        });
        self.current_index = target;
        self.exit_fullscreen_if_needed(directives);
        self.hide_volume_indicator(directives);
        self.is_suspended = !self.visibility.is_visible();

        if self.playback.is_ready(target) {
            directives.push(Directive::SetVolume {
                index: target,
                volume: self.effective_volume(target),
            });
        }
        if self.should_play(target) {
            directives.push(Directive::SetPlaying {
                index: target,
                playing: true,
            });
        }
        self.announce_layout(directives);
    }

    pub(super) fn toggle_mute_core(&mut self, directives: &mut Vec<Directive>) {
        let Some(active) = self.active_index() else {
            Logger::debug("Controller: No active item to mute or unmute");
            return;
        };
        // Out of view, the active item stays muted until the carousel is visible again.
        if !self.visibility.is_visible() {
            Logger::debug("Controller: Ignored mute toggle while out of view");
            return;
        }
        match self.playback.toggle_mute(active) {
            Ok(muted) => {
                directives.push(Directive::SetVolume {
                    index: active,
                    volume: self.effective_volume(active),
                });
                self.show_volume_indicator(muted, directives);
            }
            Err(err) => Logger::lazy_debug(&|| format!("Controller: Ignored mute toggle: {err}")),
        }
    }

    pub(super) fn on_pointer_up(
        &mut self,
        x: f64,
        y: f64,
        time: f64,
        directives: &mut Vec<Directive>,
    ) {
        match self.gestures.on_end(x, y, time) {
            None => {}
            Some(Gesture::Tap) => self.toggle_mute_core(directives),
            Some(Gesture::SwipeNext) => self.navigate_core(Direction::Next, directives),
            Some(Gesture::SwipePrevious) => self.navigate_core(Direction::Previous, directives),
            Some(Gesture::Ignored) => Logger::debug("Controller: Ignored ambiguous gesture"),
        }
    }

    pub(super) fn on_item_ready(
        &mut self,
        generation: u32,
        index: usize,
        directives: &mut Vec<Directive>,
    ) {
        if generation != self.generation {
            Logger::lazy_debug(&|| {
                format!(
                    "Controller: Ignored readiness of item {index} from generation {generation}"
                )
            });
            return;
        }
        if let Err(err) = self.playback.mark_ready(index) {
            Logger::lazy_warn(&|| format!("Controller: Ignored readiness: {err}"));
            return;
        }
        if self.active_index() != Some(index) {
            return;
        }
        directives.push(Directive::SetVolume {
            index,
            volume: self.effective_volume(index),
        });
        if self.should_play(index) {
            directives.push(Directive::SetPlaying {
                index,
                playing: true,
            });
        }
    }

    pub(super) fn on_intersection_change(&mut self, ratio: f64, directives: &mut Vec<Directive>) {
        match self.visibility.on_intersection_ratio(ratio) {
            None => {}
            Some(VisibilityTransition::BecameHidden) => {
                Logger::debug("Controller: Carousel went out of view, suspending playback");
                self.is_suspended = true;
                if let Some(active) = self.active_index() {
                    self.playback.force_mute(active);
                    directives.push(Directive::SetPlaying {
                        index: active,
                        playing: false,
                    });
                    directives.push(Directive::Seek {
                        index: active,
                        position: 0.,
                    });
                    if self.playback.is_ready(active) {
                        directives.push(Directive::SetVolume {
                            index: active,
                            volume: 0.,
                        });
                    }
                }
                self.hide_volume_indicator(directives);
            }
            Some(VisibilityTransition::BecameVisible) => {
                if !self.config.resume_on_visible {
                    return;
                }
                Logger::debug("Controller: Carousel came back into view, resuming playback");
                self.is_suspended = false;
                if let Some(active) = self.active_index() {
                    if self.playback.is_ready(active) {
                        directives.push(Directive::SetVolume {
                            index: active,
                            volume: self.effective_volume(active),
                        });
                    }
                    directives.push(Directive::SetPlaying {
                        index: active,
                        playing: true,
                    });
                }
            }
        }
    }

    pub(super) fn request_fullscreen_core(&mut self, index: usize, directives: &mut Vec<Directive>) {
        let active_index = self.active_index();
        match self.fullscreen.request(index, active_index) {
            Ok(true) => directives.push(Directive::RequestFullscreen { index }),
            Ok(false) => {}
            Err(err) => {
                Logger::lazy_debug(&|| format!("Controller: Ignored fullscreen request: {err}"))
            }
        }
    }

    pub(super) fn on_fullscreen_failed(&mut self, message: String) {
        let err = self.fullscreen.on_request_failed(message);
        Logger::lazy_warn(&|| format!("Controller: {err}"));
    }

    pub(super) fn exit_fullscreen_if_needed(&mut self, directives: &mut Vec<Directive>) {
        if self.fullscreen.exit() {
            directives.push(Directive::ExitFullscreen);
        }
    }

    pub(super) fn on_viewport_resize(&mut self, width: f64, directives: &mut Vec<Directive>) {
        if !width.is_finite() || width < 0. || width == self.viewport_width {
            return;
        }
        self.viewport_width = width;
        if self.active_index().is_some() {
            directives.push(Directive::UpdateTransforms(self.transforms()));
        }
    }

    pub(super) fn on_volume_indicator_elapsed(
        &mut self,
        token: u32,
        directives: &mut Vec<Directive>,
    ) {
        if token != self.volume_indicator.token || !self.volume_indicator.is_visible {
            return;
        }
        self.volume_indicator.is_visible = false;
        directives.push(Directive::HideVolumeIndicator);
    }

    /// Release everything linked to the displayed `Collection`, going back to the state
    /// the `CarouselController` was in when created.
    pub(super) fn unmount_core(&mut self, directives: &mut Vec<Directive>) {
        Logger::info("Controller: Unmounting carousel");
        self.exit_fullscreen_if_needed(directives);
        self.hide_volume_indicator(directives);
        if let Some(active) = self.active_index() {
            directives.push(Directive::SetPlaying {
                index: active,
                playing: false,
            });
        }
        self.gestures.on_cancel();
        self.visibility.reset();
        self.playback.reset(0);
        self.collection = None;
        self.current_index = 0;
        self.has_selected = false;
        self.is_suspended = false;
        // Late readiness notifications are now stale.
        self.generation = self.generation.wrapping_add(1);
    }

    fn show_volume_indicator(&mut self, muted: bool, directives: &mut Vec<Directive>) {
        let indicator = &mut self.volume_indicator;
        indicator.token = indicator.token.wrapping_add(1);
        indicator.is_visible = true;
        directives.push(Directive::ShowVolumeIndicator { muted });
        directives.push(Directive::ScheduleVolumeIndicatorHide {
            token: indicator.token,
            delay: self.config.volume_indicator_duration,
        });
    }

    fn hide_volume_indicator(&mut self, directives: &mut Vec<Directive>) {
        let indicator = &mut self.volume_indicator;
        if !indicator.is_visible {
            return;
        }
        indicator.is_visible = false;
        indicator.token = indicator.token.wrapping_add(1);
        directives.push(Directive::CancelVolumeIndicatorHide);
        directives.push(Directive::HideVolumeIndicator);
    }

    fn announce_layout(&self, directives: &mut Vec<Directive>) {
        directives.push(Directive::UpdateTransforms(self.transforms()));
        directives.push(Directive::UpdateNavigationState {
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
        });
        let active = self
            .active_index()
            .and_then(|i| Some((i, self.collection.as_ref()?.item(i)?)));
        if let Some((index, item)) = active {
            directives.push(Directive::AnnounceActiveItem {
                index,
                title: item.title.clone(),
                description: item.description.clone(),
            });
        }
    }

    fn effective_volume(&self, index: usize) -> f64 {
        if self.should_be_muted(index) {
            0.
        } else {
            1.
        }
    }
}

use thiserror::Error;

/// Error that may arise when navigating between items.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum NavigationError {
    #[error("Item {requested} is out of range: the collection has {len} items.")]
    IndexOutOfRange { requested: isize, len: usize },
}
