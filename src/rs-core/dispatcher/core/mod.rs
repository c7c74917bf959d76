use super::CarouselDispatcher;
use crate::{
    bindings::{
        formatters::format_transforms_for_js, jsAnnounceActiveItem, jsClearTimer,
        jsExitFullscreen, jsMountCollection, jsMountItem, jsRequestFullscreen, jsScrollIntoView,
        jsSeekItem, jsSetPlaying, jsSetVolume, jsSetVolumeIndicator, jsStartObservingVisibility,
        jsStopObservingVisibility, jsTimer, jsUpdateNavigationState, jsUpdateTransforms,
        JsResult, TimerId, TimerReason,
    },
    controller::{CarouselConfiguration, CarouselEvent, Directive},
    fullscreen::FullscreenError,
    Logger,
};

impl CarouselDispatcher {
    /// Let the `CarouselController` process `event` and apply what results from it.
    pub(super) fn dispatch(&mut self, event: CarouselEvent) {
        let directives = self.controller.handle(event);
        self.apply_directives(directives);
    }

    /// Update the `CarouselConfiguration` through the given closure and apply the
    /// consequences of that change.
    pub(super) fn update_configuration(&mut self, update: impl FnOnce(&mut CarouselConfiguration)) {
        let mut config = self.controller.configuration().clone();
        update(&mut config);
        let directives = self.controller.set_configuration(config);
        self.apply_directives(directives);
    }

    /// Ask the JavaScript-side to begin reporting intersection ratios, if not already
    /// done.
    pub(super) fn start_observing_visibility(&mut self) {
        if !self.is_observing_visibility {
            jsStartObservingVisibility(self.controller.configuration().visibility_threshold);
            self.is_observing_visibility = true;
        }
    }

    /// Restart a pending visibility observation so it considers the current threshold.
    pub(super) fn restart_observing_visibility(&mut self) {
        if self.is_observing_visibility {
            jsStopObservingVisibility();
            jsStartObservingVisibility(self.controller.configuration().visibility_threshold);
        }
    }

    pub(super) fn dispose_core(&mut self) {
        Logger::info("Core: Disposing carousel");
        self.dispatch(CarouselEvent::Unmount);
        self.clear_volume_indicator_timers();
        if self.is_observing_visibility {
            jsStopObservingVisibility();
            self.is_observing_visibility = false;
        }
    }

    /// Method to call once a timer for hiding the volume indicator, started with the jsTimer
    /// JavaScript function, has finished, with the corresponding `TimerId` as argument.
    pub(super) fn on_volume_indicator_timer_ended(&mut self, id: TimerId) {
        let found = self.volume_indicator_timers.iter().position(|x| x.0 == id);
        if let Some(idx) = found {
            let (_, token) = self.volume_indicator_timers.remove(idx);
            self.dispatch(CarouselEvent::VolumeIndicatorElapsed { token });
        } else {
            Logger::debug("Core: Ignoring unknown volume indicator timer");
        }
    }

    fn apply_directives(&mut self, directives: Vec<Directive>) {
        for directive in directives {
            self.apply_directive(directive);
        }
    }

    fn apply_directive(&mut self, directive: Directive) {
        match directive {
            Directive::MountCollection {
                generation,
                name,
                description,
                items,
            } => {
                Logger::lazy_debug(&|| {
                    format!("Core: Mounting {} items (generation {generation})", items.len())
                });
                jsMountCollection(generation, items.len() as u32, &name, &description);
                for (index, item) in items.iter().enumerate() {
                    jsMountItem(index as u32, &item.url, &item.title, &item.description);
                }
            }
            Directive::UpdateTransforms(transforms) => {
                jsUpdateTransforms(format_transforms_for_js(&transforms))
            }
            Directive::SetPlaying { index, playing } => jsSetPlaying(index as u32, playing),
            Directive::Seek { index, position } => jsSeekItem(index as u32, position),
            Directive::SetVolume { index, volume } => jsSetVolume(index as u32, volume),
            Directive::RequestFullscreen { index } => {
                if let Err(err) = jsRequestFullscreen(index as u32).result() {
                    let message = match FullscreenError::from(err) {
                        FullscreenError::FullscreenUnavailable { message } => message,
                        err => err.to_string(),
                    };
                    self.dispatch(CarouselEvent::FullscreenFailed { message });
                }
            }
            Directive::ExitFullscreen => jsExitFullscreen(),
            Directive::ScrollIntoView => jsScrollIntoView(),
            Directive::AnnounceActiveItem {
                index,
                title,
                description,
            } => jsAnnounceActiveItem(index as u32, &title, &description),
            Directive::UpdateNavigationState {
                can_go_previous,
                can_go_next,
            } => jsUpdateNavigationState(can_go_previous, can_go_next),
            Directive::ShowVolumeIndicator { muted } => jsSetVolumeIndicator(true, muted),
            Directive::HideVolumeIndicator => jsSetVolumeIndicator(false, false),
            Directive::ScheduleVolumeIndicatorHide { token, delay } => {
                self.clear_volume_indicator_timers();
                let timer_id = jsTimer(delay, TimerReason::VolumeIndicatorHide);
                self.volume_indicator_timers.push((timer_id, token));
            }
            Directive::CancelVolumeIndicatorHide => self.clear_volume_indicator_timers(),
        }
    }

    /// Abort every pending volume indicator timer.
    fn clear_volume_indicator_timers(&mut self) {
        while let Some(timer_info) = self.volume_indicator_timers.pop() {
            jsClearTimer(timer_info.0);
        }
    }
}
