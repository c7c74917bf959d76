use crate::bindings::FullscreenRequestErrorCode;

/// Fullscreen state as last known by the `FullscreenCoordinator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FullscreenState {
    /// Not in fullscreen, and no request is pending.
    Inactive,
    /// Fullscreen was requested for the item at `index` but the platform did not
    /// confirm it yet.
    Pending { index: usize },
    /// The platform reported being in fullscreen.
    Active { index: usize },
    /// Fullscreen was left on our side but the platform did not confirm it yet. A late
    /// confirmation of the previous request may still arrive and has to be ignored.
    Exiting,
}

/// Mirrors the platform's fullscreen state for the carousel's items.
///
/// The platform stays the source of truth: fullscreen may be exited without the
/// `FullscreenCoordinator` asking for it (e.g. through a back gesture), so its state is
/// only considered "active" once the platform reported it through `on_native_change`.
#[derive(Debug)]
pub(crate) struct FullscreenCoordinator {
    state: FullscreenState,
}

impl FullscreenCoordinator {
    pub(crate) fn new() -> Self {
        Self {
            state: FullscreenState::Inactive,
        }
    }

    /// Returns `true` if the platform reported being in fullscreen.
    pub(crate) fn is_fullscreen(&self) -> bool {
        matches!(self.state, FullscreenState::Active { .. })
    }

    /// Returns `true` if a fullscreen request has been made and no answer was received yet.
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self.state, FullscreenState::Pending { .. })
    }

    /// Index of the item in fullscreen or for which fullscreen was requested.
    pub(crate) fn target(&self) -> Option<usize> {
        match self.state {
            FullscreenState::Inactive | FullscreenState::Exiting => None,
            FullscreenState::Pending { index } | FullscreenState::Active { index } => {
                Some(index)
            }
        }
    }

    /// Ask for the item at `index` to be put in fullscreen, `active_index` being the
    /// index of the currently active item.
    ///
    /// Returns `true` if a request has to be sent to the platform, `false` if this item is
    /// already in fullscreen or about to be.
    pub(crate) fn request(
        &mut self,
        index: usize,
        active_index: Option<usize>,
    ) -> Result<bool, FullscreenError> {
        if active_index != Some(index) {
            return Err(FullscreenError::NotActiveItem { index });
        }
        if self.target() == Some(index) {
            return Ok(false);
        }
        self.state = FullscreenState::Pending { index };
        Ok(true)
    }

    /// Signal that the last fullscreen request failed.
    ///
    /// Returns the corresponding error, so it can be reported.
    pub(crate) fn on_request_failed(&mut self, message: String) -> FullscreenError {
        if self.is_pending() {
            self.state = FullscreenState::Inactive;
        }
        FullscreenError::FullscreenUnavailable { message }
    }

    /// Mirror a fullscreen change reported by the platform.
    ///
    /// Entering fullscreen while we are exiting it is ignored: it relates to an item which
    /// is not the active one anymore and the exit is already on its way.
    pub(crate) fn on_native_change(&mut self, is_fullscreen: bool, active_index: Option<usize>) {
        self.state = match (is_fullscreen, self.state) {
            (false, _) => FullscreenState::Inactive,
            (true, FullscreenState::Exiting) => FullscreenState::Exiting,
            (true, FullscreenState::Pending { index })
            | (true, FullscreenState::Active { index }) => FullscreenState::Active { index },
            (true, FullscreenState::Inactive) => match active_index {
                Some(index) => FullscreenState::Active { index },
                None => FullscreenState::Inactive,
            },
        };
    }

    /// Leave fullscreen.
    ///
    /// Returns `true` if the platform has to be asked to exit fullscreen, `false` if we
    /// were not in fullscreen nor about to be.
    pub(crate) fn exit(&mut self) -> bool {
        match self.state {
            FullscreenState::Inactive | FullscreenState::Exiting => false,
            FullscreenState::Pending { .. } | FullscreenState::Active { .. } => {
                self.state = FullscreenState::Exiting;
                true
            }
        }
    }
}

use thiserror::Error;

/// Error that may be returned by a fullscreen request.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum FullscreenError {
    #[error("Fullscreen is unavailable: {message}")]
    FullscreenUnavailable { message: String },
    #[error("Item {index} cannot be put in fullscreen as it is not the active item.")]
    NotActiveItem { index: usize },
}

impl From<(FullscreenRequestErrorCode, Option<String>)> for FullscreenError {
    fn from(x: (FullscreenRequestErrorCode, Option<String>)) -> Self {
        let message = match x.0 {
            FullscreenRequestErrorCode::Unsupported => x
                .1
                .unwrap_or_else(|| "No fullscreen API available.".to_string()),
            FullscreenRequestErrorCode::Denied => x
                .1
                .unwrap_or_else(|| "The request was denied.".to_string()),
            FullscreenRequestErrorCode::UnknownError => {
                x.1.unwrap_or_else(|| "Unknown Error.".to_string())
            }
        };
        FullscreenError::FullscreenUnavailable { message }
    }
}
