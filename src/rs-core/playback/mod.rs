/// Keeps track of the readiness and mute state of every player of the carousel.
///
/// Readiness is reported asynchronously by the players and gates any change to their
/// audio: changing the volume of a player which cannot play yet either silently fails or
/// throws depending on the underlying player.
#[derive(Debug)]
pub(crate) struct PlaybackResourceManager {
    /// `true` at a given index once the corresponding player signaled it can play.
    readiness: Vec<bool>,

    /// `true` at a given index if the corresponding player should not emit any sound.
    muted: Vec<bool>,
}

impl PlaybackResourceManager {
    /// Create a new `PlaybackResourceManager` for `item_count` players, all unready and
    /// muted.
    pub(crate) fn new(item_count: usize) -> Self {
        Self {
            readiness: vec![false; item_count],
            muted: vec![true; item_count],
        }
    }

    /// Forget everything about the previous players and start tracking `item_count` new
    /// ones, all unready and muted.
    pub(crate) fn reset(&mut self, item_count: usize) {
        self.readiness.clear();
        self.readiness.resize(item_count, false);
        self.muted.clear();
        self.muted.resize(item_count, true);
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.readiness.len()
    }

    #[inline(always)]
    pub(crate) fn readiness(&self) -> &[bool] {
        &self.readiness
    }

    #[inline(always)]
    pub(crate) fn muted(&self) -> &[bool] {
        &self.muted
    }

    /// Returns `true` if the player at `index` signaled it can play.
    ///
    /// Returns `false` for unknown indexes.
    pub(crate) fn is_ready(&self, index: usize) -> bool {
        self.readiness.get(index).copied().unwrap_or(false)
    }

    /// Returns `true` if the player at `index` should not emit any sound.
    ///
    /// Returns `true` for unknown indexes.
    pub(crate) fn is_muted(&self, index: usize) -> bool {
        self.muted.get(index).copied().unwrap_or(true)
    }

    /// Record that the player at `index` can now play.
    pub(crate) fn mark_ready(&mut self, index: usize) -> Result<(), PlaybackError> {
        let len = self.len();
        match self.readiness.get_mut(index) {
            Some(ready) => {
                *ready = true;
                Ok(())
            }
            None => Err(PlaybackError::UnknownItem { index, len }),
        }
    }

    /// Flip the mute state of the player at `index`, returning the new state.
    ///
    /// Nothing is updated if that player is not ready yet.
    pub(crate) fn toggle_mute(&mut self, index: usize) -> Result<bool, PlaybackError> {
        if index >= self.len() {
            return Err(PlaybackError::UnknownItem {
                index,
                len: self.len(),
            });
        }
        if !self.readiness[index] {
            return Err(PlaybackError::NotReady { index });
        }
        let muted = &mut self.muted[index];
        *muted = !*muted;
        Ok(*muted)
    }

    /// Mute the player at `index` whatever its readiness.
    ///
    /// Returns `true` if it was audible before.
    pub(crate) fn force_mute(&mut self, index: usize) -> bool {
        match self.muted.get_mut(index) {
            Some(muted) => !std::mem::replace(muted, true),
            None => false,
        }
    }
}

use thiserror::Error;

/// Error that may be returned when updating the state of a player.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum PlaybackError {
    #[error("Player {index} cannot be updated: it is not ready yet.")]
    NotReady { index: usize },
    #[error("No player at index {index}: only {len} are currently tracked.")]
    UnknownItem { index: usize, len: usize },
}
