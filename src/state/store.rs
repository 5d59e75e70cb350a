// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared owner of a controller's cached light state.

use parking_lot::RwLock;

use super::{LightChange, LightState};

/// The authoritative in-memory copy of one controller's light state.
///
/// The store serializes all mutations behind an `RwLock`: every write is a
/// whole-struct update, so readers can never observe half of a local change
/// mixed with half of a remote one. When an optimistic local write races a
/// poll response, whichever arrives last wins.
///
/// # Examples
///
/// ```
/// use rgbww_lib::state::{LightChange, StateStore};
///
/// let store = StateStore::new();
/// store.apply_local(&LightChange::brightness(80.0));
/// assert!(store.get().is_on());
/// ```
#[derive(Debug, Default)]
pub struct StateStore {
    inner: RwLock<LightState>,
}

impl StateStore {
    /// Creates a store holding the startup state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LightState::new()),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn get(&self) -> LightState {
        *self.inner.read()
    }

    /// Applies a single-characteristic change before network confirmation.
    ///
    /// This is the pusher's optimistic write: the cached state reflects the
    /// requested value immediately, and a later reconcile pass corrects any
    /// mismatch with what the controller actually did.
    ///
    /// Returns `true` if the field actually changed.
    pub fn apply_local(&self, change: &LightChange) -> bool {
        self.inner.write().apply(change)
    }

    /// Overwrites the full state with a controller-reported one.
    pub fn apply_remote(&self, state: LightState) {
        *self.inner.write() = state;
    }
}
