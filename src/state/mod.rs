// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state management types.
//!
//! [`LightState`] is the cached state of one controller, [`LightChange`]
//! represents a single characteristic change requested by the
//! home-automation side, and [`StateStore`] is the shared owner both the
//! pusher and the poller write through.
//!
//! # Examples
//!
//! ```
//! use rgbww_lib::state::{LightState, LightChange};
//!
//! let mut state = LightState::new();
//!
//! // Apply returns true if the state actually changed
//! assert!(state.apply(&LightChange::power_on()));
//! assert!(state.is_on());
//!
//! // Applying the same change again returns false
//! assert!(!state.apply(&LightChange::power_on()));
//! ```

mod light_state;
mod state_change;
mod store;

pub use light_state::LightState;
pub use state_change::LightChange;
pub use store::StateStore;
