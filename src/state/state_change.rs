// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-characteristic change intents.
//!
//! Each SET request arriving from the home-automation side targets exactly
//! one characteristic; a [`LightChange`] carries that intent to the state
//! store, which merges it with the unchanged fields before the full state
//! is pushed to the controller.

use crate::types::ColorTemp;

/// A requested change to one light characteristic.
///
/// # Examples
///
/// ```
/// use rgbww_lib::state::{LightChange, LightState};
///
/// let mut state = LightState::new();
/// state.apply(&LightChange::brightness(60.0));
/// assert!(state.is_on());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightChange {
    /// Hue changed (degrees, 0-360).
    Hue(f64),

    /// Saturation changed (percent, 0-100).
    Saturation(f64),

    /// Brightness changed (percent, 0-100).
    Brightness(f64),

    /// Power switched; `true` drives brightness to 100, `false` to 0.
    Power(bool),

    /// White channel color temperature changed.
    ColorTemp(ColorTemp),
}

impl LightChange {
    /// Creates a hue change.
    #[must_use]
    pub const fn hue(degrees: f64) -> Self {
        Self::Hue(degrees)
    }

    /// Creates a saturation change.
    #[must_use]
    pub const fn saturation(percent: f64) -> Self {
        Self::Saturation(percent)
    }

    /// Creates a brightness change.
    #[must_use]
    pub const fn brightness(percent: f64) -> Self {
        Self::Brightness(percent)
    }

    /// Creates a power-on change.
    #[must_use]
    pub const fn power_on() -> Self {
        Self::Power(true)
    }

    /// Creates a power-off change.
    #[must_use]
    pub const fn power_off() -> Self {
        Self::Power(false)
    }

    /// Creates a color temperature change.
    #[must_use]
    pub const fn color_temp(ct: ColorTemp) -> Self {
        Self::ColorTemp(ct)
    }

    /// Creates a color temperature change from the external (inverse) form.
    #[must_use]
    pub fn color_temp_external(external: f64) -> Self {
        Self::ColorTemp(ColorTemp::from_external(external))
    }

    /// Returns `true` if this is a power change.
    #[must_use]
    pub const fn is_power(&self) -> bool {
        matches!(self, Self::Power(_))
    }
}
