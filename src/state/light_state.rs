// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached light state of one controller.

use crate::types::{ColorTemp, HsvData};

use super::LightChange;

/// The current light state of an RGBWW controller.
///
/// This is a single current-value cache, not a log: it is created once per
/// configured device and overwritten in place, optimistically by the pusher
/// and authoritatively by the poller. There is exactly one instance per
/// device (held by its [`StateStore`](super::StateStore)); no other
/// component keeps a competing copy.
///
/// Field domains follow the controller's wire protocol: hue 0-360 degrees,
/// saturation and brightness 0-100 percent. A brightness of 0 is the
/// canonical "off" state. Values arriving here have already been
/// bounds-checked by the characteristic layer.
///
/// # Examples
///
/// ```
/// use rgbww_lib::state::LightState;
///
/// let state = LightState::new();
/// assert!(!state.is_on());
/// assert!((state.color_temp().value() - 2700.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    /// Hue in degrees (0-360).
    hue: f64,
    /// Saturation in percent (0-100).
    saturation: f64,
    /// Brightness in percent (0-100); 0 is off.
    value: f64,
    /// White channel color temperature, never zero.
    color_temp: ColorTemp,
}

impl LightState {
    /// Creates the startup state: black, off, neutral white.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            value: 0.0,
            color_temp: ColorTemp::NEUTRAL,
        }
    }

    /// Returns the hue in degrees.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Returns the saturation in percent.
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Returns the brightness in percent.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the color temperature.
    #[must_use]
    pub const fn color_temp(&self) -> ColorTemp {
        self.color_temp
    }

    /// Returns `true` if the light is on (brightness above zero).
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.value > 0.0
    }

    /// Applies a single characteristic change.
    ///
    /// Power-on raises brightness to 100, power-off drops it to 0; hue and
    /// saturation stay untouched so the color survives an off/on cycle.
    ///
    /// # Returns
    ///
    /// Returns `true` if the state was modified, `false` if the field was
    /// already at the target value.
    // Exact comparison is intended: a SET carrying the cached value must
    // not trigger a push.
    #[allow(clippy::float_cmp)]
    pub fn apply(&mut self, change: &LightChange) -> bool {
        match *change {
            LightChange::Hue(hue) => {
                if self.hue == hue {
                    false
                } else {
                    self.hue = hue;
                    true
                }
            }
            LightChange::Saturation(saturation) => {
                if self.saturation == saturation {
                    false
                } else {
                    self.saturation = saturation;
                    true
                }
            }
            LightChange::Brightness(value) => {
                if self.value == value {
                    false
                } else {
                    self.value = value;
                    true
                }
            }
            LightChange::Power(on) => {
                let value = if on { 100.0 } else { 0.0 };
                if self.value == value {
                    false
                } else {
                    self.value = value;
                    true
                }
            }
            LightChange::ColorTemp(ct) => {
                if self.color_temp == ct {
                    false
                } else {
                    self.color_temp = ct;
                    true
                }
            }
        }
    }

    /// Builds a state from a controller-reported HSV object.
    ///
    /// The color temperature goes through the zero-substitution guard of
    /// [`ColorTemp::new`].
    #[must_use]
    pub fn from_hsv(hsv: HsvData) -> Self {
        Self {
            hue: hsv.h(),
            saturation: hsv.s(),
            value: hsv.v(),
            color_temp: ColorTemp::new(hsv.ct()),
        }
    }

    /// Returns the state as the controller's HSV wire object.
    #[must_use]
    pub fn to_hsv(self) -> HsvData {
        HsvData::new(self.hue, self.saturation, self.value, self.color_temp.value())
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_state() {
        let state = LightState::new();
        assert!(state.hue().abs() < f64::EPSILON);
        assert!(state.saturation().abs() < f64::EPSILON);
        assert!(state.value().abs() < f64::EPSILON);
        assert!(!state.is_on());
        assert_eq!(state.color_temp(), ColorTemp::NEUTRAL);
    }

    #[test]
    fn apply_hue_change() {
        let mut state = LightState::new();

        assert!(state.apply(&LightChange::hue(120.0)));
        assert!((state.hue() - 120.0).abs() < f64::EPSILON);

        // Same value again is a no-op
        assert!(!state.apply(&LightChange::hue(120.0)));
    }

    #[test]
    fn apply_saturation_and_brightness() {
        let mut state = LightState::new();

        assert!(state.apply(&LightChange::saturation(40.0)));
        assert!(state.apply(&LightChange::brightness(75.0)));
        assert!((state.saturation() - 40.0).abs() < f64::EPSILON);
        assert!((state.value() - 75.0).abs() < f64::EPSILON);
        assert!(state.is_on());
    }

    #[test]
    fn power_on_sets_full_brightness() {
        let mut state = LightState::new();

        assert!(state.apply(&LightChange::power_on()));
        assert!((state.value() - 100.0).abs() < f64::EPSILON);
        assert!(state.is_on());
    }

    #[test]
    fn power_off_keeps_color() {
        let mut state = LightState::new();
        state.apply(&LightChange::hue(200.0));
        state.apply(&LightChange::saturation(60.0));
        state.apply(&LightChange::power_on());

        assert!(state.apply(&LightChange::power_off()));
        assert!(!state.is_on());
        assert!(state.value().abs() < f64::EPSILON);
        assert!((state.hue() - 200.0).abs() < f64::EPSILON);
        assert!((state.saturation() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn power_change_detects_no_op() {
        let mut state = LightState::new();
        assert!(!state.apply(&LightChange::power_off()));

        state.apply(&LightChange::power_on());
        assert!(!state.apply(&LightChange::power_on()));
    }

    #[test]
    fn on_off_derivation() {
        let mut state = LightState::new();
        for value in [0.0, 0.5, 1.0, 50.0, 100.0] {
            state.apply(&LightChange::brightness(value));
            assert_eq!(state.is_on(), value > 0.0);
        }
    }

    #[test]
    fn from_hsv_substitutes_zero_ct() {
        let state = LightState::from_hsv(HsvData::new(10.0, 20.0, 30.0, 0.0));

        assert!((state.hue() - 10.0).abs() < f64::EPSILON);
        assert!((state.saturation() - 20.0).abs() < f64::EPSILON);
        assert!((state.value() - 30.0).abs() < f64::EPSILON);
        assert_eq!(state.color_temp(), ColorTemp::NEUTRAL);
        assert!(state.color_temp().to_external().is_finite());
    }

    #[test]
    fn hsv_round_trip() {
        let mut state = LightState::new();
        state.apply(&LightChange::hue(42.0));
        state.apply(&LightChange::saturation(13.0));
        state.apply(&LightChange::brightness(87.0));

        let back = LightState::from_hsv(state.to_hsv());
        assert_eq!(back, state);
    }
}
